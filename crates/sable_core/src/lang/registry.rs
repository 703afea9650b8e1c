//! Shareable metadata for `sable_core::lang` registries.
//!
//! The `sable_core::lang` module is a set of **registry-first** vocabularies: keywords,
//! operators and punctuation. This submodule provides the small metadata types that are
//! reused across all registries, plus the index builder behind every `from_str`.
//!
//! ## Notes
//! - Metadata types are `Copy` so registries can live in `const` tables.
//! - `Since` is documentation metadata; it does not gate anything in the scanner or builder.
//! - Indexes are built lazily, exactly once, from the const tables. The tables stay the single
//!   source of truth; the index is derived data.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Language version a vocabulary item is available since, as `(major, minor)`.
///
/// ## Examples
/// ```rust
/// use sable_core::lang::registry::Since;
///
/// assert!(Since(0, 1) < Since(0, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Since(pub u16, pub u16);

/// Build an exact-match spelling index.
///
/// ## Parameters
/// - `entries`: `(spelling, id)` pairs, usually flattened out of a const registry table.
///
/// ## Returns
/// - A hash map from spelling to id. If a spelling appears twice, the first entry wins.
pub(crate) fn spelling_index<Id, I>(entries: I) -> FxHashMap<&'static str, Id>
where
    Id: Copy + Eq + Hash,
    I: IntoIterator<Item = (&'static str, Id)>,
{
    let mut map = FxHashMap::default();
    for (spelling, id) in entries {
        map.entry(spelling).or_insert(id);
    }
    map
}
