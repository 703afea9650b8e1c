//! Scanner configuration.
//!
//! The defaults describe the strict scanner. The knobs exist for callers that need to accept
//! input produced for the older, more permissive scanner.

/// How the scanner treats `.` inside a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DotPolicy {
    /// At most one `.`; a second one is a `MultipleDots` error.
    #[default]
    Single,
    /// Any number of dots is glued into the literal. The classifier later marks such a lexeme
    /// `Invalid`.
    Unchecked,
}

/// Options for [`crate::lexer::Scanner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    pub dot_policy: DotPolicy,
    /// Whether `'` opens a char literal. When `false`, `'` is an unclassified rune.
    pub char_literals: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            dot_policy: DotPolicy::Single,
            char_literals: true,
        }
    }
}

impl ScanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dot_policy(mut self, dot_policy: DotPolicy) -> Self {
        self.dot_policy = dot_policy;
        self
    }

    pub fn with_char_literals(mut self, enabled: bool) -> Self {
        self.char_literals = enabled;
        self
    }
}
