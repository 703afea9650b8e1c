#![no_main]

use libfuzzer_sys::fuzz_target;
use sable::config::{DotPolicy, ScanConfig};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Strict and permissive scans must both return a value, never panic
        let strict = sable::parse_source(s);
        let lenient = ScanConfig::new().with_dot_policy(DotPolicy::Unchecked);
        let _ = sable::parse_source_with(s, &lenient);

        // A tree that built once must build again from its own rendering
        if let Ok(file) = strict {
            let rendered = file.to_string();
            let again = sable::parse_source(&rendered).expect("rendered tree should build");
            assert_eq!(again.to_string(), rendered);
        }
    }
});
