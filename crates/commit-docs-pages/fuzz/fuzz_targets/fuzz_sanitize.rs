#![no_main]

use commit_docs_pages::sanitize;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let clean = sanitize(text);
        assert!(!clean.starts_with('_') && !clean.ends_with('_'));
        assert!(!clean.contains("__"));
    }
});
