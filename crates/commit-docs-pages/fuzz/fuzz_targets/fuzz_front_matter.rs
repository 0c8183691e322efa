#![no_main]

use commit_docs_pages::FrontMatter;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Some(front_matter) = FrontMatter::parse(text) {
            let _ = front_matter.get("commit_hash");
        }
    }
});
