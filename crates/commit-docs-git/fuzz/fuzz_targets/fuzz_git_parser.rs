#![no_main]

use commit_docs_git::parser::{parse_git_date, parse_log_output, parse_name_status};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = parse_log_output(text);
        let _ = parse_name_status(text);
        let _ = parse_git_date(text);
    }
});
