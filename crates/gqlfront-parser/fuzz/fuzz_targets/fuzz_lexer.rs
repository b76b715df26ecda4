#![no_main]

use gqlfront_parser::Source;
use gqlfront_parser::token_source::StrTokenSource;
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let source = Arc::new(Source::from(s));
    for _ in StrTokenSource::new(&source) {}
});
