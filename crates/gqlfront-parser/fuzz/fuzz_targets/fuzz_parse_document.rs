#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(document) = gqlfront_parser::parse_document(s) {
        assert!(document.equals_ast(&document.clone(), true));
        assert!(document.origin().is_some());
    }
});
