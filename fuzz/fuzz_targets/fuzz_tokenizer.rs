#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Tokenization of arbitrary input should not panic, and every emitted
    // surface form must respect the byte-length bounds.
    for token in bix::utils::tokenize(data) {
        assert!(token.len() >= 2 && token.len() <= 200);
    }
});
