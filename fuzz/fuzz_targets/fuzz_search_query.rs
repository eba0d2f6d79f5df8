#![no_main]

use bix::index::{BooleanIndex, Document};
use bix::query::BooleanSearch;
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

static INDEX: OnceLock<BooleanIndex> = OnceLock::new();

fn shared_index() -> &'static BooleanIndex {
    INDEX.get_or_init(|| {
        let mut index = BooleanIndex::new();
        index.add_document(&Document {
            id: 0,
            key: "u0".into(),
            text: "нефть и газ европа".into(),
        });
        index.add_document(&Document {
            id: 1,
            key: "u1".into(),
            text: "газ россия".into(),
        });
        index.finalize();
        index
    })
}

fuzz_target!(|data: &str| {
    // Arbitrary queries must never panic: mismatched parentheses and
    // operator underflow degrade to empty sub-results.
    let _ = BooleanSearch::new(shared_index()).search(data);
});
