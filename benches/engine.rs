//! Performance benchmarks for bix
//!
//! Run with: cargo bench

use bix::index::{BooleanIndex, DocId, Document};
use bix::query::BooleanSearch;
use bix::utils::{stem, tokenize};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SENTENCES: [&str; 6] = [
    "нефть и газ остаются основой экспорта страны",
    "новые санкции затронули банковский сектор европы",
    "машины и моторы проходят сертификацию в россии",
    "возможности индексации текста растут с каждым годом",
    "Санкт-Петербург принимает международный экономический форум",
    "см. подробности на www.example.ru или пишите на info@example.ru",
];

/// Synthetic corpus cycling through the sample sentences.
fn build_index(docs: usize) -> BooleanIndex {
    let mut index = BooleanIndex::with_table_capacity(1 << 14);
    for id in 0..docs {
        let text = format!(
            "{} {}",
            SENTENCES[id % SENTENCES.len()],
            SENTENCES[(id + 1) % SENTENCES.len()]
        );
        index.add_document(&Document {
            id: id as DocId,
            key: format!("http://doc/{}", id),
            text,
        });
    }
    index.finalize();
    index
}

fn bench_tokenize(c: &mut Criterion) {
    let paragraph = SENTENCES.join(" ");
    c.bench_function("tokenize_paragraph", |b| {
        b.iter(|| tokenize(black_box(&paragraph)))
    });
}

fn bench_stem(c: &mut Criterion) {
    let forms = [
        "машинами",
        "возможностью",
        "реализацией",
        "документами",
        "санкт-петербург",
        "covid19",
    ];
    c.bench_function("stem_forms", |b| {
        b.iter(|| {
            for form in forms {
                black_box(stem(black_box(form)));
            }
        })
    });
}

fn bench_index_build(c: &mut Criterion) {
    c.bench_function("index_build_1k_docs", |b| b.iter(|| build_index(1000)));
}

fn bench_search(c: &mut Criterion) {
    let index = build_index(10_000);
    let search = BooleanSearch::new(&index);
    let queries = [
        "нефть AND газ",
        "(нефть OR газ) AND NOT европа",
        "санкции машины",
        "NOT NOT форум",
    ];
    c.bench_function("search_queries_10k_docs", |b| {
        b.iter(|| {
            for query in queries {
                black_box(search.search(black_box(query)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_tokenize,
    bench_stem,
    bench_index_build,
    bench_search
);
criterion_main!(benches);
