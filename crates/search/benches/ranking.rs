//! Benchmarks for matching, ranking and the fallback-heavy search path.

use catalog_search::{
    edit_distance, fuzzy_match, rank, CatalogItem, MemoryCatalog, SearchEngine, VerificationStatus,
    DEFAULT_FUZZY_THRESHOLD,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;

const WORDS: [&str; 12] = [
    "handwoven", "nepali", "pashmina", "scarf", "singing", "bowl", "prayer", "flags", "yak",
    "wool", "thangka", "painting",
];

fn create_items(count: usize) -> Vec<CatalogItem> {
    (0..count)
        .map(|i| CatalogItem {
            id: i.to_string(),
            title: format!(
                "{} {} {}",
                WORDS[i % WORDS.len()],
                WORDS[(i * 7 + 3) % WORDS.len()],
                WORDS[(i * 5 + 1) % WORDS.len()]
            ),
            description: format!("{} made by hand in {}", WORDS[(i * 3) % WORDS.len()], "kathmandu"),
            category: Some("crafts".to_string()),
            price: (i % 90) as f64 + 9.99,
            is_active: true,
            verification_status: VerificationStatus::Approved,
            weighted_rating: (i % 50) as f64 / 10.0,
        })
        .collect()
}

fn bench_edit_distance(c: &mut Criterion) {
    c.bench_function("edit_distance_word", |b| {
        b.iter(|| edit_distance(black_box("pashmnia"), black_box("pashmina")))
    });
}

fn bench_fuzzy_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("fuzzy_scan");

    for size in [100, 500].iter() {
        let items = create_items(*size);
        group.bench_with_input(BenchmarkId::new("typo_query", size), size, |b, _| {
            b.iter(|| {
                items
                    .iter()
                    .filter(|item| fuzzy_match(black_box("pashmnia"), &item.title, DEFAULT_FUZZY_THRESHOLD))
                    .count()
            })
        });
    }

    group.finish();
}

fn bench_rank(c: &mut Criterion) {
    let items = create_items(600);

    c.bench_function("rank_600", |b| {
        b.iter(|| rank(black_box(items.clone()), black_box("nepali wool scarf")))
    });
}

fn bench_search_with_fallback(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("failed to build runtime");
    let engine = SearchEngine::new(Arc::new(MemoryCatalog::new(create_items(500))));

    c.bench_function("search_typo_fallback_500", |b| {
        b.iter(|| runtime.block_on(engine.search(black_box("pashmnia"), 1, 20)))
    });
}

criterion_group!(
    benches,
    bench_edit_distance,
    bench_fuzzy_scan,
    bench_rank,
    bench_search_with_fallback
);
criterion_main!(benches);
