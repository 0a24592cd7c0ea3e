//! Benchmarks for search scoring and caching.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use srb_search::{levenshtein_distance, normalize_text, SearchContext, SearchRecord};

fn create_records(count: usize) -> Vec<SearchRecord> {
    (0..count)
        .map(|i| SearchRecord {
            title: format!("Artikel {} om Reformationsbibeln", i),
            description: format!("Läs om grundtexten, Textus Receptus och kapitel {}.", i % 150),
            url: format!("#artikel-{}", i),
            icon: "fas fa-book".to_string(),
            keywords: vec!["bibel".to_string(), "grundtext".to_string(), format!("kapitel{}", i)],
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_text", |b| {
        b.iter(|| normalize_text(black_box("Svenska Reformationsbibeln: Karl XII:s Bibel från 1703!")))
    });
}

fn bench_levenshtein(c: &mut Criterion) {
    c.bench_function("levenshtein_distance", |b| {
        b.iter(|| levenshtein_distance(black_box("reformationen"), black_box("reformationsbibeln")))
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_uncached");
    let schema = srb_core::config::ConfigSchema::default();

    for size in [10, 100, 1000].iter() {
        let records = create_records(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter_batched(
                || SearchContext::from_config(&schema, records.clone()),
                |mut ctx| ctx.search(black_box("bibel grundtext")),
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_levenshtein, bench_search);
criterion_main!(benches);
