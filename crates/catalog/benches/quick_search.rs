use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use zagros_catalog::{filter_products, quick_search, ProductFilter};

/// The search scan runs on every keystroke, so the interesting number is
/// the per-call cost over the full dataset, for short and long needles in
/// both scripts.
fn bench_quick_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("quick_search");

    for query in ["a", "saffron", "زعفران", "no-such-term-anywhere"] {
        group.bench_with_input(BenchmarkId::from_parameter(query), &query, |b, q| {
            b.iter(|| quick_search(black_box(q)));
        });
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    c.bench_function("filter_products/default", |b| {
        let filter = ProductFilter::default();
        b.iter(|| filter_products(black_box(&filter)));
    });
}

criterion_group!(benches, bench_quick_search, bench_filter);
criterion_main!(benches);
