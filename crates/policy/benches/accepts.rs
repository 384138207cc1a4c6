//! Benchmarks for the filter policy
//!
//! Run with: cargo bench --package policy
//!
//! Measures the accept predicate against large whitelists/blacklists,
//! which is the hot path of a locate pass over a big candidate set.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use policy::FilterPolicy;

fn synthetic_identities(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("com.example.plugins.Plugin{i:05}"))
        .collect()
}

fn bench_unrestricted(c: &mut Criterion) {
    let policy = FilterPolicy::new();

    c.bench_function("accepts_unrestricted", |b| {
        b.iter(|| policy.accepts(black_box("com.example.plugins.Plugin00042")))
    });
}

fn bench_whitelist_hit(c: &mut Criterion) {
    let policy = FilterPolicy::new().with_whitelist(synthetic_identities(10_000));

    c.bench_function("accepts_whitelist_hit", |b| {
        b.iter(|| policy.accepts(black_box("com.example.plugins.Plugin09999")))
    });
}

fn bench_whitelist_miss(c: &mut Criterion) {
    let policy = FilterPolicy::new().with_whitelist(synthetic_identities(10_000));

    c.bench_function("accepts_whitelist_miss", |b| {
        b.iter(|| policy.accepts(black_box("com.example.plugins.Unlisted")))
    });
}

fn bench_both_lists(c: &mut Criterion) {
    let policy = FilterPolicy::new()
        .with_whitelist(synthetic_identities(10_000))
        .with_blacklist(synthetic_identities(1_000));

    c.bench_function("accepts_both_lists", |b| {
        b.iter(|| policy.accepts(black_box("com.example.plugins.Plugin05000")))
    });
}

criterion_group!(
    benches,
    bench_unrestricted,
    bench_whitelist_hit,
    bench_whitelist_miss,
    bench_both_lists
);
criterion_main!(benches);
