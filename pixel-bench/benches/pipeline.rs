//! Criterion benchmark for the full analysis pipeline over generated
//! diamond-chain fixtures of increasing size.
//!
//! Run with: `cargo bench -p pixel-bench --bench pipeline`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use pixel_bench::{generate_fixture, FixtureSize};
use pixel_core::AnalysisConfig;

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let config = AnalysisConfig::default();

    for size in [FixtureSize::Micro, FixtureSize::Small, FixtureSize::Medium] {
        let fixture = generate_fixture(size, 0xC0FFEE);
        group.throughput(Throughput::Elements(fixture.total_tokens as u64));
        group.bench_with_input(BenchmarkId::new("analyze", format!("{size:?}")), &fixture, |b, fixture| {
            b.iter(|| {
                for tokens in &fixture.streams {
                    pixel_analysis::analyze(tokens, &config).unwrap();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
