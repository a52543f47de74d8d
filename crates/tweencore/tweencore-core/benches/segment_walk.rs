use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use tweencore_core::{ScalarChange, WeightedTimeline};

fn mk_timeline(entries: usize) -> WeightedTimeline<usize> {
    let mut timeline = WeightedTimeline::with_capacity(entries);
    for i in 0..entries {
        // uneven weights so boundaries are not evenly spaced
        let weight = 1.0 + (i % 7) as f32 * 0.25;
        timeline.add(i, weight).expect("positive weight");
    }
    timeline
}

fn bench_repeating(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_repeating");
    for &cycles in &[1u32, 16, 256] {
        group.throughput(Throughput::Elements(cycles as u64));
        group.bench_with_input(BenchmarkId::from_parameter(cycles), &cycles, |b, &cycles| {
            let change = ScalarChange::new(0.1, cycles as f32 - 0.1);
            b.iter(|| {
                let mut acc = 0.0f32;
                change
                    .segment_repeating(0.0, 1.0, cycles, |part| acc += part.current)
                    .expect("non-degenerate cycle");
                black_box(acc)
            });
        });
    }
    group.finish();
}

fn bench_timeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_timeline");
    for &entries in &[4usize, 64, 1024] {
        let timeline = mk_timeline(entries);
        group.throughput(Throughput::Elements(entries as u64));
        group.bench_with_input(BenchmarkId::new("full_tick", entries), &timeline, |b, tl| {
            let change = ScalarChange::new(0.0, 1.0);
            b.iter(|| {
                let mut acc = 0usize;
                change
                    .segment_timeline(0.0, 1.0, tl, |item, _| acc += *item)
                    .expect("valid timeline call");
                black_box(acc)
            });
        });
        group.bench_with_input(BenchmarkId::new("small_tick", entries), &timeline, |b, tl| {
            let change = ScalarChange::new(0.5, 0.5 + 1.0 / 60.0);
            b.iter(|| {
                let mut acc = 0usize;
                change
                    .segment_timeline(0.0, 1.0, tl, |item, _| acc += *item)
                    .expect("valid timeline call");
                black_box(acc)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_repeating, bench_timeline);
criterion_main!(benches);
