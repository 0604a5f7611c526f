extern crate multistack;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use multistack::MultiStack;
use std::hint::black_box;

/// Builds `regions` regions of `size` slots where every region except the last is full
fn crowded(regions: usize, size: usize) -> MultiStack<u64> {
    let mut stacks = MultiStack::new(regions, size);
    for region in 0..regions - 1 {
        for value in 0..size as u64 {
            stacks.push(region, value).unwrap();
        }
    }
    stacks
}

/// Benchmark a push into region 0 whose only donor is the last region
///
/// Every slot between the two regions moves once, so the cost grows with the number of
/// occupied slots in between.
fn bench_distant_repack(c: &mut Criterion) {
    let mut group = c.benchmark_group("repack_distant_donor");

    for regions in [4usize, 16, 64] {
        let size = 256;
        let template = crowded(regions, size);
        group.throughput(Throughput::Elements(((regions - 1) * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(regions), &template, |b, template| {
            b.iter_batched_ref(
                || template.clone(),
                |stacks| stacks.push(0, black_box(7)).unwrap(),
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

/// Benchmark pushes and pops that never leave their own region
fn bench_local_push_pop(c: &mut Criterion) {
    let mut stacks: MultiStack<u64> = MultiStack::new(8, 1024);

    c.bench_function("push_pop_local", |b| {
        b.iter(|| {
            for value in 0..512u64 {
                stacks.push(3, black_box(value)).unwrap();
            }
            for _ in 0..512 {
                black_box(stacks.pop(3).unwrap());
            }
        });
    });
}

criterion_group!(benches, bench_distant_repack, bench_local_push_pop);
criterion_main!(benches);
