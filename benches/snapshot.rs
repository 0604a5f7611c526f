extern crate multistack;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use multistack::MultiStack;
use std::hint::black_box;

fn populated() -> MultiStack<u64> {
    let mut stacks = MultiStack::new(16, 4096);
    for region in 0..16 {
        for value in 0..2048u64 {
            stacks.push(region, value * region as u64).unwrap();
        }
    }
    stacks
}

/// Benchmark snapshot encoding and decoding of a 64K slot structure
fn bench_snapshot(c: &mut Criterion) {
    let stacks = populated();
    let bytes = stacks.to_bytes();

    println!(
        "Benchmarking snapshot: {} bytes ({:.2} KB)",
        bytes.len(),
        bytes.len() as f64 / 1024.0
    );

    let mut group = c.benchmark_group("snapshot");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("to_bytes", |b| {
        b.iter(|| black_box(black_box(&stacks).to_bytes()));
    });
    group.bench_function("from_bytes", |b| {
        b.iter(|| {
            let restored = MultiStack::<u64>::from_bytes(black_box(&bytes)).unwrap();
            black_box(restored)
        });
    });
    group.finish();

    let text = {
        let mut out = Vec::new();
        stacks.write_text(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    };

    let mut group = c.benchmark_group("text");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("parse_text", |b| {
        b.iter(|| {
            let parsed = MultiStack::<u64>::parse_text(black_box(&text)).unwrap();
            black_box(parsed)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_snapshot);
criterion_main!(benches);
