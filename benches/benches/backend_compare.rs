//! Backend comparison benchmark.
//!
//! Compares the dispatcher's active chunk-compression backend against the
//! portable scalar kernel at the same input sizes, to quantify the
//! throughput gained (or not) from 4-chunk-group batching.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use blake3::kernels::portable;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

fn bench_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("blake3-backends");

    // Scenarios:
    // - Small (7B): dispatch overhead vs short-path.
    // - One chunk (1KB): single leaf compression.
    // - One chunk group (4KB): the batching threshold `Hasher::update` looks for.
    // - Bulk (256KB): many chunk groups.
    let sizes = [7, 1024, 4096, 256 * 1024];

    for size in sizes {
        let input = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(format!("Active ({}) - {size} bytes", blake3::active_backend()), |b| {
            b.iter(|| blake3::hash(black_box(&input)));
        });

        group.bench_function(format!("Portable (forced) - {size} bytes"), |b| {
            b.iter(|| {
                let key = [0u32; 8];
                let mut counter = 0u64;
                let mut cv = None;
                for chunk in input.chunks(1024) {
                    let this_cv = portable::chunk_cv(black_box(chunk), &key, counter, 0);
                    cv = Some(match cv {
                        None => this_cv,
                        Some(left) => portable::parent_cv(&left, &this_cv, &key, 0),
                    });
                    counter += 1;
                }
                cv
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_backends);
criterion_main!(benches);
