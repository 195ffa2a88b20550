//! Priority Heap Benchmarks
//!
//! Compares `PriorityHeap` against `std::collections::BinaryHeap` on the
//! workloads a scheduler typically puts on a priority queue.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_bench
//!
//! # Only the drain workload
//! cargo bench --bench heap_bench -- 'drain/'
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_priority_heap::comparator::natural_order;
use rust_priority_heap::PriorityHeap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }
}

fn random_values(count: usize, seed: u64) -> Vec<u64> {
    let mut rng = Lcg::new(seed);
    (0..count).map(|_| rng.next()).collect()
}

const SIZES: [usize; 3] = [1 << 8, 1 << 12, 1 << 16];

fn benchmark_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in SIZES {
        let values = random_values(size, 0xfeed);

        group.bench_with_input(BenchmarkId::new("priority_heap", size), &values, |b, values| {
            b.iter(|| {
                let mut heap = PriorityHeap::new(natural_order::<u64>);
                heap.insert_all(values.iter().copied());
                black_box(heap.len())
            })
        });

        group.bench_with_input(BenchmarkId::new("std_binary_heap", size), &values, |b, values| {
            b.iter(|| {
                let mut heap = BinaryHeap::new();
                for value in values {
                    heap.push(Reverse(*value));
                }
                black_box(heap.len())
            })
        });
    }

    group.finish();
}

fn benchmark_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("drain");

    for size in SIZES {
        let values = random_values(size, 0xbeef);
        let mut prepared = PriorityHeap::new(natural_order::<u64>);
        prepared.insert_all(values.iter().copied());
        let std_prepared: BinaryHeap<Reverse<u64>> = values.iter().copied().map(Reverse).collect();

        group.bench_with_input(BenchmarkId::new("priority_heap", size), &prepared, |b, heap| {
            b.iter(|| black_box(heap.clone().extract_all()))
        });

        group.bench_with_input(
            BenchmarkId::new("std_binary_heap", size),
            &std_prepared,
            |b, heap| b.iter(|| black_box(heap.clone().into_sorted_vec())),
        );
    }

    group.finish();
}

fn benchmark_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    let values = random_values(1 << 14, 0x5eed);

    // Two inserts per extract, the shape of an event loop feeding a scheduler
    group.bench_function("priority_heap", |b| {
        b.iter(|| {
            let mut heap = PriorityHeap::new(natural_order::<u64>);
            for pair in values.chunks(2) {
                heap.insert_all(pair.iter().copied());
                black_box(heap.extract().ok());
            }
            black_box(heap.len())
        })
    });

    group.bench_function("std_binary_heap", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for pair in values.chunks(2) {
                heap.extend(pair.iter().copied().map(Reverse));
                black_box(heap.pop());
            }
            black_box(heap.len())
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_insert, benchmark_drain, benchmark_mixed);
criterion_main!(benches);
