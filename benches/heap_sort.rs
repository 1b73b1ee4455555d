use criterion::{black_box, criterion_group, criterion_main, Criterion};
use maxheap::Heap;
use rand::prelude::*;

fn random_data(len: usize) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let data = random_data(10_000);

    c.bench_function("max_heapify_all", |b| {
        b.iter(|| {
            let mut heap = Heap::new(data.clone());
            heap.max_heapify_all();
            black_box(heap);
        })
    });
    c.bench_function("sort", |b| {
        b.iter(|| {
            let mut heap = Heap::new(data.clone());
            heap.sort();
            black_box(heap);
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
