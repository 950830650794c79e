use chacharand::rng::ChaChaRand;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn seeded() -> ChaChaRand {
    ChaChaRand::from_seed(&"00".repeat(40)).unwrap()
}

pub fn bench_get_bytes(c: &mut Criterion) {
    let mut rng = seeded();
    c.bench_function("get_bytes 64", |b| {
        b.iter(|| rng.get_bytes(black_box(64)).unwrap())
    });
}

pub fn bench_float(c: &mut Criterion) {
    let mut rng = seeded();
    c.bench_function("get_random_float", |b| {
        b.iter(|| rng.get_random_float().unwrap())
    });
}

pub fn bench_shuffle(c: &mut Criterion) {
    let mut rng = seeded();
    let mut seq: Vec<u32> = (0..100).collect();
    c.bench_function("shuffle 100", |b| {
        b.iter(|| rng.shuffle(black_box(&mut seq)).unwrap())
    });
}

criterion_group!(benches, bench_get_bytes, bench_float, bench_shuffle);
criterion_main!(benches);
