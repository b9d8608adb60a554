use bigint_mul::mul::schoolbook;
use bigint_mul::{Limb, mul, square};
use criterion::{Criterion, criterion_group, criterion_main};
use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};
use std::hint::black_box;

fn random_limbs(rng: &mut ChaCha8Rng, len: usize) -> Vec<Limb> {
    (0..len).map(|_| Limb(rng.next_u32())).collect()
}

fn bench_mul(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::from_seed([7u8; 32]);
    let mut group = c.benchmark_group("mul");

    for len in [32, 128, 512, 2048] {
        let x = random_limbs(&mut rng, len);
        let y = random_limbs(&mut rng, len);

        group.bench_function(format!("sequential/{len}"), |b| {
            b.iter(|| mul(black_box(&x), black_box(&y), 0))
        });
    }

    let x = random_limbs(&mut rng, 2048);
    let y = random_limbs(&mut rng, 2048);
    group.bench_function("parallel_depth_2/2048", |b| {
        b.iter(|| mul(black_box(&x), black_box(&y), 2))
    });

    let mut z = vec![Limb::ZERO; 4096];
    group.bench_function("schoolbook/2048", |b| {
        b.iter(|| schoolbook::mul_wide(black_box(&x), black_box(&y), black_box(&mut z)))
    });

    group.finish();
}

fn bench_square(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::from_seed([7u8; 32]);
    let mut group = c.benchmark_group("square");

    for len in [32, 512, 2048] {
        let x = random_limbs(&mut rng, len);
        group.bench_function(format!("sequential/{len}"), |b| {
            b.iter(|| square(black_box(&x), 0))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mul, bench_square);
criterion_main!(benches);
