use bignum::curve::constants::P_256;
use bignum::montgomery::{montifier, montmul, montsqr};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_montmul_256(c: &mut Criterion) {
    let mut r2 = [0u64; 4];
    montifier(&mut r2, &P_256);
    let x = [7u64, 0, 0, 0];
    let mut t = [0u64; 8];
    let mut xm = [0u64; 4];
    montmul(&mut xm, &x, &r2, &P_256, &mut t);

    c.bench_function("montmul 4-limb", |b| {
        b.iter(|| {
            let mut z = [0u64; 4];
            montmul(&mut z, black_box(&xm), black_box(&xm), &P_256, &mut t);
            z
        })
    });
}

pub fn bench_montsqr_256(c: &mut Criterion) {
    let mut r2 = [0u64; 4];
    montifier(&mut r2, &P_256);
    let x = [7u64, 0, 0, 0];
    let mut t = [0u64; 8];
    let mut xm = [0u64; 4];
    montmul(&mut xm, &x, &r2, &P_256, &mut t);

    c.bench_function("montsqr 4-limb", |b| {
        b.iter(|| {
            let mut z = [0u64; 4];
            montsqr(&mut z, black_box(&xm), &P_256, &mut t);
            z
        })
    });
}

pub fn bench_montifier_256(c: &mut Criterion) {
    c.bench_function("montifier 4-limb", |b| {
        b.iter(|| {
            let mut z = [0u64; 4];
            montifier(&mut z, black_box(&P_256));
            z
        })
    });
}

criterion_group!(
    benches,
    bench_montmul_256,
    bench_montsqr_256,
    bench_montifier_256
);
criterion_main!(benches);
