use catmate_core::Cat;
use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_breeding(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("generate_random", |b| {
        b.iter(|| Cat::generate_random_with(&mut rng))
    });

    let sire = Cat::new("SAEGRHYOMCCREPUGDNDDIICTSJZQRYVQ").unwrap();
    let dam = Cat::new("THWOMALWUJSLATWQMBCFTPOYHVDRESWL").unwrap();
    c.bench_function("mate", |b| {
        b.iter(|| sire.mate(&dam))
    });

    c.bench_function("parse_dna", |b| {
        b.iter(|| Cat::new("STAHEWGORMHAYLOWMUCJCSRLEAPTUWGQ"))
    });
}

criterion_group!(benches, bench_breeding);
criterion_main!(benches);
