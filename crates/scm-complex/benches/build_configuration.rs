use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scm_complex::{check, random_configuration, SequencePair};
use scm_core::rng::RngHandle;

fn build_configuration_bench(c: &mut Criterion) {
    let pair = SequencePair::new(vec![3; 200], vec![6; 100]).unwrap();

    c.bench_function("stub_matching_600", |b| {
        b.iter(|| {
            let mut rng = RngHandle::from_seed(42);
            let config = random_configuration(&pair, &mut rng);
            black_box(config);
        });
    });

    c.bench_function("validity_check_600", |b| {
        let mut rng = RngHandle::from_seed(42);
        let config = random_configuration(&pair, &mut rng);
        b.iter(|| {
            black_box(check(&config));
        });
    });
}

criterion_group!(benches, build_configuration_bench);
criterion_main!(benches);
