use criterion::{criterion_group, criterion_main, Criterion};

use wordpass::{config::Config, generate::generate_password};

fn criterion_benchmark_generate_default(c: &mut Criterion) {
    let config = Config::default();

    c.bench_function("generate_password default config", |b| {
        b.iter(|| generate_password(&config).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark_generate_default);
criterion_main!(benches);
