use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linreg::benchmarks::config;
use linreg::traits::{Fit, Predict};
use linreg_datasets::generate::linear;
use linreg_ols::LinearRegression;
use ndarray::Array1;
use ndarray_rand::rand_distr::{Normal, Uniform};
use rand::{rngs::SmallRng, SeedableRng};

fn bench(c: &mut Criterion) {
    let mut benchmark = c.benchmark_group("ols");
    config::set_default_benchmark_configs(&mut benchmark);
    let mut rng = SmallRng::seed_from_u64(42);
    let params = LinearRegression::params();

    for nfeatures in [1, 5, 20] {
        for size in [1_000, 10_000, 100_000] {
            let weights = Array1::linspace(-1., 1., nfeatures);
            let dataset = linear(
                size,
                &weights,
                0.5,
                Uniform::new(-5., 5.),
                Normal::new(0., 1.).unwrap(),
                &mut rng,
            );

            benchmark.bench_function(
                BenchmarkId::new("fit", format!("{nfeatures}x{size}")),
                |bencher| {
                    bencher.iter(|| params.fit(black_box(&dataset)).unwrap());
                },
            );

            let model = params.fit(&dataset).unwrap();
            benchmark.bench_function(
                BenchmarkId::new("predict", format!("{nfeatures}x{size}")),
                |bencher| {
                    bencher.iter(|| model.predict(black_box(dataset.records())).unwrap());
                },
            );
        }
    }
    benchmark.finish();
}

#[cfg(not(target_os = "windows"))]
criterion_group! {
    name = benches;
    config = config::get_default_profiling_configs();
    targets = bench
}
#[cfg(target_os = "windows")]
criterion_group!(benches, bench);

criterion_main!(benches);
