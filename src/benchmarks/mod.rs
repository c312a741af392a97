//! Shared criterion settings for the benches of the algorithm crates
#[cfg(feature = "benchmarks")]
pub mod config {
    use criterion::{measurement::WallTime, BenchmarkGroup, Criterion};
    #[cfg(not(target_os = "windows"))]
    use pprof::criterion::{Output, PProfProfiler};
    use std::time::Duration;

    /// Criterion with a flamegraph profiler attached, enabled with `--profile-time`
    #[cfg(not(target_os = "windows"))]
    pub fn get_default_profiling_configs() -> Criterion {
        Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
    }

    #[cfg(target_os = "windows")]
    pub fn get_default_profiling_configs() -> Criterion {
        Criterion::default()
    }

    /// Closed-form fits are short, so fewer but longer measurements are enough
    pub fn set_default_benchmark_configs(benchmark: &mut BenchmarkGroup<WallTime>) {
        benchmark
            .sample_size(100)
            .measurement_time(Duration::new(5, 0))
            .confidence_level(0.97)
            .warm_up_time(Duration::new(3, 0))
            .noise_threshold(0.05);
    }
}
