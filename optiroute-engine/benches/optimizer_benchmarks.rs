//! Criterion benchmarks for the route optimizer.
//!
//! Measures optimize time per algorithm across delivery-set sizes to track
//! performance and detect regressions.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package optiroute-engine
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use optiroute_core::{Algorithm, RouteConfig, RoutePlanner};
use optiroute_engine::RouteOptimizer;


use bench_support::{BENCHMARK_SEED, generate_instance};

/// Problem sizes to benchmark: 10, 25, 50 deliveries.
const PROBLEM_SIZES: &[usize] = &[10, 25, 50];

fn bench_optimize_times(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize_time");

    for &size in PROBLEM_SIZES {
        let (locations, deliveries) = generate_instance(size, BENCHMARK_SEED);
        let optimizer = RouteOptimizer::new();

        for algorithm in Algorithm::ALL {
            let config = RouteConfig {
                source_location: "W0".into(),
                vehicle_capacity: 400.0,
                algorithm,
            };

            #[expect(
                clippy::as_conversions,
                reason = "safe conversion for small problem sizes"
            )]
            let throughput_size = size as u64;
            group.throughput(Throughput::Elements(throughput_size));
            group.bench_with_input(
                BenchmarkId::new(algorithm.as_str(), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        #[expect(
                            clippy::let_underscore_must_use,
                            reason = "benchmarking optimize latency, result is discarded"
                        )]
                        let _ = optimizer.optimize(&config, &locations, &deliveries);
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_optimize_times);
criterion_main!(benches);
