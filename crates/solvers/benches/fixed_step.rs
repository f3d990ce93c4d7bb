//! Benchmarks for the fixed-step methods and the adaptive reference.
//!
//! Every benchmark integrates the SIR outbreak (`beta = 0.5`, `gamma = 0.1`,
//! `S0 = 0.99`, `I0 = 0.01`) over `t` in `[0, 60]`.
//!
//! Cost per step is dominated by field evaluations, so at equal `dt` the
//! expected ratio Euler : Improved Euler : RK4 is about 1 : 2 : 4.
//!
//! ```bash
//! cargo bench -p epiflow-solvers --bench fixed_step
//! cargo bench -p epiflow-solvers --bench fixed_step -- rk4
//! ```

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use epiflow_core::{OdeProblem, TimeSpan, numeric::linspace};
use epiflow_models::{Sir, SirParams};
use epiflow_solvers::{
    adaptive,
    fixed_step::{self, Method},
};

fn outbreak() -> (OdeProblem<Sir>, TimeSpan) {
    let params = SirParams::new(0.5, 0.1).unwrap();
    let problem = OdeProblem::new(Sir, params, [0.99, 0.01]).unwrap();
    let span = TimeSpan::new(0.0, 60.0).unwrap();
    (problem, span)
}

/// Each method at several step sizes.
///
/// Time should scale with `1 / dt` within a method.
fn bench_fixed_step(c: &mut Criterion) {
    let (problem, span) = outbreak();
    let mut group = c.benchmark_group("fixed_step");

    for method in Method::ALL {
        for dt in [0.1, 0.01, 0.001] {
            group.bench_with_input(BenchmarkId::new(method.name(), dt), &dt, |b, &dt| {
                b.iter(|| {
                    fixed_step::solve_unobserved(black_box(&problem), span, black_box(dt), method)
                        .unwrap()
                });
            });
        }
    }

    group.finish();
}

/// The reference solve the comparator runs once per comparison.
fn bench_adaptive(c: &mut Criterion) {
    let (problem, span) = outbreak();
    let t_eval = linspace(0.0, 60.0, 1001);
    let config = adaptive::Config::default();

    c.bench_function("adaptive/sir_1001_points", |b| {
        b.iter(|| adaptive::solve(black_box(&problem), span, black_box(&t_eval), &config).unwrap());
    });
}

criterion_group!(benches, bench_fixed_step, bench_adaptive);
criterion_main!(benches);
