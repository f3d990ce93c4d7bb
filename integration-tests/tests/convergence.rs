use epiflow_solvers::{
    compare::{self, Comparison, Config},
    fixed_step::Method,
};
use integration_tests::scenarios::{convergence_config, outbreak_span, sir};

fn sweep(dts: &[f64], config: &Config) -> Vec<Comparison> {
    compare::sweep(&sir(), outbreak_span(), dts, config).unwrap()
}

fn errors(comparisons: &[Comparison], method: Method) -> Vec<f64> {
    comparisons
        .iter()
        .map(|c| c.result(method).unwrap().error)
        .collect()
}

fn assert_decreasing(errors: &[f64], method: Method) {
    for pair in errors.windows(2) {
        assert!(pair[0] > pair[1], "{method}: {errors:?}");
    }
}

#[test]
fn error_decreases_with_step_size() {
    let comparisons = sweep(&[0.5, 0.1, 0.01], &convergence_config());

    for method in Method::ALL {
        assert_decreasing(&errors(&comparisons, method), method);
    }
}

#[test]
fn low_order_errors_decrease_under_default_config() {
    let comparisons = sweep(&[0.5, 0.1, 0.01], &Config::default());

    for method in [Method::Euler, Method::ImprovedEuler] {
        assert_decreasing(&errors(&comparisons, method), method);
    }
}

#[test]
fn observed_orders_match_theory() {
    let config = convergence_config();
    let cases = [
        (Method::Euler, [0.1, 0.05, 0.025]),
        (Method::ImprovedEuler, [0.1, 0.05, 0.025]),
        (Method::Rk4, [0.2, 0.1, 0.05]),
    ];

    for (method, dts) in cases {
        let comparisons = sweep(&dts, &config);

        for pair in comparisons.windows(2) {
            let order = compare::observed_order(&pair[0], &pair[1], method).unwrap();
            let expected = f64::from(method.order());

            assert!(
                (order - expected).abs() < 0.3,
                "{method} between dt = {} and {}: order {order:.3}",
                pair[0].dt,
                pair[1].dt
            );
        }
    }
}
