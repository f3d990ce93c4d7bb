use approx::assert_relative_eq;
use epiflow_core::numeric::linspace;
use epiflow_models::implied_remainder;
use epiflow_solvers::{
    adaptive,
    fixed_step::{self, Method},
};
use integration_tests::scenarios::{outbreak_span, sir, sir_full};

#[test]
fn full_sir_conserves_population_for_every_method() {
    let problem = sir_full();

    for method in Method::ALL {
        for dt in [0.5, 0.1, 0.01] {
            let solution =
                fixed_step::solve_unobserved(&problem, outbreak_span(), dt, method).unwrap();

            for (t, state) in solution.trajectory.iter() {
                let total: f64 = state.iter().sum();
                assert!(
                    (total - 1.0).abs() < 1e-10,
                    "{method} at dt = {dt}, t = {t}: S + I + R = {total}"
                );
            }
        }
    }
}

#[test]
fn adaptive_reference_conserves_population() {
    let t_eval = linspace(0.0, 60.0, 1001);

    let solution =
        adaptive::solve(&sir_full(), outbreak_span(), &t_eval, &adaptive::Config::default())
            .unwrap();

    for (_, state) in solution.trajectory.iter() {
        assert_relative_eq!(state.iter().sum::<f64>(), 1.0, epsilon = 1e-10);
    }
}

#[test]
fn implied_recovered_matches_explicit_compartment() {
    for method in Method::ALL {
        let reduced = fixed_step::solve_unobserved(&sir(), outbreak_span(), 0.1, method).unwrap();
        let full = fixed_step::solve_unobserved(&sir_full(), outbreak_span(), 0.1, method).unwrap();

        for (two, three) in reduced.trajectory.states().zip(full.trajectory.states()) {
            assert_eq!(two, &three[..2]);
            assert_relative_eq!(implied_remainder(two), three[2], epsilon = 1e-10);
        }
    }
}
