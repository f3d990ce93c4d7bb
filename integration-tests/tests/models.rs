use approx::assert_relative_eq;
use epiflow_core::{OdeProblem, TimeSpan, numeric::linspace};
use epiflow_models::{
    GeneralRumor, MakiThompson, MakiThompsonParams, RumorParams, SirSummary, final_value,
    implied_remainder, peak,
};
use epiflow_solvers::adaptive;
use integration_tests::scenarios::{outbreak_span, sir, sir_params};

#[test]
fn sir_peak_matches_closed_form() {
    // I_max = S0 + I0 - (gamma / beta) (1 + ln(R0 S0))
    let expected = 1.0 - 0.2 * (1.0 + (5.0_f64 * 0.99).ln());
    let t_eval = linspace(0.0, 60.0, 1001);

    let solution =
        adaptive::solve(&sir(), outbreak_span(), &t_eval, &adaptive::Config::default()).unwrap();
    let summary = SirSummary::from_trajectory(&sir_params(), &solution.trajectory).unwrap();

    assert_relative_eq!(summary.r0, 5.0);
    assert_relative_eq!(summary.peak_infected, expected, epsilon = 1e-3);
    assert!(summary.peak_time > 0.0 && summary.peak_time < 60.0);
}

#[test]
fn rumor_models_die_out_with_some_never_hearing() {
    let span = TimeSpan::new(0.0, 60.0).unwrap();
    let t_eval = linspace(0.0, 60.0, 801);
    let config = adaptive::Config::default();

    let general = OdeProblem::new(
        GeneralRumor,
        RumorParams::new(0.6, 0.1, 0.2).unwrap(),
        [0.99, 0.01],
    )
    .unwrap();
    let maki = OdeProblem::new(
        MakiThompson,
        MakiThompsonParams::new(0.6, 0.2).unwrap(),
        [0.99, 0.01],
    )
    .unwrap();

    let general = adaptive::solve(&general, span, &t_eval, &config).unwrap().trajectory;
    let maki = adaptive::solve(&maki, span, &t_eval, &config).unwrap().trajectory;

    for trajectory in [&general, &maki] {
        let spreaders = peak(trajectory, 1).unwrap();
        assert!(spreaders.time > 0.0);
        assert!(final_value(trajectory, 1).unwrap() < spreaders.value);

        let (_, last) = trajectory.last().unwrap();
        assert!(last[0] > 0.0);
        assert!(implied_remainder(last) > 0.0);
    }

    // Forgetting only removes spreaders, so more people stay ignorant.
    assert!(final_value(&general, 0).unwrap() > final_value(&maki, 0).unwrap());
}
