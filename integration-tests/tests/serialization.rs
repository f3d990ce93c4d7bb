use approx::assert_relative_eq;
use epiflow_core::TimeSpan;
use epiflow_models::{SirParams, SirSummary};
use epiflow_solvers::{
    adaptive,
    compare::{self, Config, MethodResult, ReferenceSampling, Selector},
    fixed_step::Method,
};
use integration_tests::scenarios::{outbreak_span, sir, sir_params};
use serde_json::json;

#[test]
fn method_results_serialize_for_external_writers() {
    let comparison = compare::compare(&sir(), outbreak_span(), 0.5, &Config::default()).unwrap();
    let rk4 = comparison.result(Method::Rk4).unwrap();

    let value = serde_json::to_value(rk4).unwrap();

    assert_eq!(value["method"], json!("Rk4"));
    assert_eq!(value["samples"], json!(121));
    assert_eq!(value["evaluations"], json!(480));
    assert!(value["elapsed"].is_object());

    let back: MethodResult = serde_json::from_value(value).unwrap();
    assert_eq!(back.method, Method::Rk4);
    assert_eq!(back.elapsed, rk4.elapsed);
    assert_relative_eq!(back.error, rk4.error, max_relative = 1e-15);
}

#[test]
fn comparison_includes_reference_trajectory() {
    let config = Config::default().with_points(11).unwrap();
    let comparison = compare::compare(&sir(), outbreak_span(), 0.5, &config).unwrap();

    let value = serde_json::to_value(&comparison).unwrap();

    assert_eq!(value["dt"], json!(0.5));
    assert_eq!(value["results"].as_array().unwrap().len(), 3);
    assert_eq!(value["reference"]["dimension"], json!(2));
    assert_eq!(value["reference"]["times"].as_array().unwrap().len(), 11);
    assert_eq!(value["reference"]["states"].as_array().unwrap().len(), 22);
}

#[test]
fn config_round_trips() {
    let config = Config::default()
        .with_selector(Selector::Norm)
        .with_sampling(ReferenceSampling::Dense);

    let text = serde_json::to_string(&config).unwrap();
    let back: Config = serde_json::from_str(&text).unwrap();

    assert_eq!(back, config);
}

#[test]
fn sir_summary_row_has_named_fields() {
    let comparison = compare::compare(&sir(), outbreak_span(), 0.5, &Config::default()).unwrap();
    let summary = SirSummary::from_trajectory(&sir_params(), &comparison.reference).unwrap();

    let value = serde_json::to_value(summary).unwrap();

    for field in ["beta", "gamma", "r0", "peak_infected", "peak_time"] {
        assert!(value[field].is_number(), "{field}");
    }
}

#[test]
fn invalid_inputs_fail_to_deserialize() {
    let inverted = serde_json::from_str::<TimeSpan>(r#"{"start":10.0,"end":0.0}"#);
    assert!(inverted.is_err(), "{inverted:?}");

    let tolerance = r#"{"abs_tol":-1.0,"rel_tol":1e-8,"max_steps":100}"#;
    assert!(serde_json::from_str::<adaptive::Config>(tolerance).is_err());

    let params = serde_json::from_str::<SirParams>(r#"{"beta":-0.5,"gamma":0.1}"#);
    assert!(params.is_err(), "{params:?}");
}

#[test]
fn deserialized_span_drives_a_comparison() {
    let span: TimeSpan = serde_json::from_str(r#"{"start":0.0,"end":60.0}"#).unwrap();

    let comparison = compare::compare(&sir(), span, 0.5, &Config::default()).unwrap();

    assert_eq!(span, outbreak_span());
    assert_eq!(comparison.result(Method::Euler).unwrap().samples, 121);
}
