//! Compares the fixed-step methods on the SIR outbreak over a range of step
//! sizes and prints the error, runtime and estimated order of each.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p epiflow-solvers --example compare_methods
//! ```

use std::error::Error;

use epiflow_core::{OdeProblem, TimeSpan};
use epiflow_models::{Sir, SirParams, SirSummary};
use epiflow_solvers::{
    compare::{self, Config},
    fixed_step::Method,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let params = SirParams::new(0.5, 0.1)?;
    let problem = OdeProblem::new(Sir, params, [0.99, 0.01])?;
    let span = TimeSpan::new(0.0, 60.0)?;
    let dts = [0.5, 0.2, 0.1, 0.05, 0.01];

    let comparisons = compare::sweep(&problem, span, &dts, &Config::default())?;

    if let Some(summary) = comparisons
        .first()
        .and_then(|c| SirSummary::from_trajectory(&params, &c.reference))
    {
        println!(
            "SIR: R0 = {:.2}, peak infected {:.4} at t = {:.2}\n",
            summary.r0, summary.peak_infected, summary.peak_time
        );
    }

    println!(
        "{:>6}  {:<15} {:>12} {:>12} {:>8}",
        "dt", "method", "error", "time (s)", "evals"
    );
    for comparison in &comparisons {
        for result in &comparison.results {
            println!(
                "{:>6}  {:<15} {:>12.4e} {:>12.4e} {:>8}",
                comparison.dt,
                result.name(),
                result.error,
                result.elapsed_seconds(),
                result.evaluations,
            );
        }
    }

    println!("\nobserved order (interpolated reference):");
    for pair in comparisons.windows(2) {
        let orders: Vec<String> = Method::ALL
            .into_iter()
            .map(|method| match compare::observed_order(&pair[0], &pair[1], method) {
                Some(order) => format!("{method} {order:.2}"),
                None => format!("{method} n/a"),
            })
            .collect();
        println!("  {} -> {}: {}", pair[0].dt, pair[1].dt, orders.join(", "));
    }

    Ok(())
}
