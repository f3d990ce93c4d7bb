use epiflow_core::Trajectory;

use crate::SirParams;

/// The largest value of one component and when it occurs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Peak {
    pub time: f64,
    pub value: f64,
}

/// Returns the first sample where `component` reaches its maximum.
///
/// Returns `None` for an empty trajectory or an out-of-range component.
#[must_use]
pub fn peak(trajectory: &Trajectory, component: usize) -> Option<Peak> {
    if component >= trajectory.dimension() {
        return None;
    }

    trajectory
        .iter()
        .map(|(time, state)| Peak {
            time,
            value: state[component],
        })
        .reduce(|best, next| if next.value > best.value { next } else { best })
}

/// Returns the last value of `component`.
#[must_use]
pub fn final_value(trajectory: &Trajectory, component: usize) -> Option<f64> {
    trajectory
        .last()
        .and_then(|(_, state)| state.get(component).copied())
}

/// Returns the fraction not represented in `state`, `1 - sum(state)`.
///
/// For [`Sir`](crate::Sir) this is the recovered fraction; for the rumor
/// models it is the stifler fraction.
#[must_use]
pub fn implied_remainder(state: &[f64]) -> f64 {
    1.0 - state.iter().sum::<f64>()
}

/// Headline numbers of one SIR run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SirSummary {
    pub beta: f64,
    pub gamma: f64,
    pub r0: f64,
    pub peak_infected: f64,
    pub peak_time: f64,
}

impl SirSummary {
    /// Summarizes a trajectory of [`Sir`](crate::Sir) or
    /// [`SirFull`](crate::SirFull), where component 1 is the infected fraction.
    ///
    /// Returns `None` if the trajectory is empty or has no infected component.
    #[must_use]
    pub fn from_trajectory(params: &SirParams, trajectory: &Trajectory) -> Option<Self> {
        let Peak { time, value } = peak(trajectory, 1)?;

        Some(Self {
            beta: params.beta(),
            gamma: params.gamma(),
            r0: params.basic_reproduction_number(),
            peak_infected: value,
            peak_time: time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use epiflow_core::TrajectoryBuilder;

    fn trajectory() -> Trajectory {
        let mut builder = TrajectoryBuilder::new(2);
        for (t, state) in [
            (0.0, [0.99, 0.01]),
            (1.0, [0.80, 0.15]),
            (2.0, [0.50, 0.30]),
            (3.0, [0.40, 0.30]),
            (4.0, [0.35, 0.20]),
        ] {
            builder.push(t, &state).unwrap();
        }
        builder.finish()
    }

    #[test]
    fn peak_takes_first_maximum() {
        let found = peak(&trajectory(), 1).unwrap();

        assert_eq!(found, Peak { time: 2.0, value: 0.30 });
    }

    #[test]
    fn peak_of_missing_component_or_empty_trajectory() {
        assert_eq!(peak(&trajectory(), 2), None);
        assert_eq!(peak(&TrajectoryBuilder::new(2).finish(), 0), None);
    }

    #[test]
    fn final_value_reads_last_sample() {
        assert_eq!(final_value(&trajectory(), 0), Some(0.35));
        assert_eq!(final_value(&trajectory(), 5), None);
    }

    #[test]
    fn remainder_closes_the_population() {
        assert_relative_eq!(implied_remainder(&[0.35, 0.20]), 0.45, epsilon = 1e-15);
    }

    #[test]
    fn sir_summary_row() {
        let params = SirParams::new(0.5, 0.1).unwrap();

        let summary = SirSummary::from_trajectory(&params, &trajectory()).unwrap();

        assert_relative_eq!(summary.r0, 5.0);
        assert_eq!(summary.peak_infected, 0.30);
        assert_eq!(summary.peak_time, 2.0);
    }
}
