//! Compartmental models for epiflow.
//!
//! Each model is a [`VectorField`] over population fractions with its own
//! named parameter record:
//!
//! | Model | State | Parameters |
//! |---|---|---|
//! | [`Sir`] | `[S, I]` | [`SirParams`] |
//! | [`SirFull`] | `[S, I, R]` | [`SirParams`] |
//! | [`GeneralRumor`] | `[X, Y]` | [`RumorParams`] |
//! | [`MakiThompson`] | `[X, Y]` | [`MakiThompsonParams`] |
//!
//! Two-component models leave the last compartment implicit; recover it with
//! [`implied_remainder`].
//!
//! [`VectorField`]: epiflow_core::VectorField

mod error;
mod rumor;
mod sir;
mod summary;

pub use error::ParamsError;
pub use rumor::{GeneralRumor, MakiThompson, MakiThompsonParams, RumorParams};
pub use sir::{Sir, SirFull, SirParams};
pub use summary::{Peak, SirSummary, final_value, implied_remainder, peak};
