//! Shared scenarios for the workspace integration tests.

pub mod scenarios;
