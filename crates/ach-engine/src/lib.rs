//! Analysis of Competing Hypotheses (ACH) scoring engine.
//!
//! The `analysis` module holds the pure scoring model. `config`, `telemetry`, and `error`
//! carry the service plumbing shared with the HTTP binary.

pub mod analysis;
pub mod config;
pub mod error;
pub mod telemetry;
