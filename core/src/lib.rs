//! frauddemo-core — decision logic for the fraud analysis demo.
//!
//! One component makes a decision: the scenario sampler, which draws a
//! synthetic fraud probability from a scenario-selected interval. The
//! classifier thresholds that probability into a risk tier, and
//! everything else validates inputs or formats the result for display.

pub mod analysis;
pub mod classifier;
pub mod config;
pub mod error;
pub mod report;
pub mod rng;
pub mod sampler;
pub mod transaction;
pub mod types;
