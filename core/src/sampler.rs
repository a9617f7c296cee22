//! Scenario sampler — the one piece of decision logic in the demo.
//!
//! RULE: the sampler is a pure function of (input, intervals, rng).
//! No global state, no clock, no platform RNG. The scenario selects
//! the interval; the Random scenario branches once more on the amount.

use crate::{
    config::SamplingIntervals,
    error::{DemoError, DemoResult},
    rng::DrawRng,
    transaction::{Scenario, TransactionInput},
    types::Probability,
};
use serde::{Deserialize, Serialize};

/// A closed sub-interval of [0, 1] to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Default for Interval {
    fn default() -> Self {
        Self { lo: 0.0, hi: 1.0 }
    }
}

impl Interval {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, p: Probability) -> bool {
        self.lo <= p && p <= self.hi
    }
}

/// Pick the interval a given (scenario, amount) pair draws from.
pub fn select_interval(
    scenario: Scenario,
    amount: f64,
    intervals: &SamplingIntervals,
) -> Interval {
    match scenario {
        Scenario::HighRisk => intervals.high_risk,
        Scenario::LowRisk => intervals.low_risk,
        // Strictly greater than the pivot. An amount exactly at the
        // pivot takes the low-amount branch.
        Scenario::Random if amount > intervals.amount_pivot => intervals.random_high_amount,
        Scenario::Random => intervals.random_low_amount,
    }
}

/// Draw a synthetic fraud probability for one transaction.
///
/// Inputs normally arrive pre-clamped by the form's range controls;
/// negative or non-finite amounts are still rejected here so the
/// sampler holds its own contract when called directly.
pub fn sample(
    input: &TransactionInput,
    intervals: &SamplingIntervals,
    rng: &mut DrawRng,
) -> DemoResult<Probability> {
    if !input.amount.is_finite() || input.amount < 0.0 {
        return Err(DemoError::AmountOutOfRange {
            amount: input.amount,
            max: f64::INFINITY,
        });
    }

    let interval = select_interval(input.scenario, input.amount, intervals);
    let p = rng.uniform(interval.lo, interval.hi);

    log::debug!(
        "sample: scenario={} amount={:.2} interval=[{:.2}, {:.2}] p={:.4}",
        input.scenario.label(),
        input.amount,
        interval.lo,
        interval.hi,
        p
    );

    debug_assert!((0.0..=1.0).contains(&p), "sampled probability left [0, 1]");
    Ok(p)
}
