//! Sampler bound checks: every scenario branch must stay inside its
//! configured interval, over many draws and many streams.

use frauddemo_core::{
    config::SamplingIntervals,
    rng::DrawRng,
    sampler::{sample, select_interval},
    transaction::{Scenario, TransactionInput},
};

const DRAWS: u64 = 2_000;

fn input(amount: f64, scenario: Scenario) -> TransactionInput {
    TransactionInput {
        amount,
        time_seconds: 50_000,
        scenario,
    }
}

fn assert_draws_within(amount: f64, scenario: Scenario, lo: f64, hi: f64) {
    let intervals = SamplingIntervals::default();
    let input = input(amount, scenario);
    for sequence in 0..DRAWS {
        let mut rng = DrawRng::new(0xFACE, sequence);
        let p = sample(&input, &intervals, &mut rng).expect("valid input");
        assert!(
            (0.0..=1.0).contains(&p),
            "probability {p} left [0, 1]"
        );
        assert!(
            lo <= p && p <= hi,
            "{scenario:?} amount={amount}: draw {p} outside [{lo}, {hi}]"
        );
    }
}

#[test]
fn high_risk_draws_stay_in_band() {
    assert_draws_within(150.0, Scenario::HighRisk, 0.65, 0.95);
}

#[test]
fn low_risk_draws_stay_in_band() {
    assert_draws_within(150.0, Scenario::LowRisk, 0.01, 0.30);
}

#[test]
fn random_low_amount_draws_stay_in_band() {
    assert_draws_within(150.0, Scenario::Random, 0.05, 0.45);
}

#[test]
fn random_high_amount_draws_stay_in_band() {
    assert_draws_within(12_000.0, Scenario::Random, 0.40, 0.75);
}

/// The amount pivot is strictly greater-than: exactly 5000.00 takes the
/// low-amount branch, 5000.01 the high-amount branch.
#[test]
fn amount_pivot_tie_break_is_strict() {
    assert_draws_within(5_000.00, Scenario::Random, 0.05, 0.45);
    assert_draws_within(5_000.01, Scenario::Random, 0.40, 0.75);
}

/// Boundary amounts of the form domain still produce valid draws.
#[test]
fn domain_boundary_amounts_sample_cleanly() {
    assert_draws_within(0.0, Scenario::Random, 0.05, 0.45);
    assert_draws_within(25_000.0, Scenario::Random, 0.40, 0.75);
    assert_draws_within(0.0, Scenario::HighRisk, 0.65, 0.95);
    assert_draws_within(25_000.0, Scenario::LowRisk, 0.01, 0.30);
}

/// The sampler holds its own contract when called directly with a
/// negative amount, even though input validation runs first upstream.
#[test]
fn negative_amount_rejected_by_sampler() {
    let intervals = SamplingIntervals::default();
    let bad = input(-1.0, Scenario::Random);
    let mut rng = DrawRng::new(1, 0);
    let err = sample(&bad, &intervals, &mut rng).unwrap_err();
    assert!(err.is_validation(), "expected validation error, got {err}");
}

/// Interval selection never depends on anything but scenario and amount.
#[test]
fn interval_selection_ignores_time() {
    let intervals = SamplingIntervals::default();
    let a = select_interval(Scenario::Random, 100.0, &intervals);
    let b = select_interval(Scenario::Random, 100.0, &intervals);
    assert_eq!(a, b, "selection must be deterministic");
    assert_eq!(a, intervals.random_low_amount);
}
