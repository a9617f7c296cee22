//! End-to-end analysis: validate, draw, classify, assemble, render.

use frauddemo_core::{
    analysis::Analyzer,
    classifier::{classify, RiskTier},
    report,
    transaction::{Scenario, TransactionInput},
};

fn input(amount: f64, time: i64, scenario: Scenario) -> TransactionInput {
    TransactionInput {
        amount,
        time_seconds: time,
        scenario,
    }
}

/// The demo's default form entry: {150.0, 50000, Random}. The draw must
/// land in the low-amount band and the tier must match the thresholds
/// applied to that same draw.
#[test]
fn default_form_entry_end_to_end() {
    let mut analyzer = Analyzer::with_default_config(42);
    let result = analyzer
        .analyze(input(150.0, 50_000, Scenario::Random))
        .expect("valid input");

    assert!(
        (0.05..=0.45).contains(&result.probability),
        "draw {} outside the low-amount band",
        result.probability
    );
    assert!(
        matches!(result.risk_tier, RiskTier::Low | RiskTier::Moderate),
        "low-amount band can only yield Low or Moderate, got {:?}",
        result.risk_tier
    );
    assert_eq!(
        result.risk_tier,
        classify(result.probability, &analyzer.config().thresholds),
        "tier must be the pure function of the sampled probability"
    );
}

/// The probability invariant holds across seeds and across the whole
/// input domain, boundaries included.
#[test]
fn probability_always_in_unit_interval() {
    for seed in [0, 1, 42, u64::MAX] {
        let mut analyzer = Analyzer::with_default_config(seed);
        for (amount, scenario) in [
            (0.0, Scenario::Random),
            (25_000.0, Scenario::Random),
            (0.0, Scenario::HighRisk),
            (25_000.0, Scenario::LowRisk),
        ] {
            let result = analyzer
                .analyze(input(amount, 0, scenario))
                .expect("valid input");
            assert!(
                (0.0..=1.0).contains(&result.probability),
                "seed {seed} amount {amount}: probability {} left [0, 1]",
                result.probability
            );
        }
    }
}

#[test]
fn confidence_is_distance_from_coin_flip() {
    let mut analyzer = Analyzer::with_default_config(7);
    let result = analyzer
        .analyze(input(150.0, 50_000, Scenario::HighRisk))
        .expect("valid input");
    let expected = result.probability.max(1.0 - result.probability);
    assert_eq!(result.confidence, expected);
    assert!(result.confidence >= 0.5, "confidence can never dip below 0.5");
}

/// A rejected input produces no result and leaves the analyzer usable.
#[test]
fn rejected_input_produces_no_result() {
    let mut analyzer = Analyzer::with_default_config(42);
    assert!(analyzer.analyze(input(-5.0, 0, Scenario::Random)).is_err());
    analyzer
        .analyze(input(150.0, 50_000, Scenario::Random))
        .expect("analyzer still usable after a rejected request");
}

#[test]
fn analysis_ids_are_unique_per_invocation() {
    let mut analyzer = Analyzer::with_default_config(42);
    let a = analyzer.analyze(input(150.0, 0, Scenario::Random)).unwrap();
    let b = analyzer.analyze(input(150.0, 0, Scenario::Random)).unwrap();
    assert_ne!(a.analysis_id, b.analysis_id);
}

/// Results serialize to JSON for the IPC mode and round-trip the fields
/// the UI reads.
#[test]
fn result_serializes_for_ipc() {
    let mut analyzer = Analyzer::with_default_config(42);
    let result = analyzer
        .analyze(input(150.0, 50_000, Scenario::HighRisk))
        .unwrap();
    let json = serde_json::to_string(&result).expect("serialize");
    assert!(json.contains("\"scenario\":\"high_risk\""), "json: {json}");
    assert!(json.contains("\"risk_tier\":\"high\""), "json: {json}");
}

#[test]
fn rendered_report_contains_formatted_fields() {
    let mut analyzer = Analyzer::with_default_config(42);
    let result = analyzer
        .analyze(input(150.0, 50_000, Scenario::Random))
        .unwrap();
    let text = report::render_report(&result);
    assert!(text.contains("$150.00"), "report: {text}");
    assert!(text.contains("50,000s"), "report: {text}");
    assert!(text.contains(result.risk_tier.label()), "report: {text}");
    for action in result.risk_tier.recommended_actions() {
        assert!(text.contains(action), "missing action '{action}'");
    }
}
