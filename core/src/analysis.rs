//! The analyzer — runs one analysis request end to end.
//!
//! RULES:
//!   - Requests are independent: no state is shared between them
//!     beyond the master seed, so no ordering guarantees exist or are
//!     needed between concurrent requests.
//!   - Every request validates its input before anything is drawn.
//!   - A result is immutable once built; no history is kept.

use crate::{
    classifier::{classify, RiskTier},
    config::DemoConfig,
    error::DemoResult,
    rng::DrawSource,
    sampler::sample,
    transaction::TransactionInput,
    types::{AnalysisId, Probability},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The outcome of one analysis invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub analysis_id: AnalysisId,
    pub input: TransactionInput,
    pub probability: Probability,
    pub risk_tier: RiskTier,
    /// max(p, 1 - p): how far the draw sits from the coin-flip point.
    pub confidence: f64,
    pub analyzed_at: DateTime<Utc>,
}

pub struct Analyzer {
    config: DemoConfig,
    draws: DrawSource,
    next_sequence: u64,
}

impl Analyzer {
    /// Build an analyzer over a validated config.
    pub fn new(seed: u64, config: DemoConfig) -> DemoResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            draws: DrawSource::new(seed),
            next_sequence: 0,
        })
    }

    pub fn with_default_config(seed: u64) -> Self {
        Self {
            config: DemoConfig::default(),
            draws: DrawSource::new(seed),
            next_sequence: 0,
        }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.draws.master_seed()
    }

    /// Run one analysis: validate, draw, classify, assemble.
    pub fn analyze(&mut self, input: TransactionInput) -> DemoResult<AnalysisResult> {
        input.validate(&self.config.input_domain)?;

        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let mut rng = self.draws.for_request(sequence);
        let probability = sample(&input, &self.config.sampling, &mut rng)?;
        let risk_tier = classify(probability, &self.config.thresholds);

        let result = AnalysisResult {
            analysis_id: format!("analysis-{}", Uuid::new_v4()),
            input,
            probability,
            risk_tier,
            confidence: probability.max(1.0 - probability),
            analyzed_at: Utc::now(),
        };

        log::info!(
            "{}: scenario={} amount={:.2} p={:.4} tier={}",
            result.analysis_id,
            input.scenario.label(),
            input.amount,
            probability,
            risk_tier.label()
        );

        Ok(result)
    }
}
