//! Demo configuration — input domains, sampling intervals, thresholds.
//!
//! Ships with defaults matching the original demo. A JSON file with the
//! same shape can override any field; loaded configs are validated
//! before use so a bad file fails fast instead of producing
//! out-of-range probabilities.

use crate::{
    error::{DemoError, DemoResult},
    sampler::Interval,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub input_domain: InputDomain,
    pub sampling: SamplingIntervals,
    pub thresholds: TierThresholds,
    /// Artificial processing delay applied by the runner before a
    /// result is shown. Simulation only; the analysis itself is instant.
    pub processing_delay_ms: u64,
}

/// Domains and defaults for the form controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputDomain {
    pub max_amount: f64,
    pub max_time_seconds: i64,
    pub default_amount: f64,
    pub default_time_seconds: i64,
}

/// The interval each scenario branch draws from.
/// The Random scenario branches on the amount pivot: strictly above it
/// takes the high-amount interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingIntervals {
    pub high_risk: Interval,
    pub low_risk: Interval,
    pub random_high_amount: Interval,
    pub random_low_amount: Interval,
    pub amount_pivot: f64,
}

/// Tier cut points. A probability strictly above `high` is High,
/// strictly above `moderate` is Moderate, otherwise Low.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub moderate: f64,
    pub high: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            input_domain: InputDomain::default(),
            sampling: SamplingIntervals::default(),
            thresholds: TierThresholds::default(),
            processing_delay_ms: 1_000,
        }
    }
}

impl Default for InputDomain {
    fn default() -> Self {
        Self {
            max_amount: 25_000.0,
            max_time_seconds: 172_800, // two days of seconds
            default_amount: 150.0,
            default_time_seconds: 50_000,
        }
    }
}

impl Default for SamplingIntervals {
    fn default() -> Self {
        Self {
            high_risk: Interval::new(0.65, 0.95),
            low_risk: Interval::new(0.01, 0.30),
            random_high_amount: Interval::new(0.40, 0.75),
            random_low_amount: Interval::new(0.05, 0.45),
            amount_pivot: 5_000.0,
        }
    }
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            moderate: 0.4,
            high: 0.7,
        }
    }
}

impl DemoConfig {
    /// Load and validate a config override file.
    pub fn load(path: &Path) -> DemoResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: DemoConfig = serde_json::from_str(&text)?;
        config.validate()?;
        log::debug!("Config loaded from {}", path.display());
        Ok(config)
    }

    /// Reject configs that would break the probability invariant or
    /// the form's own domains.
    pub fn validate(&self) -> DemoResult<()> {
        for (name, interval) in [
            ("high_risk", &self.sampling.high_risk),
            ("low_risk", &self.sampling.low_risk),
            ("random_high_amount", &self.sampling.random_high_amount),
            ("random_low_amount", &self.sampling.random_low_amount),
        ] {
            if !(interval.lo <= interval.hi) {
                return Err(DemoError::InvalidConfig {
                    reason: format!("interval '{name}' has lo > hi"),
                });
            }
            if interval.lo < 0.0 || interval.hi > 1.0 {
                return Err(DemoError::InvalidConfig {
                    reason: format!("interval '{name}' leaves [0, 1]"),
                });
            }
        }
        if !(self.sampling.amount_pivot >= 0.0) {
            return Err(DemoError::InvalidConfig {
                reason: "amount_pivot must be non-negative".to_string(),
            });
        }
        if !(0.0 < self.thresholds.moderate
            && self.thresholds.moderate < self.thresholds.high
            && self.thresholds.high < 1.0)
        {
            return Err(DemoError::InvalidConfig {
                reason: "thresholds must satisfy 0 < moderate < high < 1".to_string(),
            });
        }
        if self.input_domain.max_amount <= 0.0 || self.input_domain.max_time_seconds <= 0 {
            return Err(DemoError::InvalidConfig {
                reason: "input domains must be positive".to_string(),
            });
        }
        if self.input_domain.default_amount > self.input_domain.max_amount
            || self.input_domain.default_time_seconds > self.input_domain.max_time_seconds
        {
            return Err(DemoError::InvalidConfig {
                reason: "defaults must lie inside the input domains".to_string(),
            });
        }
        Ok(())
    }
}
