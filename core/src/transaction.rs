//! Transaction inputs — the only data the analyzer accepts.
//!
//! Inputs mirror the demo's form controls. They are created fresh on
//! each request, validated against the configured domains, and never
//! persisted.

use crate::{
    config::InputDomain,
    error::{DemoError, DemoResult},
};
use serde::{Deserialize, Serialize};

/// The risk scenario selected by the user. A scenario is a hint that
/// narrows the interval the fraud probability is drawn from; it is not
/// derived from the transaction itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    Random,
    LowRisk,
    HighRisk,
}

impl Scenario {
    /// Parse a scenario from either the UI label ("Low Risk") or the
    /// snake_case wire tag ("low_risk").
    pub fn parse(label: &str) -> DemoResult<Self> {
        match label.trim() {
            "Random" | "random" => Ok(Self::Random),
            "Low Risk" | "low_risk" => Ok(Self::LowRisk),
            "High Risk" | "high_risk" => Ok(Self::HighRisk),
            other => Err(DemoError::UnknownScenario {
                label: other.to_string(),
            }),
        }
    }

    /// The label shown in the UI and in rendered reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Random => "Random",
            Self::LowRisk => "Low Risk",
            Self::HighRisk => "High Risk",
        }
    }
}

/// One simulated transaction, as entered in the form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TransactionInput {
    /// Transaction amount in dollars.
    pub amount: f64,
    /// Seconds elapsed since the start of the dataset window.
    pub time_seconds: i64,
    pub scenario: Scenario,
}

impl TransactionInput {
    /// Build a validated input. Rejects anything outside the domains
    /// the UI's own range controls enforce.
    pub fn new(
        amount: f64,
        time_seconds: i64,
        scenario: Scenario,
        domain: &InputDomain,
    ) -> DemoResult<Self> {
        let input = Self {
            amount,
            time_seconds,
            scenario,
        };
        input.validate(domain)?;
        Ok(input)
    }

    /// The form's pre-filled values.
    pub fn defaults(domain: &InputDomain) -> Self {
        Self {
            amount: domain.default_amount,
            time_seconds: domain.default_time_seconds,
            scenario: Scenario::Random,
        }
    }

    pub fn validate(&self, domain: &InputDomain) -> DemoResult<()> {
        if !self.amount.is_finite() || self.amount < 0.0 || self.amount > domain.max_amount {
            return Err(DemoError::AmountOutOfRange {
                amount: self.amount,
                max: domain.max_amount,
            });
        }
        if self.time_seconds < 0 || self.time_seconds > domain.max_time_seconds {
            return Err(DemoError::TimeOutOfRange {
                time: self.time_seconds,
                max: domain.max_time_seconds,
            });
        }
        Ok(())
    }
}
