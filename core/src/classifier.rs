//! Risk classifier — thresholds a fraud probability into a tier.
//!
//! classify() is total and deterministic: the tier depends on nothing
//! but the probability and the configured cut points. The per-tier
//! labels, colors, and recommended actions are presentation constants.

use crate::{config::TierThresholds, types::Probability};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

/// Threshold the probability:
///   p > high            -> High
///   moderate < p <= high -> Moderate
///   p <= moderate        -> Low
pub fn classify(probability: Probability, thresholds: &TierThresholds) -> RiskTier {
    if probability > thresholds.high {
        RiskTier::High
    } else if probability > thresholds.moderate {
        RiskTier::Moderate
    } else {
        RiskTier::Low
    }
}

impl RiskTier {
    /// Short label shown in the metrics row.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MED",
            Self::High => "HIGH",
        }
    }

    /// Headline used in the risk-assessment block.
    pub fn headline(&self) -> &'static str {
        match self {
            Self::Low => "LOW RISK",
            Self::Moderate => "MODERATE RISK",
            Self::High => "HIGH RISK",
        }
    }

    pub fn display_color(&self) -> &'static str {
        match self {
            Self::Low => "green",
            Self::Moderate => "yellow",
            Self::High => "red",
        }
    }

    /// Fixed recommended-actions list per tier. Data, not logic.
    pub fn recommended_actions(&self) -> &'static [&'static str] {
        match self {
            Self::Low => &[
                "Approve transaction",
                "Continue normal processing",
                "Standard monitoring protocols",
            ],
            Self::Moderate => &[
                "Flag for manual review",
                "Request additional verification",
                "Monitor subsequent transactions",
            ],
            Self::High => &[
                "Block transaction immediately",
                "Contact cardholder for verification",
                "Review recent account activity",
            ],
        }
    }
}
