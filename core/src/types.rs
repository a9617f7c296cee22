//! Shared primitive types used across the analyzer.

/// A synthetic fraud probability. Always in [0.0, 1.0].
pub type Probability = f64;

/// A stable, unique identifier for a single analysis invocation.
pub type AnalysisId = String;
