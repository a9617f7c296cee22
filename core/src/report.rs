//! Report rendering — pure formatting of an AnalysisResult.
//!
//! Nothing here makes a decision. Formatting is a derived view of the
//! result, plus the demo's static copy (model performance figures,
//! business-impact numbers). The copy is hard-coded data; it does not
//! come from any model.

use crate::analysis::AnalysisResult;
use std::fmt::Write;

// ── Static demo copy ─────────────────────────────────────────────────────────

pub const MODEL_ALGORITHM: &str = "Random Forest + SMOTE";
pub const MODEL_TRAINING_SAMPLES: &str = "284,807 transactions";
pub const MODEL_ROC_AUC: &str = "97.4%";
pub const MODEL_RECALL: &str = "85%";
pub const MODEL_PRECISION: &str = "91%";
pub const MODEL_F1: &str = "88%";

pub const IMPACT_MONTHLY_TXNS: &str = "1M+";
pub const IMPACT_DETECTION_RATE: &str = "85%";
pub const IMPACT_ANNUAL_SAVINGS: &str = "$2.1M";

// ── Primitive formatters ─────────────────────────────────────────────────────

/// Thousands-separated integer: 50000 -> "50,000".
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if n < 0 {
        format!("-{out}")
    } else {
        out
    }
}

/// Currency with cents: 1234.5 -> "$1,234.50".
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as i64;
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${}.{:02}", format_thousands(cents / 100), cents % 100)
}

/// A [0, 1] value as a percentage with one decimal: 0.123 -> "12.3%".
pub fn format_percent(p: f64) -> String {
    format!("{:.1}%", p * 100.0)
}

// ── Report blocks ────────────────────────────────────────────────────────────

/// The full plain-text report for one analysis.
pub fn render_report(result: &AnalysisResult) -> String {
    let mut out = String::new();
    let input = &result.input;

    let _ = writeln!(out, "=== ANALYSIS RESULT ===");
    let _ = writeln!(out, "  analysis_id: {}", result.analysis_id);
    let _ = writeln!(out, "  amount:      {}", format_currency(input.amount));
    let _ = writeln!(out, "  time:        {}s", format_thousands(input.time_seconds));
    let _ = writeln!(out, "  fraud prob:  {}", format_percent(result.probability));
    let _ = writeln!(
        out,
        "  risk level:  {} ({})",
        result.risk_tier.label(),
        result.risk_tier.display_color()
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "=== RISK ASSESSMENT ===");
    let _ = writeln!(
        out,
        "  {} - fraud probability {}",
        result.risk_tier.headline(),
        format_percent(result.probability)
    );
    let _ = writeln!(out, "  Recommended actions:");
    for action in result.risk_tier.recommended_actions() {
        let _ = writeln!(out, "    - {action}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "=== ANALYSIS DETAILS ===");
    let _ = writeln!(out, "  Risk category:   {}", input.scenario.label());
    let _ = writeln!(out, "  Processing time: {} seconds", format_thousands(input.time_seconds));
    let _ = writeln!(out, "  Algorithm:       {MODEL_ALGORITHM}");
    let _ = writeln!(out, "  Trained on:      {MODEL_TRAINING_SAMPLES}");
    let _ = writeln!(out, "  Confidence:      {}", format_percent(result.confidence));

    out
}

/// The static model-performance and business-impact card.
pub fn render_model_card() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== MODEL PERFORMANCE ===");
    let _ = writeln!(out, "  ROC-AUC:   {MODEL_ROC_AUC}");
    let _ = writeln!(out, "  Recall:    {MODEL_RECALL}");
    let _ = writeln!(out, "  Precision: {MODEL_PRECISION}");
    let _ = writeln!(out, "  F1-Score:  {MODEL_F1}");
    let _ = writeln!(out);
    let _ = writeln!(out, "=== BUSINESS IMPACT ===");
    let _ = writeln!(out, "  Monthly transactions: {IMPACT_MONTHLY_TXNS}");
    let _ = writeln!(out, "  Detection rate:       {IMPACT_DETECTION_RATE}");
    let _ = writeln!(out, "  Annual savings:       {IMPACT_ANNUAL_SAVINGS}");
    out
}
