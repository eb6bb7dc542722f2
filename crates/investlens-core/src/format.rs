//! Presentation helpers.
//!
//! Pure free functions with no state, consumed by the view layer. Kept out
//! of the wizard and client logic on purpose.

use crate::api::status::{HealthState, ModelState, VendorState};

/// Format a USD amount with thousands separators, e.g. `$1,755.00`.
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let dollars: String = grouped.chars().rev().collect();

    format!(
        "{}${}.{:02}",
        if negative { "-" } else { "" },
        dollars,
        fraction
    )
}

/// Format a percentage with an explicit sign, e.g. `+17.00%` / `-1.79%`.
pub fn format_signed_pct(value: f64) -> String {
    format!("{}{:.2}%", if value >= 0.0 { "+" } else { "" }, value)
}

/// Label a news sentiment score. Scores within +/-0.05 read as neutral.
pub fn sentiment_label(sentiment: f64) -> &'static str {
    if sentiment >= 0.05 {
        "Positive"
    } else if sentiment <= -0.05 {
        "Negative"
    } else {
        "Neutral"
    }
}

/// Display color class for a gain/loss amount.
pub fn gain_color(gain: f64) -> &'static str {
    if gain >= 0.0 {
        "success"
    } else {
        "error"
    }
}

/// Chip color for backend API health.
pub fn health_color(state: HealthState) -> &'static str {
    match state {
        HealthState::Healthy => "success",
        HealthState::Degraded => "warning",
        HealthState::Down | HealthState::Error => "error",
    }
}

/// Chip color for the ML model state.
pub fn model_color(state: ModelState) -> &'static str {
    match state {
        ModelState::Ready => "success",
        ModelState::Training => "warning",
        ModelState::Error | ModelState::Down => "error",
    }
}

/// Chip color for an external data vendor.
pub fn vendor_color(state: VendorState) -> &'static str {
    match state {
        VendorState::Operational => "success",
        VendorState::Limited => "warning",
        VendorState::Down | VendorState::Error => "error",
    }
}
