//! Shared dashboard context.
//!
//! The currently selected ticker and the last classified risk profile are
//! threaded explicitly through the views as a single owned object rather
//! than held in ambient global state, so each view stays independently
//! testable.

use serde::{Deserialize, Serialize};

use crate::profile::RiskResult;

/// Context object passed to every dashboard view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppContext {
    ticker: String,
    risk_profile: Option<RiskResult>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            ticker: "AAPL".to_string(),
            risk_profile: None,
        }
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Switch the selected ticker; symbols are uppercased for consistency.
    pub fn set_ticker(&mut self, ticker: &str) {
        self.ticker = ticker.trim().to_uppercase();
    }

    pub fn risk_profile(&self) -> Option<&RiskResult> {
        self.risk_profile.as_ref()
    }

    pub fn set_risk_profile(&mut self, profile: RiskResult) {
        self.risk_profile = Some(profile);
    }

    pub fn clear_risk_profile(&mut self) {
        self.risk_profile = None;
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ticker() {
        assert_eq!(AppContext::new().ticker(), "AAPL");
    }

    #[test]
    fn test_set_ticker_normalizes() {
        let mut ctx = AppContext::new();
        ctx.set_ticker("  msft ");
        assert_eq!(ctx.ticker(), "MSFT");
    }

    #[test]
    fn test_risk_profile_lifecycle() {
        let mut ctx = AppContext::new();
        assert!(ctx.risk_profile().is_none());

        ctx.set_risk_profile(crate::profile::RiskResult {
            risk_profile: "Aggressive".to_string(),
            cluster: 1,
            confidence: 0.9,
            inputs: Default::default(),
        });
        assert_eq!(ctx.risk_profile().unwrap().risk_profile, "Aggressive");

        ctx.clear_risk_profile();
        assert!(ctx.risk_profile().is_none());
    }
}
