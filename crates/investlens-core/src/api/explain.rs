//! Model explainability: SHAP, LIME and per-asset reasoning.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ApiClient;
use crate::error::ApiError;

/// Feature vector for a single-instance explanation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainRequest {
    pub features: Vec<f64>,
}

/// Per-portfolio SHAP request: one feature row per asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioExplainRequest {
    pub portfolio_features: Vec<Vec<f64>>,
}

/// Request for a "why this asset" explanation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhyAssetRequest {
    pub features: Vec<f64>,
    pub asset_name: String,
}

/// SHAP importances keyed by feature name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapResponse {
    pub feature_importance: BTreeMap<String, f64>,
}

/// A single feature's signed contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureContribution {
    pub feature: String,
    pub contribution: f64,
}

/// LIME contributions for one instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimeResponse {
    pub feature_contributions: Vec<FeatureContribution>,
}

/// Natural-language and numeric reasoning for one asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhyAssetResponse {
    pub asset: String,
    pub reasons: Vec<String>,
    pub contributions: Vec<FeatureContribution>,
}

/// Order contributions by descending magnitude for display.
pub fn rank_by_magnitude(contributions: &mut [FeatureContribution]) {
    contributions.sort_by(|a, b| b.contribution.abs().total_cmp(&a.contribution.abs()));
}

impl ApiClient {
    /// `POST /api/explain/shap`
    pub async fn fetch_shap(&self, request: &ExplainRequest) -> Result<ShapResponse, ApiError> {
        self.post_json("/api/explain/shap", request).await
    }

    /// `POST /api/explain/portfolio/shap`
    pub async fn fetch_portfolio_shap(
        &self,
        request: &PortfolioExplainRequest,
    ) -> Result<ShapResponse, ApiError> {
        self.post_json("/api/explain/portfolio/shap", request).await
    }

    /// `POST /api/explain/lime`
    pub async fn fetch_lime(&self, request: &ExplainRequest) -> Result<LimeResponse, ApiError> {
        self.post_json("/api/explain/lime", request).await
    }

    /// `POST /api/explain/why-asset`
    pub async fn fetch_why_asset(
        &self,
        request: &WhyAssetRequest,
    ) -> Result<WhyAssetResponse, ApiError> {
        self.post_json("/api/explain/why-asset", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_by_magnitude() {
        let mut contributions = vec![
            FeatureContribution {
                feature: "volume".to_string(),
                contribution: 0.1,
            },
            FeatureContribution {
                feature: "momentum".to_string(),
                contribution: -0.8,
            },
            FeatureContribution {
                feature: "pe_ratio".to_string(),
                contribution: 0.3,
            },
        ];
        rank_by_magnitude(&mut contributions);
        assert_eq!(contributions[0].feature, "momentum");
        assert_eq!(contributions[1].feature, "pe_ratio");
        assert_eq!(contributions[2].feature, "volume");
    }

    #[test]
    fn test_shap_response_deserializes() {
        let body = r#"{"feature_importance": {"rsi": 0.4, "macd": -0.1}}"#;
        let resp: ShapResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.feature_importance.len(), 2);
        assert_eq!(resp.feature_importance["rsi"], 0.4);
    }

    #[test]
    fn test_why_asset_response_deserializes() {
        let body = r#"{
            "asset": "AAPL",
            "reasons": ["strong momentum"],
            "contributions": [{"feature": "momentum", "contribution": 0.6}]
        }"#;
        let resp: WhyAssetResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.asset, "AAPL");
        assert_eq!(resp.contributions[0].contribution, 0.6);
    }
}
