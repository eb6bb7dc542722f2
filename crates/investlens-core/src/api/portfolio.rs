//! Server-side portfolio optimization, scenario analysis and rebalancing.

use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::error::ApiError;

/// Market scenario for optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Bull,
    Bear,
    Volatile,
}

impl std::str::FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bull" => Ok(Scenario::Bull),
            "bear" => Ok(Scenario::Bear),
            "volatile" => Ok(Scenario::Volatile),
            other => Err(format!("unknown scenario '{other}' (expected bull, bear or volatile)")),
        }
    }
}

/// Optimization request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeRequest {
    pub tickers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<Scenario>,
}

/// Weight assigned to one ticker by the optimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub ticker: String,
    pub weight: f64,
    pub expected_return: f64,
    pub risk: f64,
}

/// Optimizer output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedPortfolio {
    pub allocations: Vec<Allocation>,
    pub total_expected_return: f64,
    pub total_risk: f64,
    pub sharpe_ratio: f64,
}

/// Optimizations under all three scenarios.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioAnalysis {
    pub bull: OptimizedPortfolio,
    pub bear: OptimizedPortfolio,
    pub volatile: OptimizedPortfolio,
}

#[derive(Debug, Clone, Serialize)]
struct ScenariosRequest<'a> {
    tickers: &'a [String],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct RebalanceRequest<'a> {
    current_allocation: &'a [Allocation],
}

impl ApiClient {
    /// `POST /api/portfolio/optimize`
    pub async fn optimize_portfolio(
        &self,
        request: &OptimizeRequest,
    ) -> Result<OptimizedPortfolio, ApiError> {
        self.post_json("/api/portfolio/optimize", request).await
    }

    /// `POST /api/portfolio/scenarios`
    pub async fn fetch_scenarios(&self, tickers: &[String]) -> Result<ScenarioAnalysis, ApiError> {
        self.post_json("/api/portfolio/scenarios", &ScenariosRequest { tickers })
            .await
    }

    /// `POST /api/portfolio/rebalance`
    pub async fn rebalance_portfolio(
        &self,
        current: &[Allocation],
    ) -> Result<OptimizedPortfolio, ApiError> {
        self.post_json(
            "/api/portfolio/rebalance",
            &RebalanceRequest {
                current_allocation: current,
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_parse() {
        assert_eq!("Bull".parse::<Scenario>().unwrap(), Scenario::Bull);
        assert!("sideways".parse::<Scenario>().is_err());
    }

    #[test]
    fn test_optimize_request_omits_absent_scenario() {
        let request = OptimizeRequest {
            tickers: vec!["AAPL".to_string()],
            scenario: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("scenario").is_none());

        let request = OptimizeRequest {
            tickers: vec!["AAPL".to_string()],
            scenario: Some(Scenario::Bear),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["scenario"], "bear");
    }

    #[test]
    fn test_optimized_portfolio_deserializes() {
        let body = r#"{
            "allocations": [
                {"ticker": "AAPL", "weight": 0.6, "expectedReturn": 0.12, "risk": 0.2},
                {"ticker": "MSFT", "weight": 0.4, "expectedReturn": 0.1, "risk": 0.18}
            ],
            "totalExpectedReturn": 0.112,
            "totalRisk": 0.19,
            "sharpeRatio": 0.59
        }"#;
        let portfolio: OptimizedPortfolio = serde_json::from_str(body).unwrap();
        assert_eq!(portfolio.allocations.len(), 2);
        assert_eq!(portfolio.allocations[0].expected_return, 0.12);
    }

    #[test]
    fn test_rebalance_body_key() {
        let allocations = vec![Allocation {
            ticker: "AAPL".to_string(),
            weight: 1.0,
            expected_return: 0.1,
            risk: 0.2,
        }];
        let body = serde_json::to_value(RebalanceRequest {
            current_allocation: &allocations,
        })
        .unwrap();
        assert!(body.get("currentAllocation").is_some());
    }
}
