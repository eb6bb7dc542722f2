//! Stock prediction, historical data, and live quotes.

use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::error::ApiError;

/// Predicted trend direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    #[serde(rename = "UP")]
    Up,
    #[serde(rename = "DOWN")]
    Down,
}

/// One day of the price forecast with its confidence interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub day: u32,
    pub price: f64,
    pub upper: f64,
    pub lower: f64,
}

/// Model forecast for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPrediction {
    pub ticker: String,
    pub forecast: Vec<ForecastPoint>,
    pub trend: Trend,
    pub last_price: f64,
}

impl ApiClient {
    /// `GET /api/stock/predict?ticker=`
    pub async fn fetch_prediction(&self, ticker: &str) -> Result<StockPrediction, ApiError> {
        self.get_json("/api/stock/predict", &[("ticker", ticker)])
            .await
    }

    /// `GET /api/stock/historical?ticker=&period=`
    ///
    /// The backend passes vendor-shaped series JSON through untouched, so
    /// this returns the raw value rather than inventing a schema for it.
    pub async fn fetch_historical(
        &self,
        ticker: &str,
        period: &str,
    ) -> Result<serde_json::Value, ApiError> {
        self.get_json("/api/stock/historical", &[("ticker", ticker), ("period", period)])
            .await
    }

    /// `GET /api/stock/price?ticker=`
    pub async fn fetch_live_price(&self, ticker: &str) -> Result<serde_json::Value, ApiError> {
        self.get_json("/api/stock/price", &[("ticker", ticker)]).await
    }
}
