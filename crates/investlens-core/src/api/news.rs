//! Ticker news with sentiment scores.

use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::error::ApiError;

/// One news article as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    /// Publication timestamp as provided by the feed.
    pub published: String,
    /// Sentiment score, roughly -1.0..=1.0.
    pub sentiment: f64,
}

impl ApiClient {
    /// `GET /api/news?ticker=`
    pub async fn fetch_news(&self, ticker: &str) -> Result<Vec<NewsItem>, ApiError> {
        self.get_json("/api/news", &[("ticker", ticker)]).await
    }
}
