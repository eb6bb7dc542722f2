//! Typed client for the backend analytics service.
//!
//! All financial analytics (prediction, explainability, optimization, risk
//! clustering) are produced server-side; this client shapes request payloads
//! and deserializes response JSON, nothing more. One submodule per backend
//! surface:
//!
//! - [`stock`]: price prediction, historical data, live quotes
//! - [`profile`]: remote risk classification
//! - [`news`]: ticker news with sentiment
//! - [`explain`]: SHAP / LIME / why-asset explanations
//! - [`portfolio`]: optimization, scenarios, rebalancing
//! - [`status`]: system health

pub mod explain;
pub mod news;
pub mod portfolio;
pub mod profile;
pub mod status;
pub mod stock;

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::Config;
use crate::error::ApiError;

/// HTTP client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ApiClient {
    /// Build a client for the given base URL and request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::ClientBuild)?;
        Ok(Self { base_url, http })
    }

    /// Build a client from the application config.
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(
            &config.api.base_url,
            Duration::from_secs(config.api.timeout_secs),
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url.join(path).map_err(|e| ApiError::InvalidBaseUrl {
            url: format!("{}{path}", self.base_url),
            message: e.to_string(),
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let resp = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| request_error(path, e))?;
        decode(path, resp).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| request_error(path, e))?;
        decode(path, resp).await
    }
}

/// Map a reqwest failure onto the API error taxonomy.
fn request_error(endpoint: &str, err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout {
            endpoint: endpoint.to_string(),
        }
    } else {
        ApiError::Transport {
            endpoint: endpoint.to_string(),
            source: err,
        }
    }
}

async fn decode<T: DeserializeOwned>(
    endpoint: &str,
    resp: reqwest::Response,
) -> Result<T, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ApiError::Http {
            status: status.as_u16(),
            endpoint: endpoint.to_string(),
        });
    }
    let bytes = resp.bytes().await.map_err(|e| request_error(endpoint, e))?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Malformed {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    })
}
