//! System status endpoints.

use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::error::ApiError;

/// Backend API health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    Degraded,
    Down,
    Error,
}

/// ML model lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelState {
    Ready,
    Training,
    Error,
    Down,
}

/// External data vendor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorState {
    Operational,
    Limited,
    Down,
    Error,
}

/// A timestamp the backend may send as either epoch number or string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Epoch(f64),
    Text(String),
}

impl Timestamp {
    /// Best-effort epoch milliseconds; string timestamps that are not plain
    /// numbers yield `None`.
    pub fn epoch_ms(&self) -> Option<f64> {
        match self {
            Timestamp::Epoch(n) => Some(*n),
            Timestamp::Text(s) => s.parse().ok(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiHealth {
    pub status: HealthState,
    /// Round-trip latency in milliseconds.
    #[serde(default)]
    pub latency: f64,
    pub last_check: Option<Timestamp>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MlServices {
    pub model_status: ModelState,
    pub last_sync: Option<Timestamp>,
    #[serde(default)]
    pub model_version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorStatus {
    pub status: VendorState,
    #[serde(default)]
    pub rate_limit_remaining: u32,
    pub reset_time: Option<Timestamp>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalApis {
    pub alpha_vantage: VendorStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemMetrics {
    pub cpu_usage: Option<f64>,
    pub memory_usage: Option<f64>,
    /// Seconds since backend start.
    pub uptime: Option<f64>,
}

/// Full status document from `GET /api/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemStatus {
    pub api_health: ApiHealth,
    pub ml_services: MlServices,
    pub external_apis: ExternalApis,
    pub system_metrics: Option<SystemMetrics>,
}

impl ApiClient {
    /// `GET /api/status`
    pub async fn fetch_status(&self) -> Result<SystemStatus, ApiError> {
        self.get_json("/api/status", &[]).await
    }

    /// `GET /api/status/health`
    pub async fn fetch_api_health(&self) -> Result<ApiHealth, ApiError> {
        self.get_json("/api/status/health", &[]).await
    }

    /// `GET /api/status/ml`
    pub async fn fetch_ml_status(&self) -> Result<MlServices, ApiError> {
        self.get_json("/api/status/ml", &[]).await
    }

    /// `GET /api/status/external`
    pub async fn fetch_external_status(&self) -> Result<ExternalApis, ApiError> {
        self.get_json("/api/status/external", &[]).await
    }

    /// `GET /api/status/metrics`
    pub async fn fetch_system_metrics(&self) -> Result<Option<SystemMetrics>, ApiError> {
        self.get_json("/api/status/metrics", &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_with_mixed_timestamps() {
        let body = r#"{
            "api_health": {"status": "healthy", "latency": 42.0, "last_check": 1718000000000},
            "ml_services": {"model_status": "ready", "last_sync": "1717990000000", "model_version": "v3.1"},
            "external_apis": {
                "alpha_vantage": {"status": "limited", "rate_limit_remaining": 3, "reset_time": 1718003600000}
            },
            "system_metrics": {"cpu_usage": 12.5, "memory_usage": 48.0, "uptime": 86400}
        }"#;
        let status: SystemStatus = serde_json::from_str(body).unwrap();
        assert_eq!(status.api_health.status, HealthState::Healthy);
        assert_eq!(
            status.ml_services.last_sync.as_ref().unwrap().epoch_ms(),
            Some(1717990000000.0)
        );
        assert_eq!(status.external_apis.alpha_vantage.rate_limit_remaining, 3);
        assert_eq!(status.system_metrics.unwrap().uptime, Some(86400.0));
    }

    #[test]
    fn test_status_without_metrics() {
        let body = r#"{
            "api_health": {"status": "degraded", "latency": 900.0, "last_check": null},
            "ml_services": {"model_status": "training", "last_sync": null},
            "external_apis": {"alpha_vantage": {"status": "down", "reset_time": null}}
        }"#;
        let status: SystemStatus = serde_json::from_str(body).unwrap();
        assert!(status.system_metrics.is_none());
        assert_eq!(status.ml_services.model_version, "");
        assert_eq!(status.external_apis.alpha_vantage.status, VendorState::Down);
    }

    #[test]
    fn test_textual_timestamp_without_number() {
        let ts = Timestamp::Text("2025-06-01T12:00:00Z".to_string());
        assert_eq!(ts.epoch_ms(), None);
    }
}
