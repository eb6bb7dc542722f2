//! Remote risk classification.
//!
//! The delegated variant of the wizard: the form travels to the backend
//! clustering model instead of being scored locally. Callers driving a
//! [`crate::wizard::RiskWizard`] should capture the wizard generation before
//! awaiting this call and hand the result back through
//! `resolve_delegated`/`fail_delegation` so a restart mid-flight discards
//! the stale response.

use super::ApiClient;
use crate::error::ApiError;
use crate::profile::{RiskForm, RiskResult};

impl ApiClient {
    /// `POST /api/profile/predict`
    pub async fn predict_risk_profile(&self, form: &RiskForm) -> Result<RiskResult, ApiError> {
        self.post_json("/api/profile/predict", form).await
    }
}
