//! Risk profiling form for the delegated-classification variant.
//!
//! Instead of the local questionnaire, the richer form sends age, income,
//! volatility tolerance and investment horizon to the backend classifier
//! (`POST /api/profile/predict`), which answers with a profile label,
//! cluster id and confidence.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Input to the remote risk classifier. Field names travel camelCase on the
/// wire, matching the backend contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskForm {
    pub age: u32,
    /// Annual income in USD.
    pub income: u32,
    /// Self-reported tolerance, 1-10.
    pub volatility_tolerance: u8,
    /// Planned horizon in years.
    pub investment_horizon: u8,
}

impl Default for RiskForm {
    fn default() -> Self {
        Self {
            age: 30,
            income: 60_000,
            volatility_tolerance: 5,
            investment_horizon: 10,
        }
    }
}

impl RiskForm {
    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        range_check("age", self.age as i64, 18, 100)?;
        range_check("income", self.income as i64, 0, 1_000_000)?;
        range_check("volatility_tolerance", self.volatility_tolerance as i64, 1, 10)?;
        range_check("investment_horizon", self.investment_horizon as i64, 1, 30)?;
        Ok(())
    }

    /// Shape the form for a four-axis radar display, each axis scaled 0-10.
    pub fn radar_points(&self) -> Vec<RadarPoint> {
        vec![
            RadarPoint {
                subject: "Age",
                value: self.age as f64 / 80.0 * 10.0,
            },
            RadarPoint {
                subject: "Income",
                value: self.income as f64 / 100_000.0 * 10.0,
            },
            RadarPoint {
                subject: "Risk Tolerance",
                value: self.volatility_tolerance as f64,
            },
            RadarPoint {
                subject: "Investment Horizon",
                value: self.investment_horizon as f64 / 30.0 * 10.0,
            },
        ]
    }
}

fn range_check(field: &'static str, value: i64, min: i64, max: i64) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// One axis of the radar display.
#[derive(Debug, Clone, Serialize)]
pub struct RadarPoint {
    pub subject: &'static str,
    pub value: f64,
}

/// Classification returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskResult {
    /// Profile label, e.g. "Conservative".
    pub risk_profile: String,
    /// Cluster the inputs fell into.
    pub cluster: u32,
    /// Classifier confidence, 0.0-1.0.
    pub confidence: f64,
    /// Echo of the submitted form.
    pub inputs: RiskForm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_is_valid() {
        assert!(RiskForm::default().validate().is_ok());
    }

    #[test]
    fn test_age_out_of_range() {
        let form = RiskForm {
            age: 17,
            ..Default::default()
        };
        let err = form.validate().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange { field: "age", .. }
        ));
    }

    #[test]
    fn test_tolerance_bounds() {
        let mut form = RiskForm::default();
        form.volatility_tolerance = 0;
        assert!(form.validate().is_err());
        form.volatility_tolerance = 10;
        assert!(form.validate().is_ok());
        form.volatility_tolerance = 11;
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_horizon_bounds() {
        let mut form = RiskForm::default();
        form.investment_horizon = 31;
        assert!(form.validate().is_err());
        form.investment_horizon = 1;
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = serde_json::to_value(RiskForm::default()).unwrap();
        assert!(json.get("volatilityTolerance").is_some());
        assert!(json.get("investmentHorizon").is_some());
        assert!(json.get("volatility_tolerance").is_none());
    }

    #[test]
    fn test_radar_points_scaling() {
        let points = RiskForm::default().radar_points();
        assert_eq!(points.len(), 4);
        assert!((points[0].value - 3.75).abs() < 1e-9); // 30 / 80 * 10
        assert!((points[1].value - 6.0).abs() < 1e-9); // 60000 / 100000 * 10
        assert!((points[2].value - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_result_round_trip() {
        let body = r#"{
            "riskProfile": "Moderate",
            "cluster": 2,
            "confidence": 0.87,
            "inputs": {"age": 30, "income": 60000, "volatilityTolerance": 5, "investmentHorizon": 10}
        }"#;
        let result: RiskResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.risk_profile, "Moderate");
        assert_eq!(result.cluster, 2);
        assert_eq!(result.inputs, RiskForm::default());
    }
}
