//! End-to-end fire-risk prediction
//!
//! Raw readings are standardized with the fitted scaler, passed through the
//! linear model, and the result is scaled by 100 to read as a percentage.
//! The percentage is not clamped; it can be negative or exceed 100.

use serde::{Deserialize, Serialize};

use crate::error::{ArtifactKind, FireRiskError, Result};
use crate::features::FeatureRecord;
use crate::linear::ModelParams;
use crate::scaler::ScalerParams;

/// Factor applied to the raw model output for display
pub const PERCENT_SCALE: f64 = 100.0;

/// Output of one prediction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskPrediction {
    /// Model output before scaling
    pub raw: f64,
    /// `raw * 100`
    pub percentage: f64,
}

impl RiskPrediction {
    fn from_raw(raw: f64) -> Self {
        Self {
            raw,
            percentage: raw * PERCENT_SCALE,
        }
    }
}

/// Predict the fire-risk percentage for raw readings
///
/// Either artifact being `None` fails with `ModelUnavailable` before the
/// input is looked at.
pub fn predict_risk(
    raw: &[f64],
    scaler: Option<&ScalerParams>,
    model: Option<&ModelParams>,
) -> Result<f64> {
    predict_detailed(raw, scaler, model).map(|p| p.percentage)
}

fn predict_detailed(
    raw: &[f64],
    scaler: Option<&ScalerParams>,
    model: Option<&ModelParams>,
) -> Result<RiskPrediction> {
    let scaler = scaler.ok_or(FireRiskError::ModelUnavailable(ArtifactKind::Scaler))?;
    let model = model.ok_or(FireRiskError::ModelUnavailable(ArtifactKind::Model))?;

    let scaled = scaler.standardize(raw)?;
    let output = model.predict(&scaled)?;
    Ok(RiskPrediction::from_raw(output))
}

/// Immutable prediction context holding the fitted artifacts
///
/// Built once at startup and shared read-only between requests. A predictor
/// constructed without artifacts stays unavailable for its whole lifetime.
#[derive(Debug, Clone, Default)]
pub struct RiskPredictor {
    scaler: Option<ScalerParams>,
    model: Option<ModelParams>,
}

impl RiskPredictor {
    pub fn new(scaler: ScalerParams, model: ModelParams) -> Self {
        Self {
            scaler: Some(scaler),
            model: Some(model),
        }
    }

    /// Create a predictor from whichever artifacts were supplied
    pub fn from_parts(scaler: Option<ScalerParams>, model: Option<ModelParams>) -> Self {
        Self { scaler, model }
    }

    /// A predictor with no artifacts; every prediction fails
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Whether both artifacts are present
    pub fn is_available(&self) -> bool {
        self.scaler.is_some() && self.model.is_some()
    }

    /// Fail with `ModelUnavailable` unless both artifacts are present
    ///
    /// Callers that parse input themselves check this first, so a missing
    /// model is reported ahead of any input problem.
    pub fn ensure_available(&self) -> Result<()> {
        if self.scaler.is_none() {
            return Err(FireRiskError::ModelUnavailable(ArtifactKind::Scaler));
        }
        if self.model.is_none() {
            return Err(FireRiskError::ModelUnavailable(ArtifactKind::Model));
        }
        Ok(())
    }

    pub fn scaler(&self) -> Option<&ScalerParams> {
        self.scaler.as_ref()
    }

    pub fn model(&self) -> Option<&ModelParams> {
        self.model.as_ref()
    }

    /// Predict the risk percentage for raw readings in model order
    pub fn predict_risk(&self, raw: &[f64]) -> Result<f64> {
        predict_risk(raw, self.scaler(), self.model())
    }

    /// Predict for raw readings, keeping the unscaled model output
    pub fn predict(&self, raw: &[f64]) -> Result<RiskPrediction> {
        predict_detailed(raw, self.scaler(), self.model())
    }

    /// Predict for a named record
    pub fn predict_record(&self, record: &FeatureRecord) -> Result<RiskPrediction> {
        self.predict(&record.to_array())
    }
}
