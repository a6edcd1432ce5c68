//! Feature standardization
//!
//! Maps each raw reading to a z-score using per-feature statistics that were
//! fixed when the scaler was fit:
//!
//! ```text
//! z[i] = (x[i] - mean[i]) / std[i]
//! ```
//!
//! A zero standard deviation is a defect of the supplied artifact and is not
//! guarded against here.

use serde::{Deserialize, Serialize};

use crate::error::{ArtifactError, ArtifactKind, Result};
use crate::features::{check_arity, FEATURE_COUNT};

/// Fitted per-feature mean and standard deviation
///
/// Deserialization goes through [`ScalerParams::new`], so a document with the
/// wrong vector lengths is rejected rather than loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawScaler")]
pub struct ScalerParams {
    mean: Vec<f64>,
    #[serde(rename = "scale")]
    std: Vec<f64>,
}

/// Unchecked wire shape of [`ScalerParams`]
#[derive(Deserialize)]
struct RawScaler {
    mean: Vec<f64>,
    #[serde(alias = "std")]
    scale: Vec<f64>,
}

impl TryFrom<RawScaler> for ScalerParams {
    type Error = ArtifactError;

    fn try_from(raw: RawScaler) -> std::result::Result<Self, Self::Error> {
        Self::new(raw.mean, raw.scale)
    }
}

impl ScalerParams {
    /// Create scaler parameters, checking they cover every feature
    pub fn new(mean: Vec<f64>, std: Vec<f64>) -> std::result::Result<Self, ArtifactError> {
        let params = Self { mean, std };
        params.validate()?;
        Ok(params)
    }

    /// Check both vectors line up with the feature layout
    pub fn validate(&self) -> std::result::Result<(), ArtifactError> {
        for (field, len) in [("mean", self.mean.len()), ("scale", self.std.len())] {
            if len != FEATURE_COUNT {
                return Err(ArtifactError::Shape {
                    kind: ArtifactKind::Scaler,
                    field,
                    expected: FEATURE_COUNT,
                    actual: len,
                });
            }
        }
        Ok(())
    }

    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    pub fn std(&self) -> &[f64] {
        &self.std
    }

    /// Number of features these statistics were fit on
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// Standardize a raw feature vector
    ///
    /// Fails with `InvalidInput` if `x` does not have one entry per feature.
    pub fn standardize(&self, x: &[f64]) -> Result<Vec<f64>> {
        check_arity(x, FEATURE_COUNT)?;
        Ok(x.iter()
            .zip(&self.mean)
            .zip(&self.std)
            .map(|((&v, &m), &s)| (v - m) / s)
            .collect())
    }

    /// Map standardized values back to raw readings
    pub fn inverse(&self, z: &[f64]) -> Result<Vec<f64>> {
        check_arity(z, FEATURE_COUNT)?;
        Ok(z.iter()
            .zip(&self.mean)
            .zip(&self.std)
            .map(|((&v, &m), &s)| v * s + m)
            .collect())
    }
}

/// Standardize `x` with `params`
pub fn standardize(x: &[f64], params: &ScalerParams) -> Result<Vec<f64>> {
    params.standardize(x)
}
