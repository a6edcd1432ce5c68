//! Linear (ridge) regression inference
//!
//! The model was fit offline; only the learned coefficients and intercept are
//! kept. Inference is a dot product over standardized features.

use serde::{Deserialize, Serialize};

use crate::error::{ArtifactError, ArtifactKind, Result};
use crate::features::{check_arity, FEATURE_COUNT};

/// Fitted weights and intercept of a linear model
///
/// Deserialization goes through [`ModelParams::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawModel")]
pub struct ModelParams {
    #[serde(rename = "coef")]
    weights: Vec<f64>,
    intercept: f64,
}

/// Unchecked wire shape of [`ModelParams`]
#[derive(Deserialize)]
struct RawModel {
    #[serde(alias = "weights")]
    coef: Vec<f64>,
    intercept: f64,
}

impl TryFrom<RawModel> for ModelParams {
    type Error = ArtifactError;

    fn try_from(raw: RawModel) -> std::result::Result<Self, Self::Error> {
        Self::new(raw.coef, raw.intercept)
    }
}

impl ModelParams {
    /// Create model parameters, checking there is one weight per feature
    pub fn new(weights: Vec<f64>, intercept: f64) -> std::result::Result<Self, ArtifactError> {
        let params = Self { weights, intercept };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> std::result::Result<(), ArtifactError> {
        if self.weights.len() != FEATURE_COUNT {
            return Err(ArtifactError::Shape {
                kind: ArtifactKind::Model,
                field: "coef",
                expected: FEATURE_COUNT,
                actual: self.weights.len(),
            });
        }
        Ok(())
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Predict for a single standardized row
    ///
    /// Computes `sum(x[i] * w[i]) + intercept`.
    pub fn predict(&self, x: &[f64]) -> Result<f64> {
        check_arity(x, FEATURE_COUNT)?;
        let dot: f64 = x.iter().zip(&self.weights).map(|(&v, &w)| v * w).sum();
        Ok(dot + self.intercept)
    }
}

/// Predict for `x` with `params`
pub fn predict(x: &[f64], params: &ModelParams) -> Result<f64> {
    params.predict(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_selects_weighted_feature() {
        let mut w = vec![0.0; 9];
        w[0] = 1.0;
        let model = ModelParams::new(w, 0.0).unwrap();
        let x = [3.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
        assert_eq!(model.predict(&x).unwrap(), 3.0);
    }

    #[test]
    fn test_predict_intercept_only() {
        let model = ModelParams::new(vec![0.0; 9], 5.0).unwrap();
        assert_eq!(model.predict(&[123.0; 9]).unwrap(), 5.0);
    }

    #[test]
    fn test_predict_dot_product() {
        let w: Vec<f64> = (1..=9).map(|i| i as f64).collect();
        let model = ModelParams::new(w, -1.0).unwrap();
        // 1 + 2 + ... + 9 = 45
        assert_eq!(model.predict(&[1.0; 9]).unwrap(), 44.0);
    }

    #[test]
    fn test_predict_rejects_wrong_arity() {
        let model = ModelParams::new(vec![0.0; 9], 0.0).unwrap();
        assert!(model.predict(&[0.0; 8]).is_err());
        assert!(model.predict(&[0.0; 10]).is_err());
    }

    #[test]
    fn test_new_rejects_wrong_weight_count() {
        assert!(ModelParams::new(vec![0.0; 10], 0.0).is_err());
    }

    #[test]
    fn test_deserialize_sklearn_names() {
        let model: ModelParams =
            serde_json::from_str(r#"{"coef":[1,0,0,0,0,0,0,0,0],"intercept":0.25}"#).unwrap();
        assert_eq!(model.weights()[0], 1.0);
        assert_eq!(model.intercept(), 0.25);
    }

    #[test]
    fn test_deserialize_rejects_wrong_weight_count() {
        let err = serde_json::from_str::<ModelParams>(r#"{"coef":[1,0,0,0,0,0,0,0],"intercept":0}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("coef of length 8"), "{err}");
    }
}
