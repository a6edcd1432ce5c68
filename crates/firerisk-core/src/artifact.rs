//! Loading fitted artifacts from disk
//!
//! Artifacts are JSON documents carrying the numbers exported from the fitted
//! scikit-learn objects:
//!
//! ```json
//! // scaler.json
//! { "mean": [..9 values..], "scale": [..9 values..] }
//!
//! // ridge.json
//! { "coef": [..9 values..], "intercept": 0.42 }
//! ```
//!
//! Loading happens once at startup. A failure is logged and leaves the
//! predictor unavailable; it is never retried.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::ArtifactError;
use crate::linear::ModelParams;
use crate::predictor::RiskPredictor;
use crate::scaler::ScalerParams;

/// Default file name of the scaler artifact
pub const DEFAULT_SCALER_FILE: &str = "scaler.json";

/// Default file name of the model artifact
pub const DEFAULT_MODEL_FILE: &str = "ridge.json";

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ArtifactError::Parse {
        path: display,
        source,
    })
}

/// Load scaler statistics from a JSON file
///
/// Vector lengths are checked during deserialization; a mismatch is reported
/// as a parse error carrying the shape message.
pub fn load_scaler(path: &Path) -> Result<ScalerParams, ArtifactError> {
    read_json(path)
}

/// Load model coefficients from a JSON file
pub fn load_model(path: &Path) -> Result<ModelParams, ArtifactError> {
    read_json(path)
}

/// Load both artifacts and build a predictor
///
/// If either artifact fails to load, the returned predictor holds neither and
/// every prediction reports `ModelUnavailable`.
pub fn load_predictor(dir: &Path, scaler_file: &str, model_file: &str) -> RiskPredictor {
    let loaded = load_scaler(&dir.join(scaler_file))
        .and_then(|scaler| load_model(&dir.join(model_file)).map(|model| (scaler, model)));

    match loaded {
        Ok((scaler, model)) => {
            tracing::info!(
                "Loaded scaler and model ({} features) from {:?}",
                scaler.len(),
                dir
            );
            RiskPredictor::new(scaler, model)
        }
        Err(e) => {
            tracing::warn!("Error loading model: {}", e);
            RiskPredictor::unavailable()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SCALER: &str = r#"{"mean":[0,0,0,0,0,0,0,0,0],"scale":[1,1,1,1,1,1,1,1,1]}"#;
    const MODEL: &str = r#"{"coef":[1,0,0,0,0,0,0,0,0],"intercept":0}"#;

    #[test]
    fn test_load_predictor_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_SCALER_FILE), SCALER).unwrap();
        fs::write(dir.path().join(DEFAULT_MODEL_FILE), MODEL).unwrap();

        let predictor = load_predictor(dir.path(), DEFAULT_SCALER_FILE, DEFAULT_MODEL_FILE);
        assert!(predictor.is_available());
        let x = [3.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
        assert_eq!(predictor.predict_risk(&x).unwrap(), 300.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_scaler(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ArtifactError::Io { .. }));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ridge.json");
        fs::write(&path, "not json").unwrap();
        let err = load_model(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::Parse { .. }));
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ridge.json");
        fs::write(&path, r#"{"coef":[1,2,3],"intercept":0}"#).unwrap();
        let err = load_model(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::Parse { .. }));
        assert!(err.to_string().contains("coef of length 3, expected 9"), "{err}");

        let path = dir.path().join("scaler.json");
        fs::write(&path, r#"{"mean":[0,0,0,0,0,0,0,0,0],"scale":[1,1,1]}"#).unwrap();
        assert!(load_scaler(&path).is_err());
    }

    #[test]
    fn test_one_missing_artifact_drops_both() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_SCALER_FILE), SCALER).unwrap();

        let predictor = load_predictor(dir.path(), DEFAULT_SCALER_FILE, DEFAULT_MODEL_FILE);
        assert!(!predictor.is_available());
        assert!(predictor.scaler().is_none());
        assert!(predictor.model().is_none());
    }
}
