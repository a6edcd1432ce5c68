//! firerisk-core - Fire-risk prediction from environmental readings
//!
//! The pipeline is a pure transform over nine readings:
//!
//! - **Scaler**: standardizes each reading with fitted mean / std
//! - **Linear model**: weighted sum of the standardized readings plus intercept
//! - **Predictor**: runs both and scales the output to a percentage
//!
//! The fitted artifacts are supplied by the host (see [`artifact`]) and are
//! never modified. A [`RiskPredictor`] without them fails every request with
//! [`FireRiskError::ModelUnavailable`].

pub mod artifact;
pub mod error;
pub mod features;
pub mod linear;
pub mod predictor;
pub mod scaler;

pub use artifact::{load_model, load_predictor, load_scaler};
pub use error::{ArtifactError, ArtifactKind, FireRiskError, InputError, Result};
pub use features::{FeatureRecord, FEATURE_COUNT, FEATURE_NAMES};
pub use linear::{predict, ModelParams};
pub use predictor::{predict_risk, RiskPrediction, RiskPredictor, PERCENT_SCALE};
pub use scaler::{standardize, ScalerParams};
