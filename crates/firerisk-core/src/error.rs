//! Error types for firerisk-core

use thiserror::Error;

/// Result type alias for prediction operations
pub type Result<T> = std::result::Result<T, FireRiskError>;

/// Main error type for prediction operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FireRiskError {
    /// A fitted artifact was never supplied to the predictor
    #[error("Model not loaded: {0} artifact is unavailable")]
    ModelUnavailable(ArtifactKind),

    /// The feature record could not be used as model input
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),
}

impl FireRiskError {
    /// Short machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            FireRiskError::ModelUnavailable(_) => "model_unavailable",
            FireRiskError::InvalidInput(_) => "invalid_input",
        }
    }
}

/// Which of the two fitted artifacts an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Scaler,
    Model,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::Scaler => write!(f, "scaler"),
            ArtifactKind::Model => write!(f, "model"),
        }
    }
}

/// Input-specific errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// Wrong number of features
    #[error("expected {expected} features, got {actual}")]
    Arity { expected: usize, actual: usize },

    /// A named field was not present in the submitted record
    #[error("missing field {0}")]
    MissingField(String),

    /// A named field did not parse as a real number
    #[error("field {field} is not a number: {value:?}")]
    NotANumber { field: String, value: String },

    /// The request body did not have the expected shape
    #[error("malformed request: {0}")]
    Malformed(String),
}

/// Errors raised while loading a fitted artifact from disk
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Vector lengths do not line up with the feature layout
    #[error("{kind} artifact has {field} of length {actual}, expected {expected}")]
    Shape {
        kind: ArtifactKind,
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}
