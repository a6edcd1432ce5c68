//! HTTP endpoint handlers

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Html,
    Form, Json,
};
use serde::{Deserialize, Serialize};

use firerisk_core::{FeatureRecord, FireRiskError, InputError, FEATURE_NAMES};

use crate::pages::{self, FormOutcome, MODEL_NOT_LOADED};
use crate::AppState;

/// Landing page
pub async fn index() -> Html<String> {
    Html(pages::render_index())
}

/// Empty prediction form
pub async fn home() -> Html<String> {
    Html(pages::render_home(&FormOutcome::Empty))
}

/// Handle a submitted prediction form
///
/// A missing model is reported on the page with status 200, the same way a
/// successful prediction is. Bad input is reported with status 400. The model
/// is checked before the form is read.
pub async fn predict_datapoint(
    State(state): State<Arc<AppState>>,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, Html<String>) {
    let predictor = &state.predictor;
    let result = predictor
        .ensure_available()
        .and_then(|()| FeatureRecord::from_form(&form))
        .and_then(|record| predictor.predict_record(&record));

    let (status, outcome) = match result {
        Ok(prediction) => {
            tracing::debug!("Predicted fire risk {:.2}%", prediction.percentage);
            (StatusCode::OK, FormOutcome::Prediction(prediction))
        }
        Err(FireRiskError::ModelUnavailable(missing)) => {
            tracing::warn!("Prediction requested but {} is not loaded", missing);
            (StatusCode::OK, FormOutcome::Message(MODEL_NOT_LOADED.to_string()))
        }
        Err(e @ FireRiskError::InvalidInput(_)) => {
            (StatusCode::BAD_REQUEST, FormOutcome::Message(e.to_string()))
        }
    };
    (status, Html(pages::render_home(&outcome)))
}

/// JSON prediction request
///
/// Exactly one of `features` (values in model order) or `record` (named
/// fields) should be given; `features` wins if both are.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub features: Option<Vec<f64>>,
    pub record: Option<FeatureRecord>,
}

/// JSON prediction response
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    pub raw: f64,
    pub percentage: f64,
}

/// JSON error body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

fn error_response(e: FireRiskError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match e {
        FireRiskError::ModelUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        FireRiskError::InvalidInput(_) => StatusCode::BAD_REQUEST,
    };
    (
        status,
        Json(ErrorResponse {
            error: e.kind().to_string(),
            message: e.to_string(),
        }),
    )
}

/// Predict from a JSON body
///
/// A body that does not deserialize (a feature that is not a number, say) is
/// `InvalidInput`, unless the model is missing, which is reported first.
pub async fn api_predict(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, (StatusCode, Json<ErrorResponse>)> {
    let predictor = &state.predictor;
    predictor.ensure_available().map_err(error_response)?;

    let Json(request) = body.map_err(|rejection| {
        error_response(InputError::Malformed(rejection.body_text()).into())
    })?;

    let prediction = match (request.features, request.record) {
        (Some(features), _) => predictor.predict(&features),
        (None, Some(record)) => predictor.predict_record(&record),
        // Reported as an empty feature vector
        (None, None) => predictor.predict(&[]),
    }
    .map_err(error_response)?;

    Ok(Json(PredictResponse {
        raw: prediction.raw,
        percentage: prediction.percentage,
    }))
}

/// Service status
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub model_loaded: bool,
    pub features: Vec<String>,
}

/// Report whether the artifacts are loaded
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        model_loaded: state.predictor.is_available(),
        features: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
    })
}
