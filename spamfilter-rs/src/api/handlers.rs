//! Classification API handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::classifier::model::NaiveBayesModel;
use crate::classifier::types::TrainingSummary;

/// Shared application state
pub struct AppState {
    pub model: Arc<NaiveBayesModel>,
    /// Refuse classification instead of answering with the fallback label
    /// when the model has not seen both classes.
    pub strict_untrained: bool,
}

/// API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.to_string()),
        }
    }
}

/// Classification result
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub classification: String,
}

/// POST /classify - classify a raw message body
///
/// The body is forwarded verbatim to the model. An empty or garbled body
/// still tokenizes (to nothing, in the worst case) and yields a label
/// driven purely by the class priors; the model itself never fails a
/// request.
pub async fn classify(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Json<ApiResponse<ClassifyResponse>>, StatusCode> {
    if state.strict_untrained {
        if let Err(e) = state.model.ensure_trained() {
            return Ok(Json(ApiResponse::error(&e.to_string())));
        }
    }

    let label = state.model.predict(&body);
    debug!("classified {} byte message as {}", body.len(), label);

    Ok(Json(ApiResponse::success(ClassifyResponse {
        classification: label.to_string(),
    })))
}

/// GET /stats - training summary of the served model
pub async fn stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<TrainingSummary>>, StatusCode> {
    Ok(Json(ApiResponse::success(state.model.summary())))
}

/// GET /health - liveness probe
pub async fn health() -> Json<ApiResponse<String>> {
    Json(ApiResponse::success("ok".to_string()))
}
