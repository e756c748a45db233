//! # REST Handlers
//!
//! Request handlers for REST endpoints.
//!
//! # Endpoints
//!
//! - `GET /api/v1/cotizacion` - Latest quotation snapshot from the upstream provider
//! - `GET /api/v1/pedido` - Static order confirmation
//! - `POST /api/v1/diferencias` - MEP − crypto rate differences
//! - `GET /api/v1/health` - Service health
//!
//! # Error Mapping
//!
//! | Failure | Status | `error` field |
//! |---------|--------|---------------|
//! | Negative differences | 400 | `Negative differences detected` |
//! | Validation (incl. malformed JSON) | 400 | `Validation error` |
//! | Unexpected / upstream (differences) | 500 | `Internal server error` |
//! | Upstream (quotation) | 500 | empty body |
//! | Non-JSON content type | 415 | empty body |

use crate::application::dto::{DifferencesRequest, DifferencesResponse, OrderResponse, QuotationSnapshot};
use crate::application::error::ApplicationError;
use crate::application::services::{DifferencesService, OrderService, QuotationService};
use crate::domain::errors::DomainError;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for REST handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Quotation fetcher.
    pub quotation: QuotationService,
    /// Differences calculator.
    pub differences: DifferencesService,
    /// Order responder.
    pub orders: OrderService,
}

// ============================================================================
// Error Response
// ============================================================================

/// Standard error response format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error category (e.g., `Validation error`).
    pub error: String,
    /// Human-readable error message.
    pub message: String,
    /// RFC 3339 UTC timestamp of when the error was produced.
    pub timestamp: String,
}

impl ErrorResponse {
    /// Creates an error response stamped with the current time.
    #[must_use]
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

impl From<&ApplicationError> for (StatusCode, Json<ErrorResponse>) {
    fn from(err: &ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(DomainError::NegativeDifferences(_)) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(
                    "Negative differences detected",
                    err.to_string(),
                )),
            ),
            ApplicationError::Validation(_)
            | ApplicationError::Domain(DomainError::Validation(_)) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Validation error", err.to_string())),
            ),
            ApplicationError::Upstream(_) | ApplicationError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(
                    "Internal server error",
                    "An unexpected error occurred",
                )),
            ),
        }
    }
}

// ============================================================================
// Quotation Handler
// ============================================================================

/// Latest quotation snapshot.
///
/// Returns the upstream payload unchanged, or 500 with an empty body when
/// the provider call fails.
#[instrument(skip(state))]
pub async fn get_quotation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<QuotationSnapshot>, StatusCode> {
    info!("Received request to retrieve exchange rate quotation");

    match state.quotation.latest().await {
        Ok(snapshot) => Ok(Json(snapshot)),
        Err(err) => {
            error!("Failed to retrieve quotation: {err}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

// ============================================================================
// Order Handler
// ============================================================================

/// Order confirmation. Always succeeds.
#[instrument(skip(state))]
pub async fn get_order(State(state): State<Arc<AppState>>) -> Json<OrderResponse> {
    info!("Received request to process order");
    Json(state.orders.process())
}

// ============================================================================
// Differences Handler
// ============================================================================

/// MEP − crypto differences for a submitted rate set.
///
/// The body is extracted as `Option<DifferencesRequest>` so the JSON
/// literal `null` reaches the service and gets its dedicated validation
/// message. A non-JSON content type is rejected with 415 before any
/// validation runs; any other malformed body maps to a 400 validation
/// error.
#[instrument(skip(state, body))]
pub async fn calculate_differences(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Option<DifferencesRequest>>, JsonRejection>,
) -> Response {
    info!("Received request to calculate differences between MEP and crypto values");

    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => return json_rejection_response(&rejection),
    };

    match state.differences.calculate(request) {
        Ok(delta) => {
            info!("Differences calculated successfully");
            Json(DifferencesResponse::from(delta)).into_response()
        }
        Err(err) => {
            error!("Failed to calculate differences: {err}");
            let (status, body) = <(StatusCode, Json<ErrorResponse>)>::from(&err);
            (status, body).into_response()
        }
    }
}

fn json_rejection_response(rejection: &JsonRejection) -> Response {
    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return StatusCode::UNSUPPORTED_MEDIA_TYPE.into_response();
    }

    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new("Validation error", rejection.body_text())),
    )
        .into_response()
}

// ============================================================================
// Health Check
// ============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Health check endpoint.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::rates::RateField;

    #[test]
    fn error_response_carries_timestamp() {
        let response = ErrorResponse::new("Validation error", "MEP data is required");
        assert_eq!(response.error, "Validation error");
        assert_eq!(response.message, "MEP data is required");
        assert!(response.timestamp.ends_with('Z'));
    }

    #[test]
    fn negative_differences_map_to_bad_request() {
        let err = ApplicationError::from(DomainError::NegativeDifferences(vec![RateField::Avg]));
        let (status, Json(body)) = <(StatusCode, Json<ErrorResponse>)>::from(&err);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Negative differences detected");
        assert_eq!(body.message, "Negative differences found for items: avg");
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let err = ApplicationError::validation("Request cannot be null");
        let (status, Json(body)) = <(StatusCode, Json<ErrorResponse>)>::from(&err);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Validation error");
        assert_eq!(body.message, "Request cannot be null");
    }

    #[test]
    fn internal_errors_hide_detail() {
        let err = ApplicationError::Internal("connection pool exhausted".to_string());
        let (status, Json(body)) = <(StatusCode, Json<ErrorResponse>)>::from(&err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Internal server error");
        assert_eq!(body.message, "An unexpected error occurred");
    }

    #[tokio::test]
    async fn health_check_returns_healthy() {
        let response = health_check().await;
        assert_eq!(response.status, "healthy");
    }
}
