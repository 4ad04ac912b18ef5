//! Error types for createx-api.
//!
//! Every handler returns [`Result`]; [`ApiError`] turns failures into a
//! JSON body of the form `{"error": {"category": ..., "message": ...}}`.
//! Internal errors are logged and answered with a generic message.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Result type alias for createx-api handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Message sent to clients for any 500.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Errors surfaced at the HTTP boundary.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ApiError {
    /// The requested module, translation, or track does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Kind of resource.
        kind: &'static str,
        /// Identifier that was requested.
        id: String,
    },

    /// The request was malformed.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Anything else; details are logged, not returned.
    #[error("Internal error: {0}")]
    Internal(createx_core::Error),
}

impl ApiError {
    /// Creates a not-found error.
    pub fn not_found<S: Into<String>>(kind: &'static str, id: S) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Creates a bad-request error.
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn category(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::BadRequest(_) => "bad_request",
            Self::Internal(_) => "internal",
        }
    }
}

impl From<createx_core::Error> for ApiError {
    fn from(err: createx_core::Error) -> Self {
        match err {
            createx_core::Error::NotFound { kind, id } => Self::NotFound { kind, id },
            other => Self::Internal(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Internal(err) => {
                tracing::error!(error = %err, "Request failed");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        };

        let body = serde_json::json!({
            "error": {
                "category": self.category(),
                "message": message,
            }
        });

        (
            self.status(),
            [(header::CONTENT_TYPE, "application/json")],
            serde_json::to_string(&body).unwrap_or_default(),
        )
            .into_response()
    }
}

// ============================================================================
// Tests
// ============================================================================
