use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Trait for endpoint errors that map onto an HTTP status
///
/// Implemented by each feature crate's error type so every endpoint answers
/// failures with the same envelope.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable category, used for logging
    fn error_type(&self) -> &'static str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String {
        self.to_string()
    }
}

/// Error envelope returned by every endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Convert an endpoint error into its HTTP response
///
/// This is the single boundary where failures are logged.
pub fn error_response<E: HttpError>(err: &E) -> Response {
    let status = err.status_code();
    let message = err.client_message();

    if status.is_server_error() {
        tracing::error!(error_type = err.error_type(), %status, "request failed: {err}");
    } else {
        tracing::warn!(error_type = err.error_type(), %status, "request rejected: {err}");
    }

    (status, Json(ErrorBody::new(message))).into_response()
}
