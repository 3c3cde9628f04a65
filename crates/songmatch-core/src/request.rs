use axum::{
    body::Body,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{HttpError, error_response};

/// Body limit for JSON requests (1 MiB)
const BODY_LIMIT_BYTES: usize = 1 << 20;

/// Extractor for JSON request bodies
///
/// Unlike `axum::Json`, rejections use the shared `{"error": ...}` envelope.
pub struct ExtractPayload<T>(pub T);

/// Reasons a JSON body could not be extracted
#[derive(Debug, thiserror::Error)]
pub enum PayloadRejection {
    #[error("Unsupported Content-Type, expected: 'Content-Type: application/json'")]
    UnsupportedMediaType,

    #[error("Request body is too large, limit is {BODY_LIMIT_BYTES} bytes")]
    TooLarge,

    #[error("Failed to read request body: {0}")]
    Unreadable(String),

    #[error("Failed to parse request body: {0}")]
    Invalid(String),
}

impl HttpError for PayloadRejection {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Unreadable(_) | Self::Invalid(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_type(&self) -> &'static str {
        "invalid_request_error"
    }
}

impl IntoResponse for PayloadRejection {
    fn into_response(self) -> Response {
        error_response(&self)
    }
}

fn is_json(headers: &http::HeaderMap) -> bool {
    headers
        .get(http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

impl<S, T: DeserializeOwned> axum::extract::FromRequest<S> for ExtractPayload<T>
where
    S: Send + Sync,
{
    type Rejection = PayloadRejection;

    async fn from_request(request: http::Request<Body>, _state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = request.into_parts();

        if !is_json(&parts.headers) {
            return Err(PayloadRejection::UnsupportedMediaType);
        }

        let bytes = axum::body::to_bytes(body, BODY_LIMIT_BYTES).await.map_err(|err| {
            if std::error::Error::source(&err).is_some_and(|source| source.is::<http_body_util::LengthLimitError>()) {
                PayloadRejection::TooLarge
            } else {
                PayloadRejection::Unreadable(err.to_string())
            }
        })?;

        let payload = serde_json::from_slice::<T>(&bytes).map_err(|e| PayloadRejection::Invalid(e.to_string()))?;

        Ok(Self(payload))
    }
}
