use axum::response::{IntoResponse, Response};
use http::StatusCode;
use songmatch_core::{HttpError, error_response};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LyricsError>;

/// Lyrics search errors
#[derive(Debug, Error)]
pub enum LyricsError {
    /// Lyrics absent or blank
    #[error("No lyrics provided")]
    MissingLyrics,

    /// Genius returned no hits
    #[error("No songs found matching those lyrics")]
    NoMatch,

    /// Genius answered with a non-success status
    #[error("API request failed with status code {}", .status.as_u16())]
    Upstream { status: StatusCode },

    /// Transport failure or unreadable response
    #[error("Exception occurred: {0}")]
    Request(String),
}

impl HttpError for LyricsError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingLyrics => StatusCode::BAD_REQUEST,
            Self::NoMatch => StatusCode::NOT_FOUND,
            Self::Upstream { status } => *status,
            Self::Request(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            Self::MissingLyrics => "validation_error",
            Self::NoMatch => "not_found_error",
            Self::Upstream { .. } | Self::Request(_) => "upstream_error",
        }
    }
}

impl IntoResponse for LyricsError {
    fn into_response(self) -> Response {
        error_response(&self)
    }
}
