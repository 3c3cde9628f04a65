use axum::response::{IntoResponse, Response};
use http::StatusCode;
use songmatch_core::{HttpError, error_response};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Catalog lookup errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Title or artist absent or blank
    #[error("Title and artist are required")]
    MissingFields,

    /// The token exchange returned no access token
    ///
    /// This points at server-side credentials, not at the client's input.
    #[error("Failed to get Spotify access token")]
    Auth,

    /// The search returned no tracks
    #[error("No matching track found on Spotify")]
    NoMatch,

    /// Transport failure, non-success search status, or malformed payload
    #[error("{0}")]
    Upstream(String),
}

impl HttpError for CatalogError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFields => StatusCode::BAD_REQUEST,
            Self::NoMatch => StatusCode::NOT_FOUND,
            Self::Auth | Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            Self::MissingFields => "validation_error",
            Self::Auth => "auth_error",
            Self::NoMatch => "not_found_error",
            Self::Upstream(_) => "upstream_error",
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        error_response(&self)
    }
}
