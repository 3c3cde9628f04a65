use axum::response::{IntoResponse, Response};
use http::StatusCode;
use songmatch_core::{HttpError, error_response};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TranscribeError>;

/// Transcription endpoint errors
#[derive(Debug, Error)]
pub enum TranscribeError {
    /// No usable `audio` attachment in the request
    #[error("No audio file provided")]
    MissingAudio,

    /// The multipart body could not be read
    #[error("Failed to read audio upload: {0}")]
    InvalidUpload(String),

    /// Deepgram answered with a non-success status
    #[error("Deepgram API error: {message}")]
    Upstream { status: StatusCode, message: String },

    /// Deepgram succeeded but produced no transcript
    #[error("Could not transcribe audio")]
    EmptyTranscript,

    #[error("Failed to reach Deepgram: {0}")]
    Connection(String),

    #[error("Failed to parse Deepgram response: {0}")]
    InvalidResponse(String),

    /// The scratch file could not be written or reopened
    #[error("Failed to stage audio file: {0}")]
    Scratch(#[from] std::io::Error),
}

impl HttpError for TranscribeError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingAudio | Self::InvalidUpload(_) | Self::EmptyTranscript => StatusCode::BAD_REQUEST,
            Self::Upstream { status, .. } => *status,
            Self::Connection(_) | Self::InvalidResponse(_) | Self::Scratch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            Self::MissingAudio | Self::InvalidUpload(_) => "validation_error",
            Self::EmptyTranscript => "transcription_empty_error",
            Self::Upstream { .. } | Self::Connection(_) | Self::InvalidResponse(_) => "upstream_error",
            Self::Scratch(_) => "internal_error",
        }
    }
}

impl IntoResponse for TranscribeError {
    fn into_response(self) -> Response {
        error_response(&self)
    }
}
