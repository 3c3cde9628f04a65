use axum::body::Bytes;
use serde::{Deserialize, Serialize};
use songmatch_core::ErrorBody;

/// Audio attachment taken from the multipart `audio` field
#[derive(Debug)]
pub struct AudioUpload {
    pub audio: Bytes,
    /// Client-side filename, logged only
    pub filename: Option<String>,
    /// Declared part content type, logged only; uploads are always sent as webm
    pub content_type: Option<String>,
}

/// Successful transcription
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    pub transcription: String,
}

/// Result of the Deepgram credential check
///
/// Both variants are sent with HTTP 200.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DiagnosticResponse {
    Valid { status: &'static str },
    Invalid(ErrorBody),
}
