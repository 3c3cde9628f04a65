#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]

mod deepgram;
mod error;
mod request;
mod scratch;
mod server;
mod types;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    routing::{get, post},
};

pub use error::{Result, TranscribeError};
pub use server::Server;
pub use types::{AudioUpload, DiagnosticResponse, TranscriptionResponse};
use request::{AUDIO_BODY_LIMIT_BYTES, ExtractAudio};

/// Build the transcription server from configuration
pub fn build_server(config: &songmatch_config::Config, client: reqwest::Client) -> Arc<Server> {
    Arc::new(Server::new(config, client))
}

/// Create the endpoint router for transcription and the Deepgram key check
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new()
        .route(
            "/api/transcribe",
            post(transcribe).layer(DefaultBodyLimit::max(AUDIO_BODY_LIMIT_BYTES)),
        )
        .route("/api/test-deepgram", get(test_deepgram))
}

/// Handle audio transcription requests
async fn transcribe(
    State(server): State<Arc<Server>>,
    ExtractAudio(upload): ExtractAudio,
) -> Result<Json<TranscriptionResponse>> {
    tracing::debug!(
        bytes = upload.audio.len(),
        filename = upload.filename.as_deref().unwrap_or("-"),
        content_type = upload.content_type.as_deref().unwrap_or("-"),
        "transcription handler called"
    );

    let response = server.transcribe(upload).await?;

    tracing::debug!("transcription complete");

    Ok(Json(response))
}

/// Check the configured Deepgram key, always answering 200
async fn test_deepgram(State(server): State<Arc<Server>>) -> Json<DiagnosticResponse> {
    Json(server.check_credentials().await)
}
