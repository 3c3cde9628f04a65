#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod genius;
mod query;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use serde_json::Value;
use songmatch_core::{ExtractPayload, PayloadRejection};

pub use error::{LyricsError, Result};
pub use genius::GeniusClient;
pub use query::{MAX_QUERY_WORDS, search_query};
pub use types::{SearchSongRequest, SongSummary};

/// Build the Genius client from configuration
pub fn build_server(config: &songmatch_config::Config, client: reqwest::Client) -> Arc<GeniusClient> {
    Arc::new(GeniusClient::new(&config.genius, client))
}

/// Create the endpoint router for lyrics search
pub fn endpoint_router() -> Router<Arc<GeniusClient>> {
    Router::new().route("/api/search-song", post(search_song))
}

/// Handle lyrics search requests, answering with the best hit verbatim
async fn search_song(
    State(genius): State<Arc<GeniusClient>>,
    payload: std::result::Result<ExtractPayload<SearchSongRequest>, PayloadRejection>,
) -> Result<Json<Value>> {
    let lyrics = match payload {
        Ok(ExtractPayload(request)) => request.lyrics.unwrap_or_default(),
        Err(rejection) => {
            tracing::debug!("unusable lyrics payload: {rejection}");
            String::new()
        }
    };

    let song = genius.search(&lyrics).await?;

    tracing::debug!("lyrics search matched a song");

    Ok(Json(song))
}
