#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod spotify;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use songmatch_core::{ExtractPayload, PayloadRejection};

pub use error::{CatalogError, Result};
pub use spotify::SpotifyClient;
pub use types::{SpotifyLookupRequest, SpotifyTrack};

/// Build the Spotify client from configuration
pub fn build_server(config: &songmatch_config::Config, client: reqwest::Client) -> Arc<SpotifyClient> {
    Arc::new(SpotifyClient::new(&config.spotify, client))
}

/// Create the endpoint router for catalog lookups
pub fn endpoint_router() -> Router<Arc<SpotifyClient>> {
    Router::new().route("/api/search-spotify", post(search_spotify))
}

/// Handle track lookups by title and artist
async fn search_spotify(
    State(spotify): State<Arc<SpotifyClient>>,
    payload: std::result::Result<ExtractPayload<SpotifyLookupRequest>, PayloadRejection>,
) -> Result<Json<SpotifyTrack>> {
    let request = match payload {
        Ok(ExtractPayload(request)) => request,
        Err(rejection) => {
            tracing::debug!("unusable lookup payload: {rejection}");
            SpotifyLookupRequest::default()
        }
    };

    let (title, artist) = request.validate()?;

    let track = spotify.find_track(title, artist).await?;

    tracing::debug!(track_id = %track.track_id, "Spotify lookup matched a track");

    Ok(Json(track))
}
