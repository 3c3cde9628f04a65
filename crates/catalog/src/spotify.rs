use base64::{Engine as _, engine::general_purpose::STANDARD};
use reqwest::{Client, header::AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use songmatch_config::SpotifyConfig;

use crate::{
    error::{CatalogError, Result},
    types::SpotifyTrack,
};

const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// Spotify Web API client using the client-credentials grant
///
/// A token is fetched for every lookup and dropped afterwards.
pub struct SpotifyClient {
    client: Client,
    token_url: String,
    base_url: String,
    client_id: String,
    client_secret: Option<SecretString>,
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    tracks: Option<TrackPage>,
}

#[derive(Deserialize)]
struct TrackPage {
    #[serde(default)]
    items: Option<Vec<TrackObject>>,
}

#[derive(Deserialize)]
struct TrackObject {
    id: Option<String>,
    name: Option<String>,
    #[serde(default)]
    external_urls: Option<ExternalUrls>,
    #[serde(default)]
    artists: Option<Vec<ArtistObject>>,
    #[serde(default)]
    album: Option<AlbumObject>,
}

#[derive(Deserialize)]
struct ExternalUrls {
    spotify: Option<String>,
}

#[derive(Deserialize)]
struct ArtistObject {
    name: Option<String>,
}

#[derive(Deserialize)]
struct AlbumObject {
    name: Option<String>,
    #[serde(default)]
    images: Option<Vec<ImageObject>>,
    #[serde(default)]
    release_date: Option<String>,
}

#[derive(Deserialize)]
struct ImageObject {
    url: Option<String>,
}

impl SearchResponse {
    fn into_first_track(self) -> Option<TrackObject> {
        self.tracks?.items?.into_iter().next()
    }
}

impl TryFrom<TrackObject> for SpotifyTrack {
    type Error = CatalogError;

    fn try_from(track: TrackObject) -> Result<Self> {
        let missing = |field: &str| CatalogError::Upstream(format!("Spotify track is missing `{field}`"));

        let album = track.album.ok_or_else(|| missing("album"))?;

        let album_art = album
            .images
            .and_then(|images| images.into_iter().next())
            .and_then(|image| image.url);

        let artist = track
            .artists
            .and_then(|artists| artists.into_iter().next())
            .and_then(|artist| artist.name)
            .ok_or_else(|| missing("artists[0].name"))?;

        Ok(Self {
            track_id: track.id.ok_or_else(|| missing("id"))?,
            track_url: track
                .external_urls
                .and_then(|urls| urls.spotify)
                .ok_or_else(|| missing("external_urls.spotify"))?,
            name: track.name.ok_or_else(|| missing("name"))?,
            artist,
            album: album.name.ok_or_else(|| missing("album.name"))?,
            album_art,
            release_date: album.release_date,
        })
    }
}

/// `Basic` credentials for the token endpoint
fn basic_credentials(client_id: &str, client_secret: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{client_id}:{client_secret}")))
}

/// Free-text field search, inserted as typed by the client
fn track_query(title: &str, artist: &str) -> String {
    format!("track:{title} artist:{artist}")
}

impl SpotifyClient {
    pub fn new(config: &SpotifyConfig, client: Client) -> Self {
        let token_url = config
            .token_url
            .as_ref()
            .map_or(DEFAULT_SPOTIFY_TOKEN_URL, url::Url::as_str)
            .to_owned();

        let base_url = config
            .base_url
            .as_ref()
            .map_or(DEFAULT_SPOTIFY_API_URL, url::Url::as_str)
            .trim_end_matches('/')
            .to_owned();

        Self {
            client,
            token_url,
            base_url,
            client_id: config.client_id.clone().unwrap_or_default(),
            client_secret: config.client_secret.clone(),
        }
    }

    /// Exchange credentials for a token, then search for the track
    pub async fn find_track(&self, title: &str, artist: &str) -> Result<SpotifyTrack> {
        let token = self.access_token().await?;

        let track = self
            .search(&token, title, artist)
            .await?
            .into_first_track()
            .ok_or(CatalogError::NoMatch)?;

        SpotifyTrack::try_from(track)
    }

    async fn access_token(&self) -> Result<String> {
        let secret = self.client_secret.as_ref().map_or("", |secret| secret.expose_secret());

        let response = self
            .client
            .post(&self.token_url)
            .header(AUTHORIZATION, basic_credentials(&self.client_id, secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| CatalogError::Upstream(e.to_string()))?;

        let status = response.status();

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::Upstream(e.to_string()))?;

        match token.access_token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => {
                tracing::error!(%status, "Spotify token exchange returned no access token");
                Err(CatalogError::Auth)
            }
        }
    }

    async fn search(&self, token: &str, title: &str, artist: &str) -> Result<SearchResponse> {
        let url = format!("{}/search", self.base_url);
        let query = track_query(title, artist);

        tracing::debug!(query = %query, "Spotify search request");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .query(&[("q", query.as_str()), ("type", "track"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| CatalogError::Upstream(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Upstream(format!(
                "Spotify search failed with status code {}: {body}",
                status.as_u16()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| CatalogError::Upstream(e.to_string()))
    }
}
