use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Body of `POST /api/search-spotify`
#[derive(Debug, Default, Deserialize)]
pub struct SpotifyLookupRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
}

impl SpotifyLookupRequest {
    /// Both fields, as sent, when neither is absent or blank
    pub fn validate(&self) -> Result<(&str, &str)> {
        match (present(self.title.as_deref()), present(self.artist.as_deref())) {
            (Some(title), Some(artist)) => Ok((title, artist)),
            _ => Err(CatalogError::MissingFields),
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Flattened view of the best-matching Spotify track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotifyTrack {
    pub track_id: String,
    pub track_url: String,
    pub name: String,
    /// First credited artist
    pub artist: String,
    pub album: String,
    /// First album image, null when the album has none
    pub album_art: Option<String>,
    #[serde(rename = "release_date")]
    pub release_date: Option<String>,
}
