use reqwest::{Client, header::AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use songmatch_config::GeniusConfig;
use songmatch_core::Lookup;

use crate::{
    error::{LyricsError, Result},
    query::search_query,
};

const DEFAULT_GENIUS_API_URL: &str = "https://api.genius.com";

/// Genius search API client
pub struct GeniusClient {
    client: Client,
    base_url: String,
    access_token: Option<SecretString>,
}

impl GeniusClient {
    pub fn new(config: &GeniusConfig, client: Client) -> Self {
        let base_url = config
            .base_url
            .as_ref()
            .map_or(DEFAULT_GENIUS_API_URL, url::Url::as_str)
            .trim_end_matches('/')
            .to_owned();

        Self {
            client,
            base_url,
            access_token: config.access_token.clone(),
        }
    }

    /// Whether a non-empty access token is configured
    pub fn has_access_token(&self) -> bool {
        self.access_token
            .as_ref()
            .is_some_and(|token| !token.expose_secret().is_empty())
    }

    /// Search by lyrics and return the top hit's song object
    ///
    /// Genius ranks hits by relevance, so the first hit is taken as the
    /// match without further scoring.
    pub async fn search(&self, lyrics: &str) -> Result<Value> {
        let query = search_query(lyrics).ok_or(LyricsError::MissingLyrics)?;
        let url = format!("{}/search", self.base_url);
        let token = self.access_token.as_ref().map_or("", |token| token.expose_secret());

        tracing::debug!(query = %query, "Genius search request");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .query(&[("q", query.as_str())])
            .send()
            .await
            .map_err(|e| LyricsError::Request(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            return Err(LyricsError::Upstream { status });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| LyricsError::Request(e.to_string()))?;

        first_result(&body).cloned().ok_or(LyricsError::NoMatch)
    }
}

/// `response.hits[0].result`, when it is an object
fn first_result(body: &Value) -> Option<&Value> {
    Lookup::new(body)
        .key("response")
        .key("hits")
        .first()
        .key("result")
        .value()
        .filter(|result| result.is_object())
}
