//! Credentials and endpoints for the three upstream APIs
//!
//! `base_url` fields are optional overrides; each client crate owns its
//! production default.

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Deepgram speech-to-text
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeepgramConfig {
    /// Sent as `Authorization: Token <api_key>`
    #[serde(default)]
    pub api_key: Option<SecretString>,
    #[serde(default)]
    pub base_url: Option<Url>,
}

/// Genius lyrics search
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeniusConfig {
    /// Sent as `Authorization: Bearer <access_token>`
    #[serde(default)]
    pub access_token: Option<SecretString>,
    #[serde(default)]
    pub base_url: Option<Url>,
}

/// Spotify catalog (client-credentials grant)
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpotifyConfig {
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<SecretString>,
    /// Token endpoint for the client-credentials exchange
    #[serde(default)]
    pub token_url: Option<Url>,
    /// Web API base, `/search` is appended
    #[serde(default)]
    pub base_url: Option<Url>,
}
