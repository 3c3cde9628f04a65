//! Programmatic configuration builder for integration tests

use std::{net::SocketAddr, path::Path};

use secrecy::SecretString;
use songmatch_config::{Config, CorsConfig, DeepgramConfig, GeniusConfig, ServerConfig, SpotifyConfig};

use super::mock_upstream::MockUpstream;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Point every upstream at the mock, with test credentials
    pub fn new(mock: &MockUpstream) -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    ..ServerConfig::default()
                },
                deepgram: DeepgramConfig {
                    api_key: Some(SecretString::from("deepgram-test-key")),
                    base_url: Some(mock.url("/deepgram/v1").parse().expect("valid URL")),
                },
                genius: GeniusConfig {
                    access_token: Some(SecretString::from("genius-test-token")),
                    base_url: Some(mock.url("/genius").parse().expect("valid URL")),
                },
                spotify: SpotifyConfig {
                    client_id: Some("client-id".to_owned()),
                    client_secret: Some(SecretString::from("client-secret")),
                    token_url: Some(mock.url("/spotify-accounts/api/token").parse().expect("valid URL")),
                    base_url: Some(mock.url("/spotify/v1").parse().expect("valid URL")),
                },
                telemetry: None,
            },
        }
    }

    /// Stage uploads in the given directory
    pub fn with_scratch_dir(mut self, dir: &Path) -> Self {
        self.config.server.scratch_dir = Some(dir.to_path_buf());
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = Some(config);
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
