#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
mod loader;
pub mod server;
pub mod telemetry;
pub mod upstream;

use serde::Deserialize;

pub use cors::*;
pub use server::*;
pub use telemetry::{ExportProtocol, ExporterConfig, TelemetryConfig, TracingConfig};
pub use upstream::*;

/// Top-level songmatch configuration
///
/// Loaded once at startup and handed to each feature server. Nothing reads
/// credentials from the process environment after this point.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Deepgram speech-to-text credentials
    #[serde(default)]
    pub deepgram: DeepgramConfig,
    /// Genius lyrics search credentials
    #[serde(default)]
    pub genius: GeniusConfig,
    /// Spotify catalog credentials
    #[serde(default)]
    pub spotify: SpotifyConfig,
    /// Logging and trace export
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
