use std::{net::SocketAddr, path::PathBuf, time::Duration};

use serde::Deserialize;

use crate::cors::CorsConfig;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub listen_address: Option<SocketAddr>,
    /// Timeout in seconds for outbound upstream calls, unbounded when unset
    #[serde(default)]
    pub upstream_timeout: Option<u64>,
    /// Directory for transient audio files, the OS temp dir when unset
    #[serde(default)]
    pub scratch_dir: Option<PathBuf>,
    #[serde(default)]
    pub health: HealthConfig,
    #[serde(default)]
    pub cors: Option<CorsConfig>,
}

impl ServerConfig {
    pub fn upstream_timeout_duration(&self) -> Option<Duration> {
        self.upstream_timeout.map(Duration::from_secs)
    }
}

/// Liveness route, mounted at `/health` unless configured otherwise
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HealthConfig {
    pub enabled: bool,
    pub path: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/health".to_owned(),
        }
    }
}
