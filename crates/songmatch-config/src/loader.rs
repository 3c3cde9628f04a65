use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or [`Config::parse`] fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        tracing::debug!(path = %path.display(), "read configuration file");

        Self::parse(&raw)
    }

    /// Parse configuration text
    ///
    /// Expands `{{ env.VAR }}` placeholders, deserializes, then validates.
    ///
    /// # Errors
    ///
    /// Returns an error if placeholder expansion, TOML parsing, or
    /// validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// Credentials are deliberately not checked here. A missing key shows up
    /// as an upstream authentication failure on first use.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_server()?;
        Ok(())
    }

    fn validate_server(&self) -> anyhow::Result<()> {
        let server = &self.server;

        if server.health.enabled && !server.health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/': `{}`", server.health.path);
        }

        if server.upstream_timeout == Some(0) {
            anyhow::bail!("server.upstream_timeout must be greater than 0 when set");
        }

        if let Some(ref dir) = server.scratch_dir
            && !dir.is_dir()
        {
            anyhow::bail!("server.scratch_dir is not a directory: {}", dir.display());
        }

        Ok(())
    }
}
