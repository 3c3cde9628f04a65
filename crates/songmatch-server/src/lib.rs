mod cors;

use std::net::SocketAddr;

use axum::Router;
use songmatch_config::Config;
use tower_http::trace::TraceLayer;

/// Port existing front-end clients expect
const DEFAULT_PORT: u16 = 5000;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// One outbound HTTP client is created here and shared by every
    /// upstream integration.
    ///
    /// # Errors
    ///
    /// Returns an error if the outbound HTTP client cannot be built
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)));

        let client = songmatch_core::http_client(config.server.upstream_timeout_duration())
            .map_err(|e| anyhow::anyhow!("failed to build upstream HTTP client: {e}"))?;

        let transcribe_state = transcribe::build_server(config, client.clone());
        let lyrics_state = lyrics::build_server(config, client.clone());
        let catalog_state = catalog::build_server(config, client);

        let mut app = Router::new();

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health));
        }

        // Transcription and Deepgram key check
        app = app.merge(transcribe::endpoint_router().with_state(transcribe_state));

        // Lyrics search
        app = app.merge(lyrics::endpoint_router().with_state(lyrics_state));

        // Spotify lookup
        app = app.merge(catalog::endpoint_router().with_state(catalog_state));

        app = app.layer(TraceLayer::new_for_http());

        if let Some(ref cors_config) = config.server.cors {
            app = app.layer(cors::cors_layer(cors_config));
        }

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Override the configured listen address
    #[must_use]
    pub const fn with_listen_address(mut self, listen_address: SocketAddr) -> Self {
        self.listen_address = listen_address;
        self
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

/// Liveness probe, never touches an upstream
async fn health() -> &'static str {
    "ok"
}
