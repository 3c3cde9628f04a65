use std::time::Duration;

use reqwest::Client;

/// Build the outbound HTTP client shared by every upstream call
///
/// One client is created at startup and cloned into each feature server, so
/// all endpoints share its connection pool. Outbound calls have no timeout
/// unless one is given.
pub fn http_client(timeout: Option<Duration>) -> reqwest::Result<Client> {
    let mut builder = Client::builder()
        .pool_idle_timeout(Some(Duration::from_secs(30)))
        .tcp_nodelay(true)
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .user_agent(concat!("songmatch/", env!("CARGO_PKG_VERSION")));

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder.build()
}
