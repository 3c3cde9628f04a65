//! Mock Deepgram, Genius and Spotify APIs behind one listener
//!
//! Each upstream answers with a canned status and body and counts the calls
//! it receives, so tests can assert that validation failures never leave the
//! relay.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

/// Status and body returned by one mocked endpoint
#[derive(Clone)]
pub struct Canned {
    pub status: u16,
    pub body: Value,
    /// Sent verbatim as `application/json` instead of `body`
    pub raw: Option<&'static str>,
}

impl Canned {
    pub fn ok(body: Value) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: Value) -> Self {
        Self { status, body, raw: None }
    }

    /// Malformed payload labelled as JSON
    pub fn raw(status: u16, raw: &'static str) -> Self {
        Self {
            status,
            body: Value::Null,
            raw: Some(raw),
        }
    }
}

/// Responses served by the mock, one per upstream endpoint
#[derive(Clone)]
pub struct Responses {
    pub listen: Canned,
    pub projects: Canned,
    pub genius_search: Canned,
    pub spotify_token: Canned,
    pub spotify_search: Canned,
}

impl Default for Responses {
    fn default() -> Self {
        Self {
            listen: Canned::ok(json!({
                "metadata": {"request_id": "req-1"},
                "results": {"channels": [{"alternatives": [
                    {"transcript": "is this the real life", "confidence": 0.97}
                ]}]}
            })),
            projects: Canned::ok(json!({"projects": []})),
            genius_search: Canned::ok(json!({
                "meta": {"status": 200},
                "response": {"hits": [{"type": "song", "result": {
                    "id": 1063,
                    "title": "Bohemian Rhapsody",
                    "url": "https://genius.com/Queen-bohemian-rhapsody-lyrics",
                    "primary_artist": {"name": "Queen"}
                }}]}
            })),
            spotify_token: Canned::ok(json!({
                "access_token": "spotify-test-token",
                "token_type": "Bearer",
                "expires_in": 3600
            })),
            spotify_search: Canned::ok(json!({"tracks": {"items": [{
                "id": "7tFiyTwD0nx5a1eklYtX2J",
                "name": "Bohemian Rhapsody",
                "external_urls": {"spotify": "https://open.spotify.com/track/7tFiyTwD0nx5a1eklYtX2J"},
                "artists": [{"name": "Queen"}],
                "album": {
                    "name": "A Night At The Opera",
                    "release_date": "1975-11-21",
                    "images": [
                        {"url": "https://i.scdn.co/image/large", "height": 640, "width": 640},
                        {"url": "https://i.scdn.co/image/small", "height": 64, "width": 64}
                    ]
                }
            }]}})),
        }
    }
}

/// Request details captured by the mock
#[derive(Default)]
struct Captured {
    listen_query: Option<HashMap<String, String>>,
    listen_headers: Option<HeaderMap>,
    listen_body_len: Option<usize>,
    genius_query: Option<String>,
    genius_authorization: Option<String>,
    spotify_token_authorization: Option<String>,
    spotify_token_form: Option<String>,
    spotify_query: Option<HashMap<String, String>>,
    spotify_search_authorization: Option<String>,
}

struct MockState {
    responses: Responses,
    listen_count: AtomicU32,
    projects_count: AtomicU32,
    genius_count: AtomicU32,
    token_count: AtomicU32,
    spotify_search_count: AtomicU32,
    captured: Mutex<Captured>,
}

/// Mock upstream server
pub struct MockUpstream {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

impl MockUpstream {
    /// Start with realistic default responses
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_with(Responses::default()).await
    }

    /// Start with custom responses
    pub async fn start_with(responses: Responses) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            responses,
            listen_count: AtomicU32::new(0),
            projects_count: AtomicU32::new(0),
            genius_count: AtomicU32::new(0),
            token_count: AtomicU32::new(0),
            spotify_search_count: AtomicU32::new(0),
            captured: Mutex::new(Captured::default()),
        });

        let app = Router::new()
            .route("/deepgram/v1/listen", routing::post(handle_listen))
            .route("/deepgram/v1/projects", routing::get(handle_projects))
            .route("/genius/search", routing::get(handle_genius_search))
            .route("/spotify-accounts/api/token", routing::post(handle_spotify_token))
            .route("/spotify/v1/search", routing::get(handle_spotify_search))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Absolute URL for a path on the mock
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub fn listen_count(&self) -> u32 {
        self.state.listen_count.load(Ordering::Relaxed)
    }

    pub fn projects_count(&self) -> u32 {
        self.state.projects_count.load(Ordering::Relaxed)
    }

    pub fn genius_count(&self) -> u32 {
        self.state.genius_count.load(Ordering::Relaxed)
    }

    pub fn token_count(&self) -> u32 {
        self.state.token_count.load(Ordering::Relaxed)
    }

    pub fn spotify_search_count(&self) -> u32 {
        self.state.spotify_search_count.load(Ordering::Relaxed)
    }

    /// Total calls across every upstream
    pub fn total_calls(&self) -> u32 {
        self.listen_count() + self.projects_count() + self.genius_count() + self.token_count() + self.spotify_search_count()
    }

    pub fn listen_query(&self) -> HashMap<String, String> {
        self.captured().listen_query.clone().unwrap_or_default()
    }

    /// Header value seen on the last `/listen` call
    pub fn listen_header(&self, name: &str) -> Option<String> {
        self.captured()
            .listen_headers
            .as_ref()
            .and_then(|headers| headers.get(name))
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    }

    pub fn listen_body_len(&self) -> Option<usize> {
        self.captured().listen_body_len
    }

    pub fn genius_query(&self) -> Option<String> {
        self.captured().genius_query.clone()
    }

    pub fn genius_authorization(&self) -> Option<String> {
        self.captured().genius_authorization.clone()
    }

    pub fn spotify_token_authorization(&self) -> Option<String> {
        self.captured().spotify_token_authorization.clone()
    }

    pub fn spotify_token_form(&self) -> Option<String> {
        self.captured().spotify_token_form.clone()
    }

    pub fn spotify_query(&self) -> HashMap<String, String> {
        self.captured().spotify_query.clone().unwrap_or_default()
    }

    pub fn spotify_search_authorization(&self) -> Option<String> {
        self.captured().spotify_search_authorization.clone()
    }

    fn captured(&self) -> std::sync::MutexGuard<'_, Captured> {
        self.state.captured.lock().unwrap()
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

fn respond(canned: &Canned) -> Response {
    let status = StatusCode::from_u16(canned.status).unwrap();
    match canned.raw {
        Some(raw) => (status, [("content-type", "application/json")], raw).into_response(),
        None => (status, Json(canned.body.clone())).into_response(),
    }
}

fn authorization(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

async fn handle_listen(
    State(state): State<Arc<MockState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.listen_count.fetch_add(1, Ordering::Relaxed);
    {
        let mut captured = state.captured.lock().unwrap();
        captured.listen_query = Some(query);
        captured.listen_headers = Some(headers);
        captured.listen_body_len = Some(body.len());
    }
    respond(&state.responses.listen)
}

async fn handle_projects(State(state): State<Arc<MockState>>) -> Response {
    state.projects_count.fetch_add(1, Ordering::Relaxed);
    respond(&state.responses.projects)
}

async fn handle_genius_search(
    State(state): State<Arc<MockState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    state.genius_count.fetch_add(1, Ordering::Relaxed);
    {
        let mut captured = state.captured.lock().unwrap();
        captured.genius_query = query.get("q").cloned();
        captured.genius_authorization = authorization(&headers);
    }
    respond(&state.responses.genius_search)
}

async fn handle_spotify_token(State(state): State<Arc<MockState>>, headers: HeaderMap, body: String) -> Response {
    state.token_count.fetch_add(1, Ordering::Relaxed);
    {
        let mut captured = state.captured.lock().unwrap();
        captured.spotify_token_authorization = authorization(&headers);
        captured.spotify_token_form = Some(body);
    }
    respond(&state.responses.spotify_token)
}

async fn handle_spotify_search(
    State(state): State<Arc<MockState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    state.spotify_search_count.fetch_add(1, Ordering::Relaxed);
    {
        let mut captured = state.captured.lock().unwrap();
        captured.spotify_query = Some(query);
        captured.spotify_search_authorization = authorization(&headers);
    }
    respond(&state.responses.spotify_search)
}
