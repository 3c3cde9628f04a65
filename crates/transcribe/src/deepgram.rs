use http::StatusCode;
use reqwest::{
    Client,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use songmatch_config::DeepgramConfig;
use songmatch_core::{ErrorBody, Lookup};

use crate::{
    error::{Result, TranscribeError},
    scratch::ScratchFile,
    types::DiagnosticResponse,
};

const DEFAULT_DEEPGRAM_API_URL: &str = "https://api.deepgram.com/v1";

/// Content type declared for every upload, whatever the client sent
const AUDIO_CONTENT_TYPE: &str = "audio/webm";

const LISTEN_QUERY: [(&str, &str); 3] = [("model", "nova-2"), ("language", "en"), ("detect_language", "false")];

/// Deepgram pre-recorded transcription client
pub(crate) struct DeepgramClient {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
}

impl DeepgramClient {
    pub fn new(config: &DeepgramConfig, client: Client) -> Self {
        let base_url = config
            .base_url
            .as_ref()
            .map_or(DEFAULT_DEEPGRAM_API_URL, url::Url::as_str)
            .trim_end_matches('/')
            .to_owned();

        Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
        }
    }

    fn authorization(&self) -> String {
        let key = self.api_key.as_ref().map_or("", |key| key.expose_secret());
        format!("Token {key}")
    }

    /// Send the staged audio to `/listen` and return the first transcript
    pub async fn transcribe(&self, audio: &ScratchFile) -> Result<String> {
        let url = format!("{}/listen", self.base_url);
        let body = audio.open().await?;

        let response = self
            .client
            .post(&url)
            .query(&LISTEN_QUERY[..])
            .header(AUTHORIZATION, self.authorization())
            .header(CONTENT_TYPE, AUDIO_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| TranscribeError::Connection(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TranscribeError::Upstream { status, message });
        }

        let result: Value = response
            .json()
            .await
            .map_err(|e| TranscribeError::InvalidResponse(e.to_string()))?;

        extract_transcript(&result)
            .map(str::to_owned)
            .ok_or(TranscribeError::EmptyTranscript)
    }

    /// Probe the project listing to see whether the key is accepted
    pub async fn check_credentials(&self) -> DiagnosticResponse {
        let url = format!("{}/projects", self.base_url);

        let response = match self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.authorization())
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return DiagnosticResponse::Invalid(ErrorBody::new(e.to_string())),
        };

        if response.status() == StatusCode::OK {
            return DiagnosticResponse::Valid { status: "valid" };
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!("Deepgram credential check failed: {body}");

        DiagnosticResponse::Invalid(ErrorBody::new(format!("Deepgram API error: {body}")))
    }
}

/// `results.channels[0].alternatives[0].transcript`, if present and non-empty
fn extract_transcript(result: &Value) -> Option<&str> {
    Lookup::new(result)
        .key("results")
        .key("channels")
        .first()
        .key("alternatives")
        .first()
        .key("transcript")
        .as_str()
        .filter(|transcript| !transcript.is_empty())
}
