use axum::{
    body::Body,
    extract::{FromRequest, Multipart},
};

use crate::{error::TranscribeError, types::AudioUpload};

/// Multipart field carrying the recording
const AUDIO_FIELD: &str = "audio";

/// Body limit for audio uploads (32 MiB)
pub(crate) const AUDIO_BODY_LIMIT_BYTES: usize = 32 << 20;

/// Extractor for the `audio` attachment of a multipart form
///
/// Any request without a non-empty `audio` part, including one that is not
/// multipart at all, is rejected as [`TranscribeError::MissingAudio`].
pub struct ExtractAudio(pub AudioUpload);

impl<S> FromRequest<S> for ExtractAudio
where
    S: Send + Sync,
{
    type Rejection = TranscribeError;

    async fn from_request(request: http::Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(request, state).await.map_err(|rejection| {
            tracing::debug!("request is not a multipart upload: {rejection}");
            TranscribeError::MissingAudio
        })?;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| TranscribeError::InvalidUpload(e.body_text()))?
        {
            if field.name() != Some(AUDIO_FIELD) {
                continue;
            }

            let filename = field.file_name().map(str::to_owned);
            let content_type = field.content_type().map(str::to_owned);
            let audio = field
                .bytes()
                .await
                .map_err(|e| TranscribeError::InvalidUpload(e.body_text()))?;

            if audio.is_empty() {
                return Err(TranscribeError::MissingAudio);
            }

            return Ok(Self(AudioUpload {
                audio,
                filename,
                content_type,
            }));
        }

        Err(TranscribeError::MissingAudio)
    }
}
