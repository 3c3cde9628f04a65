use std::path::PathBuf;

use crate::{
    deepgram::DeepgramClient,
    error::Result,
    scratch::ScratchFile,
    types::{AudioUpload, DiagnosticResponse, TranscriptionResponse},
};

/// Transcription server holding the Deepgram client and scratch location
pub struct Server {
    deepgram: DeepgramClient,
    scratch_dir: Option<PathBuf>,
}

impl Server {
    pub fn new(config: &songmatch_config::Config, client: reqwest::Client) -> Self {
        Self {
            deepgram: DeepgramClient::new(&config.deepgram, client),
            scratch_dir: config.server.scratch_dir.clone(),
        }
    }

    /// Stage the upload on disk, transcribe it, then discard it
    pub(crate) async fn transcribe(&self, upload: AudioUpload) -> Result<TranscriptionResponse> {
        let scratch = ScratchFile::write(self.scratch_dir.as_deref(), &upload.audio).await?;

        let transcription = self.deepgram.transcribe(&scratch).await?;

        Ok(TranscriptionResponse { transcription })
    }

    pub(crate) async fn check_credentials(&self) -> DiagnosticResponse {
        self.deepgram.check_credentials().await
    }
}
