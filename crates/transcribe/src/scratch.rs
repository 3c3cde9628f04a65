use std::{io, path::Path};

use tempfile::NamedTempFile;

/// Container format the client records in
const AUDIO_SUFFIX: &str = ".webm";

/// Uploaded audio staged on disk for the length of one upstream call
///
/// The file is removed when this value is dropped, which covers early
/// returns and unwinding as well as the success path.
pub(crate) struct ScratchFile {
    file: NamedTempFile,
}

impl ScratchFile {
    /// Create a uniquely named file in `dir` (or the OS temp dir) holding `audio`
    pub async fn write(dir: Option<&Path>, audio: &[u8]) -> io::Result<Self> {
        let dir = dir.map(Path::to_path_buf);

        let file = tokio::task::spawn_blocking(move || {
            let mut builder = tempfile::Builder::new();
            builder.prefix("songmatch-").suffix(AUDIO_SUFFIX);

            match dir {
                Some(dir) => builder.tempfile_in(dir),
                None => builder.tempfile(),
            }
        })
        .await
        .map_err(io::Error::other)??;

        tokio::fs::write(file.path(), audio).await?;

        tracing::debug!(path = %file.path().display(), bytes = audio.len(), "staged audio");

        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Open a fresh read handle for streaming the contents upstream
    pub async fn open(&self) -> io::Result<tokio::fs::File> {
        tokio::fs::File::open(self.path()).await
    }
}
