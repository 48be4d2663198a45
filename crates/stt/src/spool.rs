use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::SttError;

/// An upload spooled to a uniquely named temporary file
///
/// The file carries the upload's extension so decoders can probe by suffix,
/// and is removed when the guard drops, on success and on every error path
/// alike.
pub(crate) struct SpooledAudio {
    file: NamedTempFile,
}

impl SpooledAudio {
    pub async fn write(audio: &[u8], extension: &str) -> Result<Self, SttError> {
        let file = tempfile::Builder::new()
            .prefix("sotto-")
            .suffix(&format!(".{extension}"))
            .tempfile()?;

        tokio::fs::write(file.path(), audio).await?;

        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
