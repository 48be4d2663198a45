use std::sync::Arc;

use crate::{
    engine::{DecodeOptions, Segment, SpeechEngine},
    error::{Result, SttError},
    media,
    request::TranscriptionRequest,
    spool::SpooledAudio,
    types::TranscriptionResponse,
};

/// Transcription server: one engine plus the decode options applied to
/// every request
pub struct Server {
    engine: Arc<dyn SpeechEngine>,
    decode: DecodeOptions,
}

impl Server {
    pub fn new(engine: Arc<dyn SpeechEngine>, decode: DecodeOptions) -> Self {
        Self { engine, decode }
    }

    /// Validate, spool, and transcribe one upload
    ///
    /// The spooled file lives exactly as long as this call; the guard
    /// removes it on success and on every error path alike.
    pub(crate) async fn transcribe(&self, request: TranscriptionRequest) -> Result<TranscriptionResponse> {
        let extension = media::audio_extension(&request.filename)?;

        let spool = SpooledAudio::write(&request.audio, &extension).await?;

        tracing::debug!(file = %request.filename, spooled = %spool.path().display(), "upload spooled");

        let engine = Arc::clone(&self.engine);
        let decode = self.decode.clone();
        let language = request.language;
        let audio_path = spool.path().to_path_buf();

        let transcript =
            tokio::task::spawn_blocking(move || engine.transcribe(&audio_path, language.as_deref(), &decode))
                .await
                .map_err(|e| SttError::Transcription(format!("inference task failed: {e}")))??;

        let text = collapse_segments(&transcript.segments);

        Ok(TranscriptionResponse {
            language: transcript.language,
            text,
        })
    }
}

/// Join segment texts with single spaces, trimming each and dropping
/// empties
fn collapse_segments(segments: &[Segment]) -> String {
    let mut text = String::new();

    for segment in segments {
        let trimmed = segment.text.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(trimmed);
    }

    text
}
