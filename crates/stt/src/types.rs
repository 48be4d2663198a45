use serde::{Deserialize, Serialize};

/// Transcription response returned to the caller
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    /// Language the audio was decoded as (ISO 639-1)
    pub language: String,
    /// Transcribed text, segments joined in order
    pub text: String,
}
