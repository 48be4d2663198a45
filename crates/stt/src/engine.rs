//! Speech engine abstraction
//!
//! The HTTP layer only ever talks to a [`SpeechEngine`], so tests can
//! script one and alternative backends can slot in without touching the
//! request path.

#[cfg(feature = "whisper")]
pub(crate) mod audio;
#[cfg(feature = "whisper")]
mod whisper;

use std::path::Path;

use thiserror::Error;

#[cfg(feature = "whisper")]
pub use whisper::WhisperEngine;

/// The engine's single failure mode: a message describing what went wrong
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct EngineError(String);

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Decoding parameters forwarded to the engine on every request
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Beam width for beam-search decoding
    pub beam_size: u32,
    /// Voice-activity filtering
    pub vad: VadFilter,
}

impl DecodeOptions {
    pub fn from_config(config: &sotto_config::DecodeConfig) -> Self {
        Self {
            beam_size: config.beam_size,
            vad: VadFilter {
                threshold: config.vad.threshold,
                min_speech_ms: config.vad.min_speech_ms,
            },
        }
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::from_config(&sotto_config::DecodeConfig::default())
    }
}

/// Voice-activity filter parameters
#[derive(Debug, Clone)]
pub struct VadFilter {
    /// Speech probability threshold
    pub threshold: f32,
    /// Speech runs shorter than this are discarded
    pub min_speech_ms: u32,
}

/// A timed piece of transcribed speech
#[derive(Debug, Clone)]
pub struct Segment {
    pub start_secs: f32,
    pub end_secs: f32,
    pub text: String,
}

/// Raw engine output before aggregation
#[derive(Debug, Clone)]
pub struct Transcript {
    /// Language the engine decoded with: the caller's hint when one was
    /// supplied, otherwise the detected language
    pub language: String,
    pub segments: Vec<Segment>,
}

/// A speech-to-text engine operating on a spooled audio file
///
/// `transcribe` blocks for the duration of inference; callers run it on a
/// blocking thread.
pub trait SpeechEngine: Send + Sync {
    fn transcribe(
        &self,
        audio: &Path,
        language: Option<&str>,
        decode: &DecodeOptions,
    ) -> Result<Transcript, EngineError>;
}
