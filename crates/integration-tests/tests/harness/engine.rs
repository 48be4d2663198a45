//! Scripted speech engine for driving the HTTP surface without a model

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use stt::engine::{DecodeOptions, EngineError, Segment, SpeechEngine, Transcript};

/// One recorded `transcribe` invocation
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// Path of the spooled audio file the engine was pointed at
    pub audio_path: PathBuf,
    /// Bytes read back from the spooled file
    pub audio_bytes: Vec<u8>,
    /// Language hint forwarded from the request
    pub language: Option<String>,
}

/// Engine that replays scripted segments and records every call
///
/// Reads the spooled file eagerly so tests can assert the upload reached
/// disk intact even though the spool is deleted once the request finishes.
pub struct ScriptedEngine {
    language: String,
    segments: Vec<String>,
    failure: Option<String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedEngine {
    /// Engine producing the given segments, reporting `language` unless the
    /// request carries its own hint
    pub fn replying(language: &str, segments: &[&str]) -> Self {
        Self {
            language: language.to_owned(),
            segments: segments.iter().map(|s| (*s).to_owned()).collect(),
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Engine that fails every request with the given message
    pub fn failing(message: &str) -> Self {
        Self {
            language: String::new(),
            segments: Vec::new(),
            failure: Some(message.to_owned()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls observed so far
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl SpeechEngine for ScriptedEngine {
    fn transcribe(
        &self,
        audio: &Path,
        language: Option<&str>,
        _decode: &DecodeOptions,
    ) -> Result<Transcript, EngineError> {
        let audio_bytes = std::fs::read(audio)
            .map_err(|e| EngineError::new(format!("failed to read spooled audio: {e}")))?;

        self.calls.lock().unwrap().push(RecordedCall {
            audio_path: audio.to_path_buf(),
            audio_bytes,
            language: language.map(ToOwned::to_owned),
        });

        if let Some(message) = &self.failure {
            return Err(EngineError::new(message.clone()));
        }

        let segments = self
            .segments
            .iter()
            .enumerate()
            .map(|(i, text)| Segment {
                start_secs: i as f32,
                end_secs: (i + 1) as f32,
                text: text.clone(),
            })
            .collect();

        Ok(Transcript {
            language: language.unwrap_or(&self.language).to_owned(),
            segments,
        })
    }
}
