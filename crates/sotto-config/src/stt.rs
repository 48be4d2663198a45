use std::path::PathBuf;

use serde::Deserialize;

/// Transcription engine configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SttConfig {
    /// Path to the ggml model file loaded at startup
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,
    /// Inference device
    #[serde(default)]
    pub device: DeviceConfig,
    /// Inference threads (0 = one per available core)
    #[serde(default)]
    pub threads: u16,
    /// Decoding parameters applied to every request
    #[serde(default)]
    pub decode: DecodeConfig,
}

impl Default for SttConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            device: DeviceConfig::default(),
            threads: 0,
            decode: DecodeConfig::default(),
        }
    }
}

/// Inference device selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceConfig {
    /// Use the GPU when the build carries GPU support
    #[default]
    Auto,
    Cpu,
    Gpu,
}

impl DeviceConfig {
    pub const fn use_gpu(self) -> bool {
        !matches!(self, Self::Cpu)
    }
}

/// Decoding parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecodeConfig {
    /// Beam width for beam-search decoding
    #[serde(default = "default_beam_size")]
    pub beam_size: u32,
    /// Voice-activity filtering
    #[serde(default)]
    pub vad: VadConfig,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            beam_size: default_beam_size(),
            vad: VadConfig::default(),
        }
    }
}

/// Voice-activity filter parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VadConfig {
    /// Speech probability threshold
    #[serde(default = "default_vad_threshold")]
    pub threshold: f32,
    /// Speech runs shorter than this are discarded
    #[serde(default = "default_min_speech_ms")]
    pub min_speech_ms: u32,
}

impl Default for VadConfig {
    fn default() -> Self {
        Self {
            threshold: default_vad_threshold(),
            min_speech_ms: default_min_speech_ms(),
        }
    }
}

fn default_model_path() -> PathBuf {
    PathBuf::from("models/ggml-small.bin")
}

#[allow(clippy::missing_const_for_fn)]
fn default_beam_size() -> u32 {
    5
}

#[allow(clippy::missing_const_for_fn)]
fn default_vad_threshold() -> f32 {
    0.5
}

#[allow(clippy::missing_const_for_fn)]
fn default_min_speech_ms() -> u32 {
    250
}
