//! whisper.cpp engine

use std::path::Path;
use std::time::Instant;

use sotto_config::SttConfig;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use super::{DecodeOptions, EngineError, Segment, SpeechEngine, Transcript, audio};

/// Fallback when the model cannot name the language it detected
const DEFAULT_LANGUAGE: &str = "en";

/// Locally loaded whisper.cpp model
///
/// The context is loaded once at startup and shared across requests; each
/// request runs on its own inference state.
pub struct WhisperEngine {
    ctx: WhisperContext,
    threads: i32,
}

impl WhisperEngine {
    /// Load the model named by the configuration
    ///
    /// Fails when the model file is missing, so a bad path surfaces at
    /// startup rather than on the first request.
    pub fn load(config: &SttConfig) -> Result<Self, EngineError> {
        if !config.model_path.is_file() {
            return Err(EngineError::new(format!(
                "model file not found: {}",
                config.model_path.display()
            )));
        }

        let model_path = config
            .model_path
            .to_str()
            .ok_or_else(|| EngineError::new("model path is not valid UTF-8"))?;

        let mut ctx_params = WhisperContextParameters::default();
        ctx_params.use_gpu(config.device.use_gpu());

        tracing::info!(model = %config.model_path.display(), device = ?config.device, "loading whisper model");

        let ctx = WhisperContext::new_with_params(model_path, ctx_params)
            .map_err(|e| EngineError::new(format!("failed to load model: {e}")))?;

        let threads = if config.threads == 0 {
            std::thread::available_parallelism().map_or(4, |p| i32::try_from(p.get()).unwrap_or(4))
        } else {
            i32::from(config.threads)
        };

        tracing::info!(threads, "whisper model loaded");

        Ok(Self { ctx, threads })
    }
}

impl SpeechEngine for WhisperEngine {
    #[allow(clippy::cast_precision_loss)]
    fn transcribe(
        &self,
        audio_path: &Path,
        language: Option<&str>,
        decode: &DecodeOptions,
    ) -> Result<Transcript, EngineError> {
        let started = Instant::now();

        let samples = audio::load_samples(audio_path)?;
        let audio_secs = samples.len() as f32 / audio::TARGET_SAMPLE_RATE as f32;

        let mut params = FullParams::new(SamplingStrategy::BeamSearch {
            beam_size: i32::try_from(decode.beam_size).unwrap_or(i32::MAX),
            patience: -1.0,
        });

        params.set_n_threads(self.threads);
        params.set_translate(false);

        match language {
            Some(code) => params.set_language(Some(code)),
            None => params.set_language(Some("auto")),
        }

        // whisper.cpp's no-speech gate stands in for a separate VAD pass
        params.set_no_speech_thold(decode.vad.threshold);
        params.set_suppress_non_speech_tokens(true);

        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_print_special(false);

        let mut state = self
            .ctx
            .create_state()
            .map_err(|e| EngineError::new(format!("failed to create inference state: {e}")))?;

        state
            .full(params, &samples)
            .map_err(|e| EngineError::new(format!("inference failed: {e}")))?;

        let segment_count = state
            .full_n_segments()
            .map_err(|e| EngineError::new(format!("failed to read segment count: {e}")))?;

        let min_speech_secs = decode.vad.min_speech_ms as f32 / 1000.0;
        let mut segments = Vec::new();

        for i in 0..segment_count {
            // Timestamps are in centiseconds
            let start_secs = state
                .full_get_segment_t0(i)
                .map_err(|e| EngineError::new(format!("failed to read segment start: {e}")))?
                as f32
                / 100.0;
            let end_secs = state
                .full_get_segment_t1(i)
                .map_err(|e| EngineError::new(format!("failed to read segment end: {e}")))?
                as f32
                / 100.0;
            let text = state
                .full_get_segment_text(i)
                .map_err(|e| EngineError::new(format!("failed to read segment text: {e}")))?;

            let text = text.trim().to_string();
            if text.is_empty() {
                continue;
            }

            // Drop bursts shorter than the minimum speech duration
            if end_secs - start_secs < min_speech_secs {
                continue;
            }

            segments.push(Segment {
                start_secs,
                end_secs,
                text,
            });
        }

        let language = language.map_or_else(
            || {
                state
                    .full_lang_id_from_state()
                    .ok()
                    .and_then(whisper_rs::get_lang_str)
                    .unwrap_or(DEFAULT_LANGUAGE)
                    .to_string()
            },
            ToString::to_string,
        );

        tracing::info!(
            elapsed = ?started.elapsed(),
            audio_secs,
            segments = segments.len(),
            %language,
            "transcription complete"
        );

        Ok(Transcript { language, segments })
    }
}
