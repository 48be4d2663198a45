#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

pub mod engine;
mod error;
mod media;
mod request;
mod server;
mod spool;
mod types;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State},
    routing::post,
};

pub use error::{Result, SttError};
pub use media::SUPPORTED_EXTENSIONS;
pub use request::TranscriptionRequest;
pub use server::Server;
pub use types::TranscriptionResponse;

/// Cap on upload request bodies
const BODY_LIMIT_BYTES: usize = 32 << 20;

/// Build the transcription server from configuration
///
/// # Errors
///
/// Returns an error if the engine fails to initialize
pub fn build_server(config: &sotto_config::Config) -> anyhow::Result<Arc<Server>> {
    #[cfg(feature = "whisper")]
    {
        let engine = engine::WhisperEngine::load(&config.stt)
            .map_err(|e| anyhow::anyhow!("failed to initialize transcription engine: {e}"))?;

        Ok(Arc::new(Server::new(
            Arc::new(engine),
            engine::DecodeOptions::from_config(&config.stt.decode),
        )))
    }
    #[cfg(not(feature = "whisper"))]
    {
        let _ = config;
        anyhow::bail!("built without a transcription engine (enable the `whisper` feature)")
    }
}

/// Create the endpoint router for transcription
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new()
        .route("/transcribe", post(transcribe))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
}

/// Handle transcription requests
async fn transcribe(
    State(server): State<Arc<Server>>,
    multipart: Multipart,
) -> Result<Json<TranscriptionResponse>> {
    let request = TranscriptionRequest::from_multipart(multipart).await?;

    tracing::debug!(
        file = %request.filename,
        bytes = request.audio.len(),
        language = ?request.language,
        "transcription requested"
    );

    let response = server.transcribe(request).await?;

    Ok(Json(response))
}
