use axum::extract::Multipart;

use crate::error::SttError;

/// A parsed transcription request
#[derive(Debug)]
pub struct TranscriptionRequest {
    /// Raw audio data
    pub audio: Vec<u8>,
    /// Original filename, used for media type validation
    pub filename: String,
    /// Optional language hint (ISO 639-1), forwarded to the engine verbatim
    pub language: Option<String>,
}

impl TranscriptionRequest {
    /// Collect the `file` and optional `language` fields from a multipart
    /// form
    ///
    /// A blank language hint counts as absent. Unknown fields are skipped.
    pub(crate) async fn from_multipart(mut multipart: Multipart) -> Result<Self, SttError> {
        let mut audio: Option<Vec<u8>> = None;
        let mut filename = String::new();
        let mut language: Option<String> = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| SttError::InvalidRequest(format!("malformed multipart form: {e}")))?
        {
            let field_name = field.name().unwrap_or("").to_string();

            match field_name.as_str() {
                "file" => {
                    if let Some(name) = field.file_name() {
                        filename = name.to_string();
                    }
                    audio = Some(
                        field
                            .bytes()
                            .await
                            .map_err(|e| SttError::InvalidRequest(format!("failed to read audio data: {e}")))?
                            .to_vec(),
                    );
                }
                "language" => {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| SttError::InvalidRequest(format!("failed to read language field: {e}")))?;
                    let value = value.trim();
                    if !value.is_empty() {
                        language = Some(value.to_string());
                    }
                }
                _ => {
                    // Skip unknown fields
                }
            }
        }

        let audio = audio.ok_or_else(|| SttError::InvalidRequest("missing required 'file' field".to_string()))?;

        Ok(Self {
            audio,
            filename,
            language,
        })
    }
}
