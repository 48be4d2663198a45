use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::engine::EngineError;
use crate::media;

pub type Result<T> = std::result::Result<T, SttError>;

/// Transcription service errors with appropriate HTTP status codes
#[derive(Debug, Error)]
pub enum SttError {
    /// Upload's file extension is missing or not in the supported set
    #[error("{}", media::unsupported_message(.extension.as_deref()))]
    UnsupportedMediaType { extension: Option<String> },

    /// Malformed multipart form or missing required fields
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Upload could not be written to its temporary file
    #[error("Failed to spool upload: {0}")]
    Spool(#[from] std::io::Error),

    /// The engine reported a failure
    #[error("Transcription failed: {0}")]
    Transcription(String),
}

impl From<EngineError> for SttError {
    fn from(err: EngineError) -> Self {
        Self::Transcription(err.to_string())
    }
}

impl SttError {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UnsupportedMediaType { .. } | Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Spool(_) | Self::Transcription(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error type string for the response
    pub fn error_type(&self) -> &str {
        match self {
            Self::UnsupportedMediaType { .. } | Self::InvalidRequest(_) => "invalid_request_error",
            Self::Spool(_) => "internal_error",
            Self::Transcription(_) => "transcription_error",
        }
    }

    /// Message that is safe to expose to API consumers
    ///
    /// Spool failures carry filesystem detail that stays in the logs; the
    /// engine's failure text is part of the API contract and passes through.
    pub fn client_message(&self) -> String {
        match self {
            Self::Spool(_) => "Failed to store upload for transcription".to_string(),
            _ => self.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorDetails,
}

#[derive(Debug, Serialize)]
struct ErrorDetails {
    message: String,
    r#type: String,
    code: u16,
}

impl IntoResponse for SttError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("{self}");
        }

        let error_response = ErrorResponse {
            error: ErrorDetails {
                message: self.client_message(),
                r#type: self.error_type().to_string(),
                code: status.as_u16(),
            },
        };

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_media_type_maps_to_400() {
        let err = SttError::UnsupportedMediaType {
            extension: Some("txt".to_string()),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_type(), "invalid_request_error");
    }

    #[test]
    fn transcription_failure_maps_to_500_and_keeps_the_message() {
        let err = SttError::from(EngineError::new("model exploded"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_type(), "transcription_error");
        assert_eq!(err.client_message(), "Transcription failed: model exploded");
    }

    #[test]
    fn spool_failure_hides_filesystem_detail() {
        let err = SttError::from(std::io::Error::other("disk full at /tmp/sotto-x1"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.client_message().contains("/tmp"));
    }
}
