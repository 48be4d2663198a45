use std::ffi::OsStr;
use std::path::Path;

use crate::error::SttError;

/// File extensions accepted by the transcription endpoint
pub const SUPPORTED_EXTENSIONS: &[&str] = &["mp3", "wav", "m4a", "flac", "mp4", "ogg"];

/// Extract and validate the extension of an uploaded file name
///
/// Matching is case-insensitive; the returned extension is lowercased so it
/// can name the spool file's suffix directly.
pub(crate) fn audio_extension(filename: &str) -> Result<String, SttError> {
    let extension = Path::new(filename)
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase);

    match extension {
        Some(ext) if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) => Ok(ext),
        other => Err(SttError::UnsupportedMediaType { extension: other }),
    }
}

pub(crate) fn unsupported_message(extension: Option<&str>) -> String {
    let supported = SUPPORTED_EXTENSIONS.join(", ");
    match extension {
        Some(ext) => format!("Unsupported file extension '{ext}' (supported: {supported})"),
        None => format!("Missing file extension (supported: {supported})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_supported_extension() {
        for ext in SUPPORTED_EXTENSIONS {
            let filename = format!("clip.{ext}");
            assert_eq!(audio_extension(&filename).unwrap(), *ext);
        }
    }

    #[test]
    fn accepts_uppercase_extensions() {
        assert_eq!(audio_extension("CLIP.WAV").unwrap(), "wav");
        assert_eq!(audio_extension("voice.Mp3").unwrap(), "mp3");
    }

    #[test]
    fn rejects_unsupported_extension() {
        let err = audio_extension("notes.txt").unwrap_err();
        match err {
            SttError::UnsupportedMediaType { extension } => {
                assert_eq!(extension.as_deref(), Some("txt"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_filename_without_extension() {
        let err = audio_extension("audio").unwrap_err();
        match err {
            SttError::UnsupportedMediaType { extension } => assert!(extension.is_none()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_empty_filename() {
        assert!(audio_extension("").is_err());
    }

    #[test]
    fn only_the_final_extension_counts() {
        let err = audio_extension("clip.wav.txt").unwrap_err();
        match err {
            SttError::UnsupportedMediaType { extension } => {
                assert_eq!(extension.as_deref(), Some("txt"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejection_names_the_extension_and_the_supported_set() {
        let message = audio_extension("notes.txt").unwrap_err().to_string();
        assert!(message.contains("txt"));
        for ext in SUPPORTED_EXTENSIONS {
            assert!(message.contains(ext), "message should list {ext}: {message}");
        }
    }
}
