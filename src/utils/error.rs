//! Error handling for ytdrop

use thiserror::Error;

/// Main error type for ytdrop
#[derive(Debug, Error)]
pub enum YtdropError {
    #[error("yt-dlp not found. Please install yt-dlp")]
    YtDlpNotFound,

    #[error("Invalid YouTube URL: {0}")]
    InvalidInput(String),

    #[error("Failed to resolve video: {0}")]
    ResolutionFailed(String),

    #[error("No downloadable format with audio and video")]
    NoSuitableFormat,

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = YtdropError::InvalidInput("https://vimeo.com/1".to_string());
        assert_eq!(err.to_string(), "Invalid YouTube URL: https://vimeo.com/1");
        assert_eq!(
            YtdropError::NoSuitableFormat.to_string(),
            "No downloadable format with audio and video"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: YtdropError = io.into();
        assert!(matches!(err, YtdropError::IoError(_)));
    }
}
