// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Content(String),
    Media(MediaError),
}

/// Specific error types for media playback issues.
///
/// Only one error class in the whole application has a UI surface: the
/// configured media source cannot be loaded or decoded. The variants let the
/// acknowledgment view explain what went wrong before the user retries or
/// skips ahead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// Source file does not exist at the configured path.
    NotFound(String),

    /// File extension is not one the frame decoder understands.
    UnsupportedFormat(String),

    /// The file exists but decoding its frames failed.
    DecodeFailed(String),

    /// The file decoded but contains no frames to play.
    EmptyAnimation,
}

impl MediaError {
    /// Short, user-facing headline for the acknowledgment view.
    pub fn headline(&self) -> &'static str {
        match self {
            MediaError::NotFound(_) => "The surprise video is missing",
            MediaError::UnsupportedFormat(_) => "Unsupported media format",
            MediaError::DecodeFailed(_) => "The video could not be decoded",
            MediaError::EmptyAnimation => "The video contains no frames",
        }
    }
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::NotFound(path) => write!(f, "media source not found: {}", path),
            MediaError::UnsupportedFormat(ext) => {
                write!(f, "unsupported media format: {}", ext)
            }
            MediaError::DecodeFailed(msg) => write!(f, "decoding failed: {}", msg),
            MediaError::EmptyAnimation => write!(f, "animation contains no frames"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Content(e) => write!(f, "Content Error: {}", e),
            Error::Media(e) => write!(f, "Media Error: {}", e),
        }
    }
}

impl From<MediaError> for Error {
    fn from(err: MediaError) -> Self {
        Error::Media(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn media_error_wraps_into_error() {
        let err: Error = MediaError::EmptyAnimation.into();
        assert!(matches!(err, Error::Media(MediaError::EmptyAnimation)));
    }

    #[test]
    fn media_error_display_includes_path() {
        let err = MediaError::NotFound("assets/surprise.gif".into());
        assert!(format!("{}", err).contains("assets/surprise.gif"));
    }

    #[test]
    fn media_error_headlines_are_short() {
        for err in [
            MediaError::NotFound(String::new()),
            MediaError::UnsupportedFormat(String::new()),
            MediaError::DecodeFailed(String::new()),
            MediaError::EmptyAnimation,
        ] {
            assert!(!err.headline().is_empty());
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }
}
