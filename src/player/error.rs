//! Playback errors reported by the native media element.

use thiserror::Error;

/// User-facing playback failure, derived 1:1 from `MediaError.code`.
///
/// The `Display` text is what the error overlay shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("Video playback was aborted")]
    Aborted,
    #[error("Network error occurred while loading video")]
    NetworkError,
    #[error("Video format not supported or corrupted")]
    UnsupportedOrCorrupt,
    #[error("Video format not supported by your browser")]
    BrowserUnsupported,
    #[error("An error occurred while playing the video")]
    Unknown,
}

impl PlaybackError {
    /// Map a `MediaError.code` (1..=4) onto the error taxonomy.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::Aborted,
            2 => Self::NetworkError,
            3 => Self::UnsupportedOrCorrupt,
            4 => Self::BrowserUnsupported,
            _ => Self::Unknown,
        }
    }

    /// Short hint shown under the message in the error overlay.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::UnsupportedOrCorrupt | Self::BrowserUnsupported => {
                "MP4, WebM and OGG have the best browser support."
            }
            Self::NetworkError => "The file may have been moved or is no longer readable.",
            Self::Aborted | Self::Unknown => "Try reloading the video or choose another file.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_codes() {
        assert_eq!(PlaybackError::from_code(1), PlaybackError::Aborted);
        assert_eq!(PlaybackError::from_code(2), PlaybackError::NetworkError);
        assert_eq!(PlaybackError::from_code(4), PlaybackError::BrowserUnsupported);
    }

    #[test]
    fn decode_error_message() {
        assert_eq!(
            PlaybackError::from_code(3).to_string(),
            "Video format not supported or corrupted"
        );
    }

    #[test]
    fn unknown_codes_fall_back_to_generic_message() {
        for code in [0, 5, 42, u16::MAX] {
            let err = PlaybackError::from_code(code);
            assert_eq!(err, PlaybackError::Unknown);
            assert_eq!(err.to_string(), "An error occurred while playing the video");
        }
    }
}
