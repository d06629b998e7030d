//! Loaded media and the tracks attached to it.

use uuid::Uuid;

/// Subtitle extensions the file picker and drop zone accept.
pub const SUBTITLE_EXTENSIONS: [&str; 4] = ["srt", "vtt", "ass", "ssa"];

/// Video extensions recognised when the browser reports no MIME type.
/// Only MP4, WebM and OGG play everywhere; the rest depend on host codecs.
pub const VIDEO_EXTENSIONS: [&str; 10] = [
    "mp4", "webm", "ogg", "ogv", "mkv", "avi", "mov", "wmv", "flv", "m4v",
];

/// `accept` attribute for the video file picker.
pub const VIDEO_ACCEPT: &str = "video/*,.mkv,.avi,.mov,.wmv,.flv,.m4v";

/// `accept` attribute for the subtitle file picker.
pub const SUBTITLE_ACCEPT: &str = ".srt,.vtt,.ass,.ssa";

/// The currently loaded video.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaSource {
    /// Object URL handed to the `<video>` element.
    pub url: String,
    pub file_name: String,
    pub mime_type: String,
}

impl MediaSource {
    pub fn new(
        url: impl Into<String>,
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        let file_name = file_name.into();
        let mut mime_type = mime_type.into();
        if mime_type.trim().is_empty() {
            mime_type = guess_video_mime(&file_name).to_string();
        }
        Self {
            url: url.into(),
            file_name,
            mime_type,
        }
    }
}

/// A user-attached subtitle file. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleTrack {
    pub id: String,
    pub label: String,
    pub language: String,
    pub url: String,
}

impl SubtitleTrack {
    pub fn new(file_name: &str, url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            label: subtitle_label(file_name),
            language: "Unknown".to_string(),
            url: url.into(),
        }
    }
}

/// Snapshot of one entry of the element's `audioTracks` list.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioTrack {
    pub id: String,
    pub label: String,
    pub language: String,
}

impl AudioTrack {
    pub fn new(index: usize, label: &str, language: &str) -> Self {
        let label = if label.trim().is_empty() {
            format!("Track {}", index + 1)
        } else {
            label.trim().to_string()
        };
        let language = if language.trim().is_empty() {
            "Unknown".to_string()
        } else {
            language.trim().to_string()
        };
        Self {
            id: index.to_string(),
            label,
            language,
        }
    }
}

/// Name and MIME type of one file in a drop payload or picker selection.
#[derive(Debug, Clone, PartialEq)]
pub struct PickedFile {
    pub name: String,
    pub mime_type: String,
}

impl PickedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn is_video(&self) -> bool {
        if self.mime_type.starts_with("video/") {
            return true;
        }
        self.mime_type.trim().is_empty()
            && extension(&self.name)
                .map(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()))
                .unwrap_or(false)
    }

    pub fn is_subtitle(&self) -> bool {
        is_subtitle_file(&self.name)
    }
}

/// Indices of the first video and the first subtitle in a drop payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropSelection {
    pub video: Option<usize>,
    pub subtitle: Option<usize>,
}

impl DropSelection {
    pub fn is_empty(&self) -> bool {
        self.video.is_none() && self.subtitle.is_none()
    }

    /// The subtitle to attach once the video half of the drop is handled.
    /// A subtitle whose video failed to open is skipped.
    pub fn subtitle_after(&self, video_loaded: bool) -> Option<usize> {
        if self.video.is_some() && !video_loaded {
            return None;
        }
        self.subtitle
    }
}

pub fn classify_drop(files: &[PickedFile]) -> DropSelection {
    DropSelection {
        video: files.iter().position(PickedFile::is_video),
        subtitle: files.iter().position(PickedFile::is_subtitle),
    }
}

pub fn is_subtitle_file(name: &str) -> bool {
    extension(name)
        .map(|ext| SUBTITLE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Lowercased extension after the last dot, if any.
fn extension(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

fn subtitle_label(file_name: &str) -> String {
    let trimmed = file_name.trim();
    let label = match trimmed.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => trimmed,
    };
    if label.is_empty() {
        "Subtitles".to_string()
    } else {
        label.to_string()
    }
}

fn guess_video_mime(file_name: &str) -> &'static str {
    match extension(file_name).as_deref() {
        Some("mp4") | Some("m4v") => "video/mp4",
        Some("webm") => "video/webm",
        Some("ogg") | Some("ogv") => "video/ogg",
        Some("mkv") => "video/x-matroska",
        Some("avi") => "video/x-msvideo",
        Some("mov") => "video/quicktime",
        Some("wmv") => "video/x-ms-wmv",
        Some("flv") => "video/x-flv",
        _ => "video/unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_picks_first_video_and_first_subtitle() {
        let files = vec![
            PickedFile::new("notes.txt", "text/plain"),
            PickedFile::new("movie.mkv", "video/x-matroska"),
            PickedFile::new("movie.en.vtt", "text/vtt"),
            PickedFile::new("other.mp4", "video/mp4"),
            PickedFile::new("other.srt", ""),
        ];
        let selection = classify_drop(&files);
        assert_eq!(selection.video, Some(1));
        assert_eq!(selection.subtitle, Some(2));
    }

    #[test]
    fn subtitle_skipped_when_its_video_failed() {
        let both = DropSelection {
            video: Some(1),
            subtitle: Some(0),
        };
        assert_eq!(both.subtitle_after(true), Some(0));
        assert_eq!(both.subtitle_after(false), None);

        let subtitle_only = DropSelection {
            video: None,
            subtitle: Some(0),
        };
        assert_eq!(subtitle_only.subtitle_after(false), Some(0));
    }

    #[test]
    fn drop_without_media_is_empty() {
        let files = vec![PickedFile::new("readme.md", "text/markdown")];
        assert!(classify_drop(&files).is_empty());
    }

    #[test]
    fn video_detection_falls_back_to_extension_only_without_mime() {
        assert!(PickedFile::new("clip.MKV", "").is_video());
        assert!(!PickedFile::new("clip.mkv", "application/octet-stream").is_video());
        assert!(!PickedFile::new("song.mp3", "").is_video());
    }

    #[test]
    fn subtitle_extensions_are_case_insensitive() {
        assert!(is_subtitle_file("Episode.SRT"));
        assert!(is_subtitle_file("a.ass"));
        assert!(is_subtitle_file("a.ssa"));
        assert!(!is_subtitle_file("vtt"));
        assert!(!is_subtitle_file("a.sub"));
    }

    #[test]
    fn subtitle_track_derives_label_and_default_language() {
        let track = SubtitleTrack::new("The.Movie.en.srt", "blob:1");
        assert_eq!(track.label, "The.Movie.en");
        assert_eq!(track.language, "Unknown");
        assert_eq!(track.url, "blob:1");
        assert_ne!(track.id, SubtitleTrack::new("The.Movie.en.srt", "blob:1").id);
    }

    #[test]
    fn media_source_guesses_missing_mime() {
        let source = MediaSource::new("blob:v", "movie.mkv", "");
        assert_eq!(source.mime_type, "video/x-matroska");
        let source = MediaSource::new("blob:v", "movie.mp4", "video/mp4");
        assert_eq!(source.mime_type, "video/mp4");
    }

    #[test]
    fn audio_track_fills_blank_fields() {
        let track = AudioTrack::new(1, "  ", "");
        assert_eq!(track.id, "1");
        assert_eq!(track.label, "Track 2");
        assert_eq!(track.language, "Unknown");
    }
}
