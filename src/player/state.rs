use super::error::PlaybackError;
use super::visibility::ControlsVisibility;

/// Playback speeds offered in the settings menu.
pub const PLAYBACK_RATES: [f64; 6] = [0.5, 0.75, 1.0, 1.25, 1.5, 2.0];

/// Returns the canonical entry of [`PLAYBACK_RATES`] matching `rate`.
pub fn supported_rate(rate: f64) -> Option<f64> {
    PLAYBACK_RATES
        .iter()
        .copied()
        .find(|candidate| (candidate - rate).abs() < 1e-6)
}

/// Label used for a rate in the settings menu.
pub fn rate_label(rate: f64) -> String {
    if (rate - 1.0).abs() < 1e-6 {
        "Normal".to_string()
    } else {
        format!("{rate}x")
    }
}

/// Mirror of the native element's live state.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub current_time: f64,
    pub duration: f64,
    pub volume: f64,
    pub muted: bool,
    pub playback_rate: f64,
    pub is_playing: bool,
    pub is_buffering: bool,
    pub error: Option<PlaybackError>,
}

impl PlaybackState {
    /// `false` before metadata and for sources reporting an unbounded length.
    pub fn has_known_duration(&self) -> bool {
        self.duration.is_finite() && self.duration > 0.0
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_time: 0.0,
            duration: 0.0,
            volume: 1.0,
            muted: false,
            playback_rate: 1.0,
            is_playing: false,
            is_buffering: false,
            error: None,
        }
    }
}

impl PlaybackState {
    /// Back to initial values, keeping the listener's volume, mute and speed.
    pub fn reset_for_new_source(&mut self) {
        *self = Self {
            volume: self.volume,
            muted: self.muted,
            playback_rate: self.playback_rate,
            ..Self::default()
        };
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubtitleSelection {
    #[default]
    Off,
    Track(String),
}

/// Presentation-only state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub controls: ControlsVisibility,
    pub settings_menu_open: bool,
    pub shortcuts_hint_visible: bool,
    pub selected_subtitle: SubtitleSelection,
    pub selected_audio_track: Option<String>,
    pub is_fullscreen: bool,
    pub is_drag_over: bool,
}

impl UiState {
    pub fn controls_visible(&self) -> bool {
        self.controls.is_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_listed_rates_are_supported() {
        assert_eq!(supported_rate(1.25), Some(1.25));
        assert_eq!(supported_rate(2.0), Some(2.0));
        assert_eq!(supported_rate(3.0), None);
        assert_eq!(supported_rate(1.1), None);
    }

    #[test]
    fn rate_labels() {
        assert_eq!(rate_label(1.0), "Normal");
        assert_eq!(rate_label(0.75), "0.75x");
        assert_eq!(rate_label(2.0), "2x");
    }

    #[test]
    fn known_duration_requires_finite_positive_length() {
        let mut state = PlaybackState::default();
        assert!(!state.has_known_duration());
        state.duration = f64::INFINITY;
        assert!(!state.has_known_duration());
        state.duration = 125.4;
        assert!(state.has_known_duration());
    }

    #[test]
    fn reset_keeps_preferences() {
        let mut state = PlaybackState {
            current_time: 42.0,
            duration: 100.0,
            volume: 0.3,
            muted: true,
            playback_rate: 1.5,
            is_playing: true,
            is_buffering: true,
            error: Some(PlaybackError::NetworkError),
        };
        state.reset_for_new_source();
        assert_eq!(state.current_time, 0.0);
        assert_eq!(state.duration, 0.0);
        assert!(!state.is_playing);
        assert!(state.error.is_none());
        assert_eq!(state.volume, 0.3);
        assert!(state.muted);
        assert_eq!(state.playback_rate, 1.5);
    }
}
