//! Player controller - owns all player state and decides what the native
//! `<video>` element should do.
//!
//! Every operation returns the [`MediaCommand`]s the caller must forward to
//! the element. The controller never touches the DOM itself, so the whole
//! state machine runs (and is tested) off the browser.

use super::config::PlayerConfig;
use super::error::PlaybackError;
use super::media::{is_subtitle_file, AudioTrack, MediaSource, SubtitleTrack};
use super::shortcuts::Shortcut;
use super::state::{supported_rate, PlaybackState, SubtitleSelection, UiState};
use super::time::click_fraction;
use super::visibility::HideTicket;

/// Instruction for the native media element or the browser around it.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaCommand {
    /// Point the element at a new object URL and load it.
    Load(String),
    /// Re-run `load()` on the current source.
    Reload,
    /// Drop the element's source.
    Unload,
    Play,
    Pause,
    Seek(f64),
    SetVolume(f64),
    SetMuted(bool),
    SetPlaybackRate(f64),
    EnableAudioTrack(usize),
    EnterFullscreen,
    ExitFullscreen,
    /// Revoke an object URL that is no longer referenced.
    Release(String),
    /// Start the auto-hide countdown, replacing any pending one.
    ScheduleHide(HideTicket),
    CancelHide,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerController {
    config: PlayerConfig,
    source: Option<MediaSource>,
    subtitles: Vec<SubtitleTrack>,
    audio_tracks: Vec<AudioTrack>,
    playback: PlaybackState,
    ui: UiState,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

impl PlayerController {
    pub fn new(config: PlayerConfig) -> Self {
        let config = config.normalized();
        let playback = PlaybackState {
            volume: config.initial_volume,
            muted: config.initial_volume == 0.0,
            ..PlaybackState::default()
        };
        Self {
            config,
            source: None,
            subtitles: Vec::new(),
            audio_tracks: Vec::new(),
            playback,
            ui: UiState::default(),
        }
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn source(&self) -> Option<&MediaSource> {
        self.source.as_ref()
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    pub fn subtitles(&self) -> &[SubtitleTrack] {
        &self.subtitles
    }

    pub fn audio_tracks(&self) -> &[AudioTrack] {
        &self.audio_tracks
    }

    /// The audio selector is only worth showing with a real choice.
    pub fn has_audio_choice(&self) -> bool {
        self.audio_tracks.len() > 1
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Position of the selected subtitle within [`Self::subtitles`].
    pub fn active_subtitle_index(&self) -> Option<usize> {
        match &self.ui.selected_subtitle {
            SubtitleSelection::Off => None,
            SubtitleSelection::Track(id) => self.subtitles.iter().position(|t| &t.id == id),
        }
    }

    /// Commands that bring a fresh element in line with the stored
    /// preferences.
    fn preference_commands(&self) -> Vec<MediaCommand> {
        vec![
            MediaCommand::SetVolume(self.playback.volume),
            MediaCommand::SetMuted(self.playback.muted),
            MediaCommand::SetPlaybackRate(self.playback.playback_rate),
        ]
    }

    pub fn initial_commands(&self) -> Vec<MediaCommand> {
        self.preference_commands()
    }

    // ---- file intake ----

    /// Replace the current video. Subtitles belong to the old video and go
    /// with it.
    pub fn load_video(&mut self, source: MediaSource) -> Vec<MediaCommand> {
        let mut commands = self.release_all();
        tracing::info!(
            file = %source.file_name,
            mime = %source.mime_type,
            "loading video"
        );

        self.playback.reset_for_new_source();
        self.audio_tracks.clear();
        self.ui.selected_subtitle = SubtitleSelection::Off;
        self.ui.selected_audio_track = None;
        self.ui.settings_menu_open = false;
        self.ui.is_drag_over = false;
        self.ui.controls.pin();

        commands.push(MediaCommand::CancelHide);
        commands.push(MediaCommand::Load(source.url.clone()));
        commands.extend(self.preference_commands());
        self.source = Some(source);
        commands
    }

    /// Attach a subtitle file and make it the active track.
    ///
    /// Files without a subtitle extension, or arriving while no video is
    /// loaded, are rejected and their URL is handed back for release.
    pub fn add_subtitle(&mut self, file_name: &str, url: String) -> Vec<MediaCommand> {
        if self.source.is_none() || !is_subtitle_file(file_name) {
            tracing::warn!(file = %file_name, "rejected subtitle file");
            return vec![MediaCommand::Release(url)];
        }
        let track = SubtitleTrack::new(file_name, url);
        tracing::info!(label = %track.label, "attached subtitle track");
        self.ui.selected_subtitle = SubtitleSelection::Track(track.id.clone());
        self.subtitles.push(track);
        Vec::new()
    }

    /// Discard the current video and go back to the upload screen.
    pub fn clear_source(&mut self) -> Vec<MediaCommand> {
        let mut commands = self.release_all();
        if self.source.take().is_some() {
            tracing::info!("discarded video");
        }
        self.playback.reset_for_new_source();
        self.audio_tracks.clear();
        self.ui.selected_subtitle = SubtitleSelection::Off;
        self.ui.selected_audio_track = None;
        self.ui.settings_menu_open = false;
        self.ui.shortcuts_hint_visible = false;
        self.ui.controls.pin();
        commands.push(MediaCommand::CancelHide);
        commands.push(MediaCommand::Unload);
        commands
    }

    /// Clear the error and ask the element to load the same source again.
    pub fn retry(&mut self) -> Vec<MediaCommand> {
        if self.source.is_none() {
            return Vec::new();
        }
        self.playback.error = None;
        self.playback.is_buffering = true;
        let mut commands = vec![MediaCommand::Reload];
        commands.extend(self.preference_commands());
        commands
    }

    fn release_all(&mut self) -> Vec<MediaCommand> {
        let mut commands = Vec::new();
        if let Some(source) = self.source.as_ref() {
            commands.push(MediaCommand::Release(source.url.clone()));
        }
        commands.extend(
            self.subtitles
                .drain(..)
                .map(|track| MediaCommand::Release(track.url)),
        );
        commands
    }

    pub fn drag_enter(&mut self) {
        self.ui.is_drag_over = true;
    }

    pub fn drag_leave(&mut self) {
        self.ui.is_drag_over = false;
    }

    // ---- transport ----

    pub fn toggle_play(&mut self) -> Vec<MediaCommand> {
        if self.source.is_none() {
            return Vec::new();
        }
        if self.playback.is_playing {
            vec![MediaCommand::Pause]
        } else {
            vec![MediaCommand::Play]
        }
    }

    /// Click on the picture. Only the first click of a sequence toggles, so a
    /// double-click (fullscreen) leaves playback alone after its first click.
    pub fn video_click(&mut self, click_count: u32) -> Vec<MediaCommand> {
        if click_count > 1 {
            return Vec::new();
        }
        self.toggle_play()
    }

    pub fn skip_backward(&mut self) -> Vec<MediaCommand> {
        self.skip(-self.config.skip_seconds)
    }

    pub fn skip_forward(&mut self) -> Vec<MediaCommand> {
        self.skip(self.config.skip_seconds)
    }

    /// Move by `delta` seconds, clamped to `[0, duration]`. Without a known
    /// duration only the lower bound applies.
    pub fn skip(&mut self, delta: f64) -> Vec<MediaCommand> {
        if self.source.is_none() {
            return Vec::new();
        }
        let mut target = (self.playback.current_time + delta).max(0.0);
        if self.playback.has_known_duration() {
            target = target.min(self.playback.duration);
        }
        self.seek(target)
    }

    /// Click-to-seek on the progress track.
    pub fn seek_to_fraction(&mut self, click_x: f64, track_width: f64) -> Vec<MediaCommand> {
        if self.source.is_none() || !self.playback.has_known_duration() {
            return Vec::new();
        }
        match click_fraction(click_x, track_width) {
            Some(fraction) => self.seek(fraction * self.playback.duration),
            None => Vec::new(),
        }
    }

    fn seek(&mut self, target: f64) -> Vec<MediaCommand> {
        self.playback.current_time = target;
        vec![MediaCommand::Seek(target)]
    }

    pub fn set_volume(&mut self, volume: f64) -> Vec<MediaCommand> {
        let volume = if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.playback.volume = volume;
        self.playback.muted = volume == 0.0;
        vec![
            MediaCommand::SetVolume(volume),
            MediaCommand::SetMuted(self.playback.muted),
        ]
    }

    pub fn toggle_mute(&mut self) -> Vec<MediaCommand> {
        self.playback.muted = !self.playback.muted;
        vec![MediaCommand::SetMuted(self.playback.muted)]
    }

    /// Only the rates in [`super::state::PLAYBACK_RATES`] are accepted.
    pub fn set_playback_rate(&mut self, rate: f64) -> Vec<MediaCommand> {
        let Some(rate) = supported_rate(rate) else {
            tracing::debug!(rate, "ignored unsupported playback rate");
            return Vec::new();
        };
        self.playback.playback_rate = rate;
        self.ui.settings_menu_open = false;
        let mut commands = vec![MediaCommand::SetPlaybackRate(rate)];
        commands.extend(self.activity());
        commands
    }

    // ---- controls visibility ----

    /// Pointer moved over the player, or the user interacted with it.
    pub fn activity(&mut self) -> Vec<MediaCommand> {
        if self.ui.settings_menu_open {
            self.ui.controls.pin();
            return vec![MediaCommand::CancelHide];
        }
        vec![MediaCommand::ScheduleHide(self.ui.controls.activity())]
    }

    pub fn hide_timer_elapsed(&mut self, ticket: HideTicket) {
        if self.ui.settings_menu_open {
            return;
        }
        self.ui.controls.elapsed(ticket, self.playback.is_playing);
    }

    pub fn pointer_leave(&mut self) -> Vec<MediaCommand> {
        if self.ui.settings_menu_open || !self.playback.is_playing {
            return Vec::new();
        }
        self.ui.controls.pointer_left(true);
        vec![MediaCommand::CancelHide]
    }

    // ---- fullscreen ----

    pub fn toggle_fullscreen(&self) -> Vec<MediaCommand> {
        if self.ui.is_fullscreen {
            vec![MediaCommand::ExitFullscreen]
        } else {
            vec![MediaCommand::EnterFullscreen]
        }
    }

    /// Sync from the document's `fullscreenchange` notification.
    pub fn fullscreen_changed(&mut self, is_fullscreen: bool) {
        self.ui.is_fullscreen = is_fullscreen;
    }

    // ---- tracks ----

    pub fn select_subtitle(&mut self, selection: SubtitleSelection) {
        match selection {
            SubtitleSelection::Off => self.ui.selected_subtitle = SubtitleSelection::Off,
            SubtitleSelection::Track(id) => {
                if self.subtitles.iter().any(|t| t.id == id) {
                    self.ui.selected_subtitle = SubtitleSelection::Track(id);
                }
            }
        }
    }

    pub fn select_audio_track(&mut self, id: &str) -> Vec<MediaCommand> {
        let Some(index) = self.audio_tracks.iter().position(|t| t.id == id) else {
            return Vec::new();
        };
        self.ui.selected_audio_track = Some(id.to_string());
        vec![MediaCommand::EnableAudioTrack(index)]
    }

    // ---- menus ----

    pub fn toggle_settings_menu(&mut self) -> Vec<MediaCommand> {
        self.ui.settings_menu_open = !self.ui.settings_menu_open;
        if self.ui.settings_menu_open {
            self.ui.shortcuts_hint_visible = false;
            self.ui.controls.pin();
            vec![MediaCommand::CancelHide]
        } else {
            self.activity()
        }
    }

    pub fn toggle_shortcuts_hint(&mut self) {
        self.ui.shortcuts_hint_visible = !self.ui.shortcuts_hint_visible;
        if self.ui.shortcuts_hint_visible {
            self.ui.settings_menu_open = false;
        }
    }

    pub fn close_menus(&mut self) -> Vec<MediaCommand> {
        let was_open = self.ui.settings_menu_open;
        self.ui.settings_menu_open = false;
        self.ui.shortcuts_hint_visible = false;
        if was_open {
            self.activity()
        } else {
            Vec::new()
        }
    }

    // ---- keyboard ----

    pub fn shortcut(&mut self, shortcut: Shortcut) -> Vec<MediaCommand> {
        if self.source.is_none() {
            return Vec::new();
        }
        let mut commands = match shortcut {
            Shortcut::TogglePlay => self.toggle_play(),
            Shortcut::ToggleMute => self.toggle_mute(),
            Shortcut::SkipBackward => self.skip_backward(),
            Shortcut::SkipForward => self.skip_forward(),
            Shortcut::ToggleFullscreen => self.toggle_fullscreen(),
            Shortcut::CloseMenus => self.close_menus(),
        };
        if shortcut.shows_controls() {
            commands.extend(self.activity());
        }
        commands
    }

    // ---- native element events ----

    pub fn on_load_start(&mut self) {
        self.playback.is_buffering = true;
    }

    pub fn on_loaded_metadata(&mut self, duration: f64, audio_tracks: Vec<AudioTrack>) {
        // Streamed recordings report `Infinity` until fully read; keep it.
        self.playback.duration = if duration > 0.0 { duration } else { 0.0 };
        self.playback.is_buffering = false;
        self.ui.selected_audio_track = audio_tracks.first().map(|t| t.id.clone());
        self.audio_tracks = audio_tracks;
    }

    pub fn on_time_update(&mut self, current_time: f64) {
        if current_time.is_finite() {
            self.playback.current_time = current_time.max(0.0);
        }
    }

    pub fn on_play(&mut self) -> Vec<MediaCommand> {
        self.playback.is_playing = true;
        self.playback.error = None;
        self.activity()
    }

    pub fn on_pause(&mut self) -> Vec<MediaCommand> {
        self.playback.is_playing = false;
        self.ui.controls.pin();
        vec![MediaCommand::CancelHide]
    }

    pub fn on_ended(&mut self) -> Vec<MediaCommand> {
        self.playback.is_buffering = false;
        self.on_pause()
    }

    pub fn on_waiting(&mut self) {
        self.playback.is_buffering = true;
    }

    pub fn on_can_play(&mut self) {
        self.playback.is_buffering = false;
    }

    /// Mirror volume changes made outside the controls (e.g. the browser's
    /// own media keys).
    pub fn on_volume_change(&mut self, volume: f64, muted: bool) {
        if volume.is_finite() {
            self.playback.volume = volume.clamp(0.0, 1.0);
        }
        self.playback.muted = muted;
    }

    pub fn on_error(&mut self, code: u16) -> Vec<MediaCommand> {
        let error = PlaybackError::from_code(code);
        tracing::warn!(code, %error, "video playback failed");
        self.playback.error = Some(error);
        self.playback.is_playing = false;
        self.playback.is_buffering = false;
        self.ui.controls.pin();
        vec![MediaCommand::CancelHide]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(duration: f64) -> PlayerController {
        let mut player = PlayerController::default();
        player.load_video(MediaSource::new("blob:video", "movie.mp4", "video/mp4"));
        player.on_loaded_metadata(duration, Vec::new());
        player
    }

    fn playing(duration: f64) -> PlayerController {
        let mut player = loaded(duration);
        player.on_play();
        player
    }

    fn scheduled_ticket(commands: &[MediaCommand]) -> HideTicket {
        commands
            .iter()
            .find_map(|c| match c {
                MediaCommand::ScheduleHide(ticket) => Some(*ticket),
                _ => None,
            })
            .expect("expected a ScheduleHide command")
    }

    #[test]
    fn volume_sets_muted_only_at_zero() {
        let mut player = loaded(60.0);
        for step in 0..=20 {
            let v = step as f64 / 20.0;
            player.set_volume(v);
            assert_eq!(player.playback().muted, v == 0.0, "volume {v}");
            assert_eq!(player.playback().volume, v);
        }
    }

    #[test]
    fn volume_is_clamped() {
        let mut player = loaded(60.0);
        let commands = player.set_volume(1.7);
        assert_eq!(player.playback().volume, 1.0);
        assert_eq!(
            commands,
            vec![MediaCommand::SetVolume(1.0), MediaCommand::SetMuted(false)]
        );
        player.set_volume(-0.2);
        assert_eq!(player.playback().volume, 0.0);
        assert!(player.playback().muted);
    }

    #[test]
    fn mute_toggle_keeps_volume() {
        let mut player = loaded(60.0);
        player.set_volume(0.4);
        assert_eq!(player.toggle_mute(), vec![MediaCommand::SetMuted(true)]);
        assert_eq!(player.playback().volume, 0.4);
        player.toggle_mute();
        assert!(!player.playback().muted);
    }

    #[test]
    fn skip_clamps_to_bounds() {
        let mut player = loaded(100.0);
        player.on_time_update(4.0);
        assert_eq!(player.skip_backward(), vec![MediaCommand::Seek(0.0)]);

        player.on_time_update(50.0);
        assert_eq!(player.skip_backward(), vec![MediaCommand::Seek(40.0)]);

        player.on_time_update(95.0);
        assert_eq!(player.skip_forward(), vec![MediaCommand::Seek(100.0)]);

        player.on_time_update(20.0);
        assert_eq!(player.skip_forward(), vec![MediaCommand::Seek(30.0)]);
    }

    #[test]
    fn skip_with_unbounded_duration_keeps_lower_bound_only() {
        let mut player = PlayerController::default();
        player.load_video(MediaSource::new("blob:rec", "rec.webm", "video/webm"));
        player.on_loaded_metadata(f64::INFINITY, Vec::new());
        assert!(!player.playback().has_known_duration());

        player.on_time_update(50.0);
        assert_eq!(player.skip_forward(), vec![MediaCommand::Seek(60.0)]);
        assert_eq!(player.skip_backward(), vec![MediaCommand::Seek(50.0)]);

        player.on_time_update(3.0);
        assert_eq!(player.skip_backward(), vec![MediaCommand::Seek(0.0)]);
        assert!(player.seek_to_fraction(50.0, 100.0).is_empty());
    }

    #[test]
    fn repeated_video_clicks_toggle_once() {
        let mut player = loaded(60.0);
        assert_eq!(player.video_click(1), vec![MediaCommand::Play]);
        player.on_play();
        assert!(player.video_click(2).is_empty());
        assert!(player.video_click(3).is_empty());
        assert_eq!(player.video_click(1), vec![MediaCommand::Pause]);
    }

    #[test]
    fn skip_without_source_does_nothing() {
        let mut player = PlayerController::default();
        assert!(player.skip_forward().is_empty());
        assert!(player.toggle_play().is_empty());
    }

    #[test]
    fn progress_click_maps_fraction_to_duration() {
        let mut player = loaded(200.0);
        assert_eq!(
            player.seek_to_fraction(150.0, 600.0),
            vec![MediaCommand::Seek(50.0)]
        );
        assert_eq!(player.playback().current_time, 50.0);
        assert_eq!(
            player.seek_to_fraction(600.0, 600.0),
            vec![MediaCommand::Seek(200.0)]
        );
        assert!(player.seek_to_fraction(10.0, 0.0).is_empty());
    }

    #[test]
    fn progress_click_ignored_before_metadata() {
        let mut player = loaded(0.0);
        assert!(player.seek_to_fraction(10.0, 100.0).is_empty());
    }

    #[test]
    fn toggle_play_follows_playing_flag() {
        let mut player = loaded(10.0);
        assert_eq!(player.toggle_play(), vec![MediaCommand::Play]);
        player.on_play();
        assert_eq!(player.toggle_play(), vec![MediaCommand::Pause]);
    }

    #[test]
    fn new_video_resets_state_and_releases_old_urls() {
        let mut player = playing(120.0);
        player.on_time_update(33.0);
        player.add_subtitle("a.srt", "blob:sub-a".to_string());
        player.add_subtitle("b.vtt", "blob:sub-b".to_string());
        player.on_error(2);

        let commands = player.load_video(MediaSource::new("blob:next", "next.webm", "video/webm"));

        assert!(player.subtitles().is_empty());
        assert_eq!(player.ui().selected_subtitle, SubtitleSelection::Off);
        assert_eq!(player.playback().current_time, 0.0);
        assert!(player.playback().error.is_none());
        assert!(!player.playback().is_playing);
        assert_eq!(player.source().map(|s| s.url.as_str()), Some("blob:next"));
        for url in ["blob:video", "blob:sub-a", "blob:sub-b"] {
            assert!(commands.contains(&MediaCommand::Release(url.to_string())));
        }
        assert!(commands.contains(&MediaCommand::Load("blob:next".to_string())));
    }

    #[test]
    fn subtitle_is_appended_and_selected() {
        let mut player = loaded(10.0);
        player.add_subtitle("first.srt", "blob:1".to_string());
        player.add_subtitle("second.ass", "blob:2".to_string());
        let labels: Vec<_> = player.subtitles().iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["first", "second"]);
        let second = player.subtitles()[1].id.clone();
        assert_eq!(player.ui().selected_subtitle, SubtitleSelection::Track(second));
        assert_eq!(player.active_subtitle_index(), Some(1));
    }

    #[test]
    fn non_subtitle_file_is_rejected() {
        let mut player = loaded(10.0);
        let commands = player.add_subtitle("notes.txt", "blob:txt".to_string());
        assert_eq!(commands, vec![MediaCommand::Release("blob:txt".to_string())]);
        assert!(player.subtitles().is_empty());
    }

    #[test]
    fn subtitle_without_video_is_rejected() {
        let mut player = PlayerController::default();
        let commands = player.add_subtitle("movie.srt", "blob:srt".to_string());
        assert_eq!(commands, vec![MediaCommand::Release("blob:srt".to_string())]);
        assert!(player.subtitles().is_empty());
    }

    #[test]
    fn subtitle_selection_ignores_unknown_ids() {
        let mut player = loaded(10.0);
        player.add_subtitle("a.vtt", "blob:a".to_string());
        let id = player.subtitles()[0].id.clone();
        player.select_subtitle(SubtitleSelection::Track("missing".to_string()));
        assert_eq!(player.ui().selected_subtitle, SubtitleSelection::Track(id));
        player.select_subtitle(SubtitleSelection::Off);
        assert_eq!(player.active_subtitle_index(), None);
    }

    #[test]
    fn drop_of_video_and_subtitle_keeps_both() {
        let mut player = PlayerController::default();
        player.load_video(MediaSource::new("blob:mkv", "movie.mkv", "video/x-matroska"));
        player.add_subtitle("movie.vtt", "blob:vtt".to_string());
        assert!(player.has_source());
        assert_eq!(player.subtitles().len(), 1);
        assert_eq!(player.active_subtitle_index(), Some(0));
    }

    #[test]
    fn controls_hide_after_inactivity_while_playing() {
        let mut player = playing(60.0);
        let ticket = scheduled_ticket(&player.activity());
        player.hide_timer_elapsed(ticket);
        assert!(!player.ui().controls_visible());

        let ticket = scheduled_ticket(&player.activity());
        assert!(player.ui().controls_visible());
        player.hide_timer_elapsed(ticket);
        assert!(!player.ui().controls_visible());
    }

    #[test]
    fn stale_timer_does_not_hide() {
        let mut player = playing(60.0);
        let stale = scheduled_ticket(&player.activity());
        player.activity();
        player.hide_timer_elapsed(stale);
        assert!(player.ui().controls_visible());
    }

    #[test]
    fn pausing_pins_controls() {
        let mut player = playing(60.0);
        let ticket = scheduled_ticket(&player.activity());
        assert_eq!(player.on_pause(), vec![MediaCommand::CancelHide]);
        player.hide_timer_elapsed(ticket);
        assert!(player.ui().controls_visible());
    }

    #[test]
    fn pointer_leave_hides_only_while_playing() {
        let mut player = loaded(60.0);
        assert!(player.pointer_leave().is_empty());
        assert!(player.ui().controls_visible());
        player.on_play();
        player.pointer_leave();
        assert!(!player.ui().controls_visible());
    }

    #[test]
    fn open_settings_menu_keeps_controls_visible() {
        let mut player = playing(60.0);
        let ticket = scheduled_ticket(&player.activity());
        player.toggle_settings_menu();
        player.hide_timer_elapsed(ticket);
        player.pointer_leave();
        assert!(player.ui().controls_visible());
    }

    #[test]
    fn error_translation_and_recovery() {
        let mut player = playing(60.0);
        player.on_waiting();
        player.on_error(3);
        let playback = player.playback();
        assert_eq!(playback.error, Some(PlaybackError::UnsupportedOrCorrupt));
        assert_eq!(
            playback.error.map(|e| e.to_string()).as_deref(),
            Some("Video format not supported or corrupted")
        );
        assert!(!playback.is_playing);
        assert!(!playback.is_buffering);

        let commands = player.retry();
        assert_eq!(commands.first(), Some(&MediaCommand::Reload));
        assert!(player.playback().error.is_none());
    }

    #[test]
    fn discard_returns_to_upload_state() {
        let mut player = loaded(60.0);
        player.add_subtitle("a.srt", "blob:a".to_string());
        player.on_error(99);
        assert_eq!(player.playback().error, Some(PlaybackError::Unknown));
        let commands = player.clear_source();
        assert!(!player.has_source());
        assert!(player.subtitles().is_empty());
        assert!(player.playback().error.is_none());
        assert!(commands.contains(&MediaCommand::Release("blob:video".to_string())));
        assert!(commands.contains(&MediaCommand::Release("blob:a".to_string())));
        assert_eq!(commands.last(), Some(&MediaCommand::Unload));
    }

    #[test]
    fn playback_rate_restricted_to_fixed_set() {
        let mut player = loaded(60.0);
        assert!(player.set_playback_rate(3.0).is_empty());
        assert_eq!(player.playback().playback_rate, 1.0);
        let commands = player.set_playback_rate(1.5);
        assert_eq!(commands.first(), Some(&MediaCommand::SetPlaybackRate(1.5)));
        assert_eq!(player.playback().playback_rate, 1.5);
    }

    #[test]
    fn shortcuts_dispatch_and_show_controls() {
        let mut player = playing(100.0);
        player.on_time_update(50.0);

        let commands = player.shortcut(Shortcut::SkipForward);
        assert_eq!(commands[0], MediaCommand::Seek(60.0));
        scheduled_ticket(&commands);

        let commands = player.shortcut(Shortcut::TogglePlay);
        assert_eq!(commands[0], MediaCommand::Pause);

        let commands = player.shortcut(Shortcut::ToggleMute);
        assert_eq!(commands[0], MediaCommand::SetMuted(true));

        let commands = player.shortcut(Shortcut::ToggleFullscreen);
        assert_eq!(commands, vec![MediaCommand::EnterFullscreen]);
    }

    #[test]
    fn shortcuts_ignored_without_source() {
        let mut player = PlayerController::default();
        assert!(player.shortcut(Shortcut::TogglePlay).is_empty());
        assert!(player.shortcut(Shortcut::ToggleFullscreen).is_empty());
    }

    #[test]
    fn fullscreen_state_comes_from_notifications() {
        let mut player = loaded(10.0);
        assert_eq!(player.toggle_fullscreen(), vec![MediaCommand::EnterFullscreen]);
        assert!(!player.ui().is_fullscreen);
        player.fullscreen_changed(true);
        assert_eq!(player.toggle_fullscreen(), vec![MediaCommand::ExitFullscreen]);
        player.fullscreen_changed(false);
        assert!(!player.ui().is_fullscreen);
    }

    #[test]
    fn audio_tracks_snapshot_and_selection() {
        let mut player = loaded(10.0);
        player.on_loaded_metadata(
            10.0,
            vec![AudioTrack::new(0, "English", "en"), AudioTrack::new(1, "", "de")],
        );
        assert!(player.has_audio_choice());
        assert_eq!(player.ui().selected_audio_track.as_deref(), Some("0"));
        assert_eq!(
            player.select_audio_track("1"),
            vec![MediaCommand::EnableAudioTrack(1)]
        );
        assert_eq!(player.ui().selected_audio_track.as_deref(), Some("1"));
        assert!(player.select_audio_track("7").is_empty());
    }

    #[test]
    fn metadata_duration_formats() {
        let player = loaded(125.4);
        assert_eq!(player.playback().duration, 125.4);
        assert_eq!(
            crate::player::format_time(player.playback().duration),
            "2:05"
        );
    }

    #[test]
    fn config_drives_skip_and_initial_volume() {
        let config = PlayerConfig {
            skip_seconds: 5.0,
            initial_volume: 0.0,
            ..PlayerConfig::default()
        };
        let mut player = PlayerController::new(config);
        assert!(player.playback().muted);
        player.load_video(MediaSource::new("blob:v", "v.mp4", "video/mp4"));
        player.on_loaded_metadata(30.0, Vec::new());
        player.on_time_update(10.0);
        assert_eq!(player.skip_forward(), vec![MediaCommand::Seek(15.0)]);
    }
}
