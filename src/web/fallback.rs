// Inert stand-ins for non-browser targets.
use dioxus::prelude::*;

use super::WebError;
use crate::player::{AudioTrack, MediaCommand, PickedFile, PlayerConfig, Shortcut};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaSnapshot {
    pub current_time: f64,
    pub duration: f64,
    pub volume: f64,
    pub muted: bool,
}

pub fn media_snapshot() -> Option<MediaSnapshot> {
    None
}

pub fn media_error_code() -> Option<u16> {
    None
}

pub fn audio_tracks() -> Vec<AudioTrack> {
    Vec::new()
}

pub fn apply_subtitle_mode(_active: Option<usize>) {}

pub fn is_fullscreen() -> bool {
    false
}

pub fn execute(command: &MediaCommand) {
    tracing::debug!(?command, "no media element on this platform");
}

#[derive(Clone, Default)]
pub struct HideTimer;

impl HideTimer {
    pub fn schedule<F>(&self, _delay_ms: u32, _callback: F)
    where
        F: FnOnce() + 'static,
    {
    }

    pub fn cancel(&self) {}
}

pub fn load_config() -> PlayerConfig {
    PlayerConfig::default()
}

pub fn progress_track_geometry() -> Option<(f64, f64)> {
    None
}

#[derive(Clone)]
pub struct SelectedFile {
    pub info: PickedFile,
}

impl SelectedFile {
    pub fn object_url(&self) -> Result<String, WebError> {
        Err(WebError::Unsupported)
    }
}

pub fn take_input_files(_input_id: &str) -> Vec<SelectedFile> {
    Vec::new()
}

pub fn dropped_files(_evt: &DragEvent) -> Vec<SelectedFile> {
    Vec::new()
}

pub fn click_count(_evt: &MouseEvent) -> u32 {
    1
}

pub fn open_file_picker(_input_id: &str) {}

pub struct EventListenerGuard;

pub fn listen_shortcuts<F>(_handler: F) -> Result<EventListenerGuard, WebError>
where
    F: FnMut(Shortcut) -> bool + 'static,
{
    Err(WebError::Unsupported)
}

pub fn listen_fullscreen<F>(_handler: F) -> Result<EventListenerGuard, WebError>
where
    F: FnMut(bool) + 'static,
{
    Err(WebError::Unsupported)
}
