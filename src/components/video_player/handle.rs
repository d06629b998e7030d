use crate::player::{
    classify_drop, MediaCommand, MediaSource, PickedFile, PlayerController,
};
use crate::web::{self, HideTimer, SelectedFile};
use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;

/// Shared access to the player state plus the plumbing that carries the
/// controller's commands out to the browser.
#[derive(Clone)]
pub struct PlayerHandle {
    state: Signal<PlayerController>,
    timer: HideTimer,
}

impl PlayerHandle {
    pub fn new(state: Signal<PlayerController>, timer: HideTimer) -> Self {
        Self { state, timer }
    }

    pub fn state(&self) -> Signal<PlayerController> {
        self.state
    }

    /// Mutate the controller and execute whatever it asks for.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut PlayerController) -> Vec<MediaCommand>,
    {
        let mut state = self.state;
        let commands = state.with_mut(f);
        self.dispatch(commands);
    }

    /// Like [`Self::update`], then counts as user activity for auto-hide.
    pub fn interact<F>(&self, f: F)
    where
        F: FnOnce(&mut PlayerController) -> Vec<MediaCommand>,
    {
        self.update(|player| {
            let mut commands = f(player);
            commands.extend(player.activity());
            commands
        });
    }

    pub fn dispatch(&self, commands: Vec<MediaCommand>) {
        for command in commands {
            match command {
                MediaCommand::ScheduleHide(ticket) => {
                    let mut state = self.state;
                    let delay_ms = state.peek().config().hide_delay_ms;
                    let runtime = Runtime::current();
                    self.timer.schedule(delay_ms, move || {
                        let _guard = RuntimeGuard::new(runtime);
                        state.with_mut(|player| player.hide_timer_elapsed(ticket));
                    });
                }
                MediaCommand::CancelHide => self.timer.cancel(),
                other => web::execute(&other),
            }
        }
    }

    /// Take a picker selection or drop payload: the first video replaces the
    /// current source, then the first subtitle file is attached to it.
    pub fn accept_files(&self, files: Vec<SelectedFile>) {
        let picked: Vec<PickedFile> = files.iter().map(|file| file.info.clone()).collect();
        let selection = classify_drop(&picked);
        if selection.is_empty() {
            tracing::info!(count = files.len(), "no playable files in selection");
            return;
        }

        let mut video_loaded = false;
        if let Some(file) = selection.video.and_then(|index| files.get(index)) {
            match file.object_url() {
                Ok(url) => {
                    let source = MediaSource::new(url, &file.info.name, &file.info.mime_type);
                    self.update(|player| player.load_video(source));
                    video_loaded = true;
                }
                Err(err) => tracing::warn!(file = %file.info.name, %err, "could not open video"),
            }
        }

        let subtitle = selection.subtitle_after(video_loaded);
        if let Some(file) = subtitle.and_then(|index| files.get(index)) {
            if !self.state.peek().has_source() {
                tracing::info!(file = %file.info.name, "subtitle ignored, no video loaded");
                return;
            }
            match file.object_url() {
                Ok(url) => self.update(|player| player.add_subtitle(&file.info.name, url)),
                Err(err) => {
                    tracing::warn!(file = %file.info.name, %err, "could not open subtitle")
                }
            }
        }
    }
}
