//! The video player: native `<video>` element, custom controls, overlays and
//! file intake.

use crate::player::PlayerController;
use crate::web::{self, HideTimer, CONTAINER_ID, VIDEO_ID};
use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
use std::rc::Rc;

mod controls;
mod handle;
mod overlays;
mod settings_menu;
mod upload_zone;

pub use handle::PlayerHandle;

use controls::ControlBar;
use overlays::{BufferingIndicator, ErrorOverlay, ShortcutsHint};
use settings_menu::SettingsMenu;
use upload_zone::{FileInputs, UploadZone};

/// Keyboard and fullscreen listeners for the player's lifetime.
fn install_listeners(handle: PlayerHandle) -> Vec<web::EventListenerGuard> {
    let runtime = Runtime::current();
    let mut guards = Vec::new();

    let keys_runtime = runtime.clone();
    let keys_handle = handle.clone();
    match web::listen_shortcuts(move |shortcut| {
        let _guard = RuntimeGuard::new(keys_runtime.clone());
        if !keys_handle.state().peek().has_source() {
            return false;
        }
        keys_handle.update(|player| player.shortcut(shortcut));
        true
    }) {
        Ok(guard) => guards.push(guard),
        Err(err) => tracing::debug!(%err, "keyboard shortcuts unavailable"),
    }

    let mut state = handle.state();
    match web::listen_fullscreen(move |is_fullscreen| {
        let _guard = RuntimeGuard::new(runtime.clone());
        state.with_mut(|player| player.fullscreen_changed(is_fullscreen));
    }) {
        Ok(guard) => guards.push(guard),
        Err(err) => tracing::debug!(%err, "fullscreen notifications unavailable"),
    }

    guards
}

#[component]
pub fn VideoPlayer() -> Element {
    let state = use_signal(|| PlayerController::new(web::load_config()));
    let timer = use_hook(HideTimer::default);
    let handle = use_hook(|| PlayerHandle::new(state, timer.clone()));
    use_context_provider(|| handle.clone());

    // Listener guards live in hook storage and detach when the player unmounts.
    {
        let handle = handle.clone();
        use_hook(move || Rc::new(install_listeners(handle)));
    }
    {
        let timer = timer.clone();
        use_drop(move || timer.cancel());
    }

    // Text tracks only exist once their <track> elements are in the DOM, so
    // the selection is applied after render.
    let active_subtitle = use_memo(move || {
        let player = state.read();
        (player.active_subtitle_index(), player.subtitles().len())
    });
    use_effect(move || {
        let (active, _count) = active_subtitle();
        web::apply_subtitle_mode(active);
    });

    let player = state.read();
    let has_source = player.has_source();
    let playback = player.playback().clone();
    let ui = player.ui().clone();
    let subtitles = player.subtitles().to_vec();
    let active_subtitle_id = player
        .active_subtitle_index()
        .and_then(|index| subtitles.get(index))
        .map(|track| track.id.clone());
    drop(player);

    let shell_class = format!(
        "player-shell{}{}{}",
        if ui.is_fullscreen { " is-fullscreen" } else { "" },
        if ui.is_drag_over { " is-drag-over" } else { "" },
        if has_source && !ui.controls_visible() { " controls-hidden" } else { "" },
    );

    let on_mouse_move = {
        let handle = handle.clone();
        move |_| handle.update(|player| player.activity())
    };
    let on_mouse_leave = {
        let handle = handle.clone();
        move |_| handle.update(|player| player.pointer_leave())
    };
    let on_drag_over = move |evt: DragEvent| {
        evt.prevent_default();
    };
    let on_drag_enter = {
        let mut state = state;
        move |evt: DragEvent| {
            evt.prevent_default();
            state.with_mut(|player| player.drag_enter());
        }
    };
    let on_drag_leave = {
        let mut state = state;
        move |_| state.with_mut(|player| player.drag_leave())
    };
    let on_drop = {
        let handle = handle.clone();
        let mut state = state;
        move |evt: DragEvent| {
            evt.prevent_default();
            state.with_mut(|player| player.drag_leave());
            handle.accept_files(web::dropped_files(&evt));
        }
    };

    let on_video_click = {
        let handle = handle.clone();
        move |evt: MouseEvent| {
            let clicks = web::click_count(&evt);
            handle.interact(|player| player.video_click(clicks))
        }
    };
    let on_video_double_click = {
        let handle = handle.clone();
        move |_| handle.update(|player| player.toggle_fullscreen())
    };
    let on_mounted = {
        let handle = handle.clone();
        move |_| handle.dispatch(state.peek().initial_commands())
    };

    let on_load_start = {
        let mut state = state;
        move |_| state.with_mut(|player| player.on_load_start())
    };
    let on_loaded_metadata = {
        let mut state = state;
        move |_| {
            let duration = web::media_snapshot().map(|s| s.duration).unwrap_or(0.0);
            let tracks = web::audio_tracks();
            state.with_mut(|player| player.on_loaded_metadata(duration, tracks));
        }
    };
    let on_time_update = {
        let mut state = state;
        move |_| {
            if let Some(snapshot) = web::media_snapshot() {
                state.with_mut(|player| player.on_time_update(snapshot.current_time));
            }
        }
    };
    let on_play = {
        let handle = handle.clone();
        move |_| handle.update(|player| player.on_play())
    };
    let on_pause = {
        let handle = handle.clone();
        move |_| handle.update(|player| player.on_pause())
    };
    let on_ended = {
        let handle = handle.clone();
        move |_| handle.update(|player| player.on_ended())
    };
    let on_waiting = {
        let mut state = state;
        move |_| state.with_mut(|player| player.on_waiting())
    };
    let on_can_play = {
        let mut state = state;
        move |_| state.with_mut(|player| player.on_can_play())
    };
    let on_playing = {
        let mut state = state;
        move |_| state.with_mut(|player| player.on_can_play())
    };
    let on_volume_change = {
        let mut state = state;
        move |_| {
            if let Some(snapshot) = web::media_snapshot() {
                state.with_mut(|player| player.on_volume_change(snapshot.volume, snapshot.muted));
            }
        }
    };
    let on_error = {
        let handle = handle.clone();
        move |_| {
            // Removing the source on discard can surface a spurious error.
            if !handle.state().peek().has_source() {
                return;
            }
            let code = web::media_error_code().unwrap_or(0);
            handle.update(|player| player.on_error(code));
        }
    };

    rsx! {
        div {
            id: CONTAINER_ID,
            class: "{shell_class}",
            onmousemove: on_mouse_move,
            onmouseleave: on_mouse_leave,
            ondragover: on_drag_over,
            ondragenter: on_drag_enter,
            ondragleave: on_drag_leave,
            ondrop: on_drop,

            video {
                id: VIDEO_ID,
                class: if has_source { "player-video" } else { "player-video is-empty" },
                preload: "metadata",
                playsinline: true,
                onclick: on_video_click,
                ondoubleclick: on_video_double_click,
                onmounted: on_mounted,
                onloadstart: on_load_start,
                onloadedmetadata: on_loaded_metadata,
                ontimeupdate: on_time_update,
                onplay: on_play,
                onpause: on_pause,
                onended: on_ended,
                onwaiting: on_waiting,
                oncanplay: on_can_play,
                onplaying: on_playing,
                onvolumechange: on_volume_change,
                onerror: on_error,
                for subtitle in subtitles.iter() {
                    track {
                        key: "{subtitle.id}",
                        kind: "subtitles",
                        src: "{subtitle.url}",
                        label: "{subtitle.label}",
                        srclang: "und",
                        default: active_subtitle_id.as_deref() == Some(subtitle.id.as_str()),
                    }
                }
            }

            if !has_source {
                UploadZone { is_drag_over: ui.is_drag_over }
            } else {
                if playback.is_buffering && playback.error.is_none() {
                    BufferingIndicator {}
                }
                if let Some(error) = playback.error {
                    ErrorOverlay { error }
                }
                if ui.shortcuts_hint_visible {
                    ShortcutsHint {}
                }
                if ui.settings_menu_open {
                    SettingsMenu {}
                }
                ControlBar {}
            }

            FileInputs {}
        }
    }
}
