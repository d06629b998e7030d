use super::PlayerHandle;
use crate::components::Icon;
use crate::player::{format_time, progress_percent};
use crate::web::{self, PROGRESS_TRACK_ID};
use dioxus::prelude::*;

/// Bottom control bar - progress track, transport and the right-hand cluster.
#[component]
pub(super) fn ControlBar() -> Element {
    let handle = use_context::<PlayerHandle>();
    let state = handle.state();
    let player = state.read();
    let playback = player.playback().clone();
    let ui = player.ui().clone();
    let file_name = player
        .source()
        .map(|source| source.file_name.clone())
        .unwrap_or_default();
    drop(player);

    let bar_class = if ui.controls_visible() {
        "control-bar"
    } else {
        "control-bar is-hidden"
    };

    rsx! {
        div { class: "{bar_class}",
            ProgressBar {}
            div { class: "control-row",
                div { class: "control-group",
                    PlayPauseButton {}
                    button {
                        class: "control-btn",
                        title: "Back 10 seconds (J)",
                        onclick: {
                            let handle = handle.clone();
                            move |_| handle.interact(|player| player.skip_backward())
                        },
                        Icon { name: "skip-back".to_string(), class: "icon".to_string() }
                    }
                    button {
                        class: "control-btn",
                        title: "Forward 10 seconds (L)",
                        onclick: {
                            let handle = handle.clone();
                            move |_| handle.interact(|player| player.skip_forward())
                        },
                        Icon { name: "skip-forward".to_string(), class: "icon".to_string() }
                    }
                    VolumeControl {}
                    span { class: "time-display",
                        "{format_time(playback.current_time)} / {format_time(playback.duration)}"
                    }
                }
                span { class: "file-name", title: "{file_name}", "{file_name}" }
                div { class: "control-group",
                    button {
                        class: if ui.shortcuts_hint_visible { "control-btn is-active" } else { "control-btn" },
                        title: "Keyboard shortcuts",
                        onclick: {
                            let handle = handle.clone();
                            move |_| {
                                handle
                                    .interact(|player| {
                                        player.toggle_shortcuts_hint();
                                        Vec::new()
                                    })
                            }
                        },
                        Icon { name: "keyboard".to_string(), class: "icon".to_string() }
                    }
                    button {
                        class: if ui.settings_menu_open { "control-btn is-active" } else { "control-btn" },
                        title: "Settings",
                        onclick: {
                            let handle = handle.clone();
                            move |_| handle.update(|player| player.toggle_settings_menu())
                        },
                        Icon { name: "settings".to_string(), class: "icon".to_string() }
                    }
                    button {
                        class: "control-btn",
                        title: if ui.is_fullscreen { "Exit fullscreen (F)" } else { "Fullscreen (F)" },
                        onclick: {
                            let handle = handle.clone();
                            move |_| handle.update(|player| player.toggle_fullscreen())
                        },
                        Icon {
                            name: if ui.is_fullscreen { "minimize".to_string() } else { "maximize".to_string() },
                            class: "icon".to_string(),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PlayPauseButton() -> Element {
    let handle = use_context::<PlayerHandle>();
    let is_playing = handle.state().read().playback().is_playing;

    rsx! {
        button {
            class: "control-btn play-btn",
            title: if is_playing { "Pause (K)" } else { "Play (K)" },
            onclick: move |_| handle.interact(|player| player.toggle_play()),
            if is_playing {
                Icon { name: "pause".to_string(), class: "icon".to_string() }
            } else {
                Icon { name: "play".to_string(), class: "icon".to_string() }
            }
        }
    }
}

/// Click-to-seek progress track. No drag gesture.
#[component]
fn ProgressBar() -> Element {
    let handle = use_context::<PlayerHandle>();
    let (current, duration) = {
        let player = handle.state();
        let player = player.read();
        (player.playback().current_time, player.playback().duration)
    };
    let percent = progress_percent(current, duration);

    let on_click = move |evt: MouseEvent| {
        let Some((left, width)) = web::progress_track_geometry() else {
            return;
        };
        let click_x = evt.client_coordinates().x - left;
        handle.interact(|player| player.seek_to_fraction(click_x, width));
    };

    rsx! {
        div {
            id: PROGRESS_TRACK_ID,
            class: "progress-track",
            onclick: on_click,
            div { class: "progress-fill", style: "width: {percent}%;" }
            div { class: "progress-thumb", style: "left: {percent}%;" }
        }
    }
}

#[component]
fn VolumeControl() -> Element {
    let handle = use_context::<PlayerHandle>();
    let (volume, muted) = {
        let player = handle.state();
        let player = player.read();
        (player.playback().volume, player.playback().muted)
    };
    let shown = if muted { 0.0 } else { volume };

    let on_volume_input = {
        let handle = handle.clone();
        move |e: Event<FormData>| {
            if let Ok(val) = e.value().parse::<f64>() {
                handle.interact(|player| player.set_volume(val / 100.0));
            }
        }
    };

    rsx! {
        div { class: "volume-control",
            button {
                class: "control-btn",
                title: if muted { "Unmute (M)" } else { "Mute (M)" },
                onclick: {
                    let handle = handle.clone();
                    move |_| handle.interact(|player| player.toggle_mute())
                },
                Icon {
                    name: if muted || volume == 0.0 { "volume-x".to_string() } else { "volume".to_string() },
                    class: "icon".to_string(),
                }
            }
            input {
                r#type: "range",
                min: "0",
                max: "100",
                step: "1",
                value: (shown * 100.0).round() as i32,
                class: "volume-slider",
                oninput: on_volume_input,
            }
        }
    }
}
