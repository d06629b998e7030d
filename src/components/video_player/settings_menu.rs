use super::PlayerHandle;
use crate::components::Icon;
use crate::player::{rate_label, SubtitleSelection, PLAYBACK_RATES};
use crate::web::{self, SUBTITLE_INPUT_ID, VIDEO_INPUT_ID};
use dioxus::prelude::*;

/// Settings popover: speed, subtitles, audio track and source actions.
#[component]
pub(super) fn SettingsMenu() -> Element {
    let handle = use_context::<PlayerHandle>();
    let state = handle.state();
    let player = state.read();
    let current_rate = player.playback().playback_rate;
    let subtitles = player.subtitles().to_vec();
    let selected_subtitle = player.ui().selected_subtitle.clone();
    let audio_tracks = player.audio_tracks().to_vec();
    let selected_audio = player.ui().selected_audio_track.clone();
    let has_audio_choice = player.has_audio_choice();
    drop(player);

    let subtitles_off = selected_subtitle == SubtitleSelection::Off;

    rsx! {
        div { class: "settings-menu",
            section { class: "settings-section",
                h3 { class: "settings-title", "Playback speed" }
                div { class: "rate-grid",
                    for rate in PLAYBACK_RATES {
                        button {
                            key: "{rate}",
                            class: if (rate - current_rate).abs() < 1e-6 { "menu-chip is-active" } else { "menu-chip" },
                            onclick: {
                                let handle = handle.clone();
                                move |_| handle.update(|player| player.set_playback_rate(rate))
                            },
                            "{rate_label(rate)}"
                        }
                    }
                }
            }

            section { class: "settings-section",
                h3 { class: "settings-title", "Subtitles" }
                button {
                    class: if subtitles_off { "menu-item is-active" } else { "menu-item" },
                    onclick: {
                        let mut state = state;
                        move |_| state.with_mut(|player| player.select_subtitle(SubtitleSelection::Off))
                    },
                    span { "Off" }
                    if subtitles_off {
                        Icon { name: "check".to_string(), class: "icon-sm".to_string() }
                    }
                }
                for track in subtitles.into_iter() {
                    {
                        let is_selected = selected_subtitle == SubtitleSelection::Track(track.id.clone());
                        let id = track.id.clone();
                        let mut state = state;
                        rsx! {
                            button {
                                key: "{track.id}",
                                class: if is_selected { "menu-item is-active" } else { "menu-item" },
                                onclick: move |_| {
                                    state
                                        .with_mut(|player| {
                                            player.select_subtitle(SubtitleSelection::Track(id.clone()))
                                        })
                                },
                                span { class: "menu-label", "{track.label}" }
                                span { class: "menu-meta", "{track.language}" }
                                if is_selected {
                                    Icon { name: "check".to_string(), class: "icon-sm".to_string() }
                                }
                            }
                        }
                    }
                }
                button {
                    class: "menu-item menu-action",
                    onclick: move |_| web::open_file_picker(SUBTITLE_INPUT_ID),
                    Icon { name: "subtitles".to_string(), class: "icon-sm".to_string() }
                    span { "Add subtitles (.srt, .vtt, .ass, .ssa)" }
                }
            }

            if has_audio_choice {
                section { class: "settings-section",
                    h3 { class: "settings-title", "Audio track" }
                    for track in audio_tracks.into_iter() {
                        {
                            let is_selected = selected_audio.as_deref() == Some(track.id.as_str());
                            let id = track.id.clone();
                            let handle = handle.clone();
                            rsx! {
                                button {
                                    key: "{track.id}",
                                    class: if is_selected { "menu-item is-active" } else { "menu-item" },
                                    onclick: move |_| handle.update(|player| player.select_audio_track(&id)),
                                    span { class: "menu-label", "{track.label}" }
                                    span { class: "menu-meta", "{track.language}" }
                                    if is_selected {
                                        Icon { name: "check".to_string(), class: "icon-sm".to_string() }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "settings-section",
                button {
                    class: "menu-item menu-action",
                    onclick: move |_| web::open_file_picker(VIDEO_INPUT_ID),
                    Icon { name: "film".to_string(), class: "icon-sm".to_string() }
                    span { "Open another video" }
                }
                button {
                    class: "menu-item menu-action is-danger",
                    onclick: {
                        let handle = handle.clone();
                        move |_| handle.update(|player| player.clear_source())
                    },
                    Icon { name: "x".to_string(), class: "icon-sm".to_string() }
                    span { "Close video" }
                }
            }
        }
    }
}
