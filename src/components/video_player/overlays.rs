use super::PlayerHandle;
use crate::components::Icon;
use crate::player::{PlaybackError, SHORTCUT_HINTS};
use dioxus::prelude::*;

#[component]
pub(super) fn BufferingIndicator() -> Element {
    rsx! {
        div { class: "overlay-center",
            Icon { name: "loader".to_string(), class: "icon-xl".to_string() }
        }
    }
}

/// Playback failure with the two recovery paths: reload or discard.
#[component]
pub(super) fn ErrorOverlay(error: PlaybackError) -> Element {
    let handle = use_context::<PlayerHandle>();
    let message = error.to_string();

    rsx! {
        div { class: "error-overlay",
            div { class: "error-card",
                Icon { name: "alert".to_string(), class: "icon-xl error-icon".to_string() }
                p { class: "error-message", "{message}" }
                p { class: "error-hint", "{error.hint()}" }
                div { class: "error-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: {
                            let handle = handle.clone();
                            move |_| handle.update(|player| player.retry())
                        },
                        Icon { name: "refresh".to_string(), class: "icon-sm".to_string() }
                        "Try again"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| handle.update(|player| player.clear_source()),
                        Icon { name: "upload".to_string(), class: "icon-sm".to_string() }
                        "Choose another file"
                    }
                }
            }
        }
    }
}

#[component]
pub(super) fn ShortcutsHint() -> Element {
    let mut state = use_context::<PlayerHandle>().state();

    rsx! {
        div { class: "shortcuts-hint",
            div { class: "shortcuts-header",
                h3 { class: "settings-title", "Keyboard shortcuts" }
                button {
                    class: "control-btn",
                    title: "Close",
                    onclick: move |_| state.with_mut(|player| player.toggle_shortcuts_hint()),
                    Icon { name: "x".to_string(), class: "icon-sm".to_string() }
                }
            }
            ul { class: "shortcuts-list",
                for (keys, action) in SHORTCUT_HINTS {
                    li { key: "{keys}",
                        kbd { "{keys}" }
                        span { "{action}" }
                    }
                }
            }
        }
    }
}
