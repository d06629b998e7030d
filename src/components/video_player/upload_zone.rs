use super::PlayerHandle;
use crate::components::Icon;
use crate::player::{SUBTITLE_ACCEPT, VIDEO_ACCEPT};
use crate::web::{self, SUBTITLE_INPUT_ID, VIDEO_INPUT_ID};
use dioxus::prelude::*;

/// Empty state: drop target and browse button.
#[component]
pub(super) fn UploadZone(is_drag_over: bool) -> Element {
    rsx! {
        div { class: if is_drag_over { "upload-zone is-drag-over" } else { "upload-zone" },
            div { class: "upload-card",
                Icon { name: "upload".to_string(), class: "icon-xl upload-icon".to_string() }
                h2 { class: "upload-title",
                    if is_drag_over {
                        "Drop to play"
                    } else {
                        "Drop a video here"
                    }
                }
                p { class: "upload-subtitle", "You can drop a subtitle file together with the video." }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| web::open_file_picker(VIDEO_INPUT_ID),
                    Icon { name: "film".to_string(), class: "icon-sm".to_string() }
                    "Browse files"
                }
                div { class: "format-notes",
                    p { "Best support: MP4, WebM, OGG" }
                    p { "Limited support: MKV, AVI, MOV, WMV, FLV, M4V (depends on your browser)" }
                    p { "Subtitles: SRT, VTT, ASS, SSA" }
                }
            }
        }
    }
}

/// Hidden pickers shared by the upload zone and the settings menu.
#[component]
pub(super) fn FileInputs() -> Element {
    let handle = use_context::<PlayerHandle>();

    let on_video_change = {
        let handle = handle.clone();
        move |_| handle.accept_files(web::take_input_files(VIDEO_INPUT_ID))
    };
    let on_subtitle_change = move |_| handle.accept_files(web::take_input_files(SUBTITLE_INPUT_ID));

    rsx! {
        input {
            id: VIDEO_INPUT_ID,
            r#type: "file",
            accept: VIDEO_ACCEPT,
            class: "visually-hidden",
            onchange: on_video_change,
        }
        input {
            id: SUBTITLE_INPUT_ID,
            r#type: "file",
            accept: SUBTITLE_ACCEPT,
            class: "visually-hidden",
            onchange: on_subtitle_change,
        }
    }
}
