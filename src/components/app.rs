use crate::components::{Icon, VideoPlayer};
use dioxus::prelude::*;

/// Page chrome around the player.
#[component]
pub fn AppShell() -> Element {
    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                Icon { name: "film".to_string(), class: "icon brand-icon".to_string() }
                h1 { class: "app-title", "RustyReel" }
                span { class: "app-tagline", "Local video player" }
            }
            main { class: "app-main", VideoPlayer {} }
            footer { class: "app-footer",
                "Files are played straight from your device and never uploaded."
            }
        }
    }
}
