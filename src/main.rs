use dioxus::prelude::*;

mod components;
mod player;
mod web;

use components::AppShell;

const PLAYER_CSS: Asset = asset!("/assets/styling/player.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "RustyReel" }
        document::Meta { name: "theme-color", content: "#0b0b0f" }
        document::Meta { name: "description", content: "Play local video files in your browser" }

        document::Stylesheet { href: PLAYER_CSS }

        AppShell {}
    }
}
