//! Bridge between the player controller and the browser.
//!
//! Only wasm32 builds talk to a real DOM; other targets get inert
//! stand-ins so the component tree still compiles for desktop builds.

use thiserror::Error;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(not(target_arch = "wasm32"))]
mod fallback;

#[cfg(target_arch = "wasm32")]
pub use dom::*;
#[cfg(not(target_arch = "wasm32"))]
pub use fallback::*;

pub const VIDEO_ID: &str = "rustyreel-video";
pub const CONTAINER_ID: &str = "rustyreel-player";
pub const PROGRESS_TRACK_ID: &str = "rustyreel-progress";
pub const VIDEO_INPUT_ID: &str = "rustyreel-video-input";
pub const SUBTITLE_INPUT_ID: &str = "rustyreel-subtitle-input";

#[derive(Debug, Error)]
pub enum WebError {
    #[error("no window object available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(&'static str),
    #[error("object URL failure: {0}")]
    ObjectUrl(String),
    #[error("fullscreen request rejected: {0}")]
    Fullscreen(String),
    #[error("could not attach {0} listener: {1}")]
    Listener(&'static str, String),
    #[error("not supported on this platform")]
    Unsupported,
}
