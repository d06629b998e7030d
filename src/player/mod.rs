//! Platform-independent player state: the controller state machine and the
//! small pieces of logic it is built from.

mod config;
mod controller;
mod error;
mod media;
mod shortcuts;
mod state;
mod time;
mod visibility;

pub use config::*;
pub use controller::*;
pub use error::*;
pub use media::*;
pub use shortcuts::*;
pub use state::*;
pub use time::*;
pub use visibility::*;
