//! Playback queue state and the signal-backed controller shared by all views.

mod controller;
mod state;

pub use controller::*;
pub use state::*;
