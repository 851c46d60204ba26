//! Browser platform layer
//!
//! Handles the pieces the game logic never sees:
//! - DOM element creation and event wiring
//! - One-shot timers tied to their owner's lifetime

pub mod dom;
pub mod timer;

pub use timer::Timeout;
