//! Tracing pad rendering
//!
//! `commands` is platform independent; `canvas2d` replays it in the browser.

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod commands;

pub use commands::{DrawCommand, PenStyle, frame};
