//! NeuroNest Games - mini learning games for children
//!
//! Core modules:
//! - `sim`: Pure game logic (level catalogs, quiz sessions, tracing pad)
//! - `renderer`: Tracing pad drawing
//! - `platform`: Browser glue (DOM helpers, cancellable timers)
//! - `games`: Static games list metadata
//! - `settings`: Page preferences

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod error;
pub mod games;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{CatalogError, DifficultyError, SettingsError};
pub use settings::Settings;
pub use sim::{QuizGame, TracingPad};

/// Game configuration constants
pub mod consts {
    /// Hearts at the start of a lives game
    pub const MAX_LIVES: u8 = 3;

    /// Tracing pad edge length (surface units, square)
    pub const PAD_SIZE: f32 = 300.0;

    /// How long the lives game shows the last verdict
    pub const FEEDBACK_FLASH_MS: i32 = 800;
}
