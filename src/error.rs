//! Error types
//!
//! Gameplay itself has no recoverable errors: wrong answers are ordinary
//! outcomes. These cover catalog invariants, difficulty input, and settings.

use thiserror::Error;

/// Catalog lookup or validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A level index past the end of the catalog
    #[error("level index {index} out of range (catalog has {len} levels)")]
    LevelOutOfRange { index: usize, len: usize },

    /// A catalog with no levels
    #[error("catalog has no levels")]
    Empty,

    /// A level with an empty option row
    #[error("level {id} has no options")]
    EmptyOptions { id: u32 },

    /// A level whose options contain the target zero or several times
    #[error("level {id} offers its target {count} times, expected exactly once")]
    TargetCount { id: u32, count: usize },

    /// Two levels sharing a display id
    #[error("duplicate level id {0}")]
    DuplicateId(u32),
}

/// Tracing difficulty outside the defined set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DifficultyError {
    #[error("difficulty {0} is not defined (expected 1..=3)")]
    OutOfRange(u8),
}

/// Settings could not be parsed
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
