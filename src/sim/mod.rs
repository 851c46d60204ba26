//! Game logic
//!
//! Everything here is pure and synchronous:
//! - No rendering or platform dependencies
//! - No timers or I/O
//! - State changes only through explicit inputs

pub mod catalog;
pub mod evaluate;
pub mod glyph;
pub mod level;
pub mod policy;
pub mod quiz;
pub mod state;
pub mod step;
pub mod tracing_pad;

pub use catalog::Catalog;
pub use evaluate::{Feedback, Verdict, evaluate};
pub use glyph::{Difficulty, GuidePath};
pub use level::{Answer, Level};
pub use policy::{GameVariant, Policy};
pub use quiz::QuizGame;
pub use state::{GameEvent, NextAction, QuizSession, SessionPhase, SessionSummary};
pub use step::{QuizInput, reduce, step};
pub use tracing_pad::{Stroke, TracingPad};
