//! Level records shared by every discrete-choice game
//!
//! A level is one prompt plus a fixed row of candidate answers, exactly one of
//! which equals the target.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single candidate response a player can pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    /// A letter tile (case matters: `b` and `d` are different answers)
    Letter(char),
    /// A number tile or numeric answer
    Number(u32),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Letter(c) => write!(f, "{c}"),
            Answer::Number(n) => write!(f, "{n}"),
        }
    }
}

/// One question in a game's ordered catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Display id (1-based in the built-in catalogs). Never used for lookup.
    pub id: u32,
    /// Text shown to the player
    pub prompt: String,
    /// The single correct answer
    pub target: Answer,
    /// Candidate answers in presentation order
    pub options: Vec<Answer>,
}

impl Level {
    pub fn new(id: u32, prompt: impl Into<String>, target: Answer, options: Vec<Answer>) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            target,
            options,
        }
    }

    /// Letter level built from a string of single-char options
    pub fn letters(id: u32, prompt: impl Into<String>, target: char, options: &str) -> Self {
        Self::new(
            id,
            prompt,
            Answer::Letter(target),
            options.chars().map(Answer::Letter).collect(),
        )
    }

    /// Number level
    pub fn numbers(id: u32, prompt: impl Into<String>, target: u32, options: &[u32]) -> Self {
        Self::new(
            id,
            prompt,
            Answer::Number(target),
            options.iter().copied().map(Answer::Number).collect(),
        )
    }

    /// Whether `answer` is one of this level's tiles
    pub fn offers(&self, answer: &Answer) -> bool {
        self.options.contains(answer)
    }

    /// How many options equal the target (must be exactly 1)
    pub fn target_count(&self) -> usize {
        self.options.iter().filter(|o| **o == self.target).count()
    }

    /// Position of the target in `options`
    pub fn target_position(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.target)
    }
}
