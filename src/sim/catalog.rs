//! Level catalogs
//!
//! Each game gets an ordered, read-only list of levels built at startup.
//! Traversal is by position; level ids are for display only.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::level::Level;
use super::policy::GameVariant;
use crate::error::CatalogError;

/// Ordered levels for one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogData")]
pub struct Catalog {
    variant: GameVariant,
    levels: Vec<Level>,
}

/// Unchecked wire form; loading goes through `Catalog::new`
#[derive(Deserialize)]
struct CatalogData {
    variant: GameVariant,
    levels: Vec<Level>,
}

impl TryFrom<CatalogData> for Catalog {
    type Error = CatalogError;

    fn try_from(data: CatalogData) -> Result<Self, Self::Error> {
        Catalog::new(data.variant, data.levels)
    }
}

impl Catalog {
    /// Build and validate a catalog
    pub fn new(variant: GameVariant, levels: Vec<Level>) -> Result<Self, CatalogError> {
        let catalog = Self { variant, levels };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Built-in catalog for a game
    pub fn for_variant(variant: GameVariant) -> Self {
        let levels = match variant {
            GameVariant::LetterRecognition => letter_recognition_levels(),
            GameVariant::LetterDetective => letter_detective_levels(),
            GameVariant::NumberMatch => number_match_levels(),
            GameVariant::FocusChallenge => focus_challenge_levels(),
        };
        // Built-in tables are checked by tests; skip re-validation here
        Self { variant, levels }
    }

    pub fn variant(&self) -> GameVariant {
        self.variant
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Index of the final level
    pub fn last_index(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    /// Level at `index`
    pub fn level(&self, index: usize) -> Result<&Level, CatalogError> {
        self.levels.get(index).ok_or(CatalogError::LevelOutOfRange {
            index,
            len: self.levels.len(),
        })
    }

    /// Level at `index`, for callers that already guarantee the bound.
    ///
    /// Panics in debug builds when the bound is broken; release builds log
    /// and fall back to the last level.
    pub fn level_clamped(&self, index: usize) -> &Level {
        match self.level(index) {
            Ok(level) => level,
            Err(err) => {
                debug_assert!(false, "{err}");
                log::error!("{}: {err}, clamping", self.variant.slug());
                &self.levels[self.last_index()]
            }
        }
    }

    /// Check every catalog invariant
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.levels.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(self.levels.len());
        for level in &self.levels {
            if !seen.insert(level.id) {
                return Err(CatalogError::DuplicateId(level.id));
            }
            if level.options.is_empty() {
                return Err(CatalogError::EmptyOptions { id: level.id });
            }
            let count = level.target_count();
            if count != 1 {
                return Err(CatalogError::TargetCount { id: level.id, count });
            }
        }
        Ok(())
    }
}

fn letter_recognition_levels() -> Vec<Level> {
    const PROMPT: &str = "Which letter matches?";
    vec![
        Level::letters(1, PROMPT, 'A', "ABDP"),
        Level::letters(2, PROMPT, 'B', "DBPR"),
        Level::letters(3, PROMPT, 'C', "OQCG"),
        Level::letters(4, PROMPT, 'D', "BPRD"),
        Level::letters(5, PROMPT, 'E', "FELT"),
    ]
}

fn letter_detective_levels() -> Vec<Level> {
    vec![
        Level::letters(1, "Find the letter C", 'C', "ABCDEF"),
        Level::letters(2, "Find the letter b", 'b', "dbpqhk"),
        Level::letters(3, "Find the letter q", 'q', "pdbqgo"),
        Level::letters(4, "Find the letter M", 'M', "NWMVHA"),
        Level::letters(5, "Find the letter u", 'u', "nmuvwr"),
        Level::letters(6, "Find the letter E", 'E', "FLTEHI"),
    ]
}

fn number_match_levels() -> Vec<Level> {
    const PROMPT: &str = "Choose the correct number";
    vec![
        Level::numbers(1, PROMPT, 2, &[2, 3, 5, 7, 8, 9]),
        Level::numbers(2, PROMPT, 5, &[3, 5, 6, 8, 9, 2]),
        Level::numbers(3, PROMPT, 6, &[6, 9, 8, 0, 3, 5]),
        Level::numbers(4, PROMPT, 9, &[6, 9, 8, 5, 0, 7]),
        Level::numbers(5, PROMPT, 0, &[0, 6, 9, 8, 3, 5]),
        Level::numbers(6, PROMPT, 7, &[1, 4, 7, 9, 2, 5]),
        Level::numbers(7, PROMPT, 4, &[4, 7, 1, 9, 6, 8]),
        Level::numbers(8, PROMPT, 8, &[8, 6, 9, 0, 3, 5]),
    ]
}

fn focus_challenge_levels() -> Vec<Level> {
    vec![
        Level::numbers(
            1,
            "A butterfly lands on 2 flowers, then 1 more. How many flowers?",
            3,
            &[2, 3, 4, 5],
        ),
        Level::numbers(
            2,
            "4 butterflies are in the garden. 2 fly away. How many are left?",
            2,
            &[1, 2, 3, 6],
        ),
        Level::numbers(
            3,
            "A butterfly has 2 wings. How many wings do 3 butterflies have?",
            6,
            &[5, 6, 8, 9],
        ),
        Level::numbers(
            4,
            "3 red butterflies and 4 blue butterflies meet. How many butterflies?",
            7,
            &[1, 6, 7, 12],
        ),
        Level::numbers(
            5,
            "A butterfly flaps its wings 5 times, then 5 more. How many flaps?",
            10,
            &[5, 9, 10, 55],
        ),
    ]
}
