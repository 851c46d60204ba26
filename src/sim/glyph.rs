//! Guide glyphs for the number tracing pad
//!
//! The digit "2" is drawn as polyline subpaths on a 300x300 surface. Lower
//! difficulties split it into more subpaths (wider gaps to bridge).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::DifficultyError;

/// Key points of the "2": top bar, right side, diagonal, base
const TOP_LEFT: Vec2 = Vec2::new(50.0, 80.0);
const TOP_RIGHT: Vec2 = Vec2::new(150.0, 80.0);
const MID_RIGHT: Vec2 = Vec2::new(150.0, 150.0);
const BASE_LEFT: Vec2 = Vec2::new(50.0, 200.0);
const BASE_RIGHT: Vec2 = Vec2::new(150.0, 200.0);

/// Tracing difficulty (1..=3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Difficulty {
    /// Three separate strokes with wide gaps
    #[default]
    Easy,
    /// Two strokes, smaller gap
    Medium,
    /// One continuous stroke
    Full,
}

impl Difficulty {
    pub const MIN: Difficulty = Difficulty::Easy;
    pub const MAX: Difficulty = Difficulty::Full;

    pub fn level(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Full => 3,
        }
    }

    /// One step harder, saturating at `Full`
    pub fn harder(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium | Difficulty::Full => Difficulty::Full,
        }
    }

    /// One step easier, saturating at `Easy`
    pub fn easier(&self) -> Self {
        match self {
            Difficulty::Full => Difficulty::Medium,
            Difficulty::Medium | Difficulty::Easy => Difficulty::Easy,
        }
    }

    /// Caption under the pad
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "2 (easy gaps)",
            Difficulty::Medium => "2 (smaller gaps)",
            Difficulty::Full => "2 (full shape)",
        }
    }

    pub fn guide_path(&self) -> GuidePath {
        let subpaths = match self {
            Difficulty::Easy => vec![
                vec![TOP_LEFT, TOP_RIGHT],
                vec![TOP_RIGHT, MID_RIGHT],
                vec![BASE_LEFT, BASE_RIGHT],
            ],
            Difficulty::Medium => vec![
                vec![TOP_LEFT, TOP_RIGHT, MID_RIGHT],
                vec![BASE_LEFT, BASE_RIGHT],
            ],
            Difficulty::Full => vec![vec![TOP_LEFT, TOP_RIGHT, MID_RIGHT, BASE_LEFT, BASE_RIGHT]],
        };
        GuidePath { subpaths }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = DifficultyError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Difficulty::Easy),
            2 => Ok(Difficulty::Medium),
            3 => Ok(Difficulty::Full),
            other => Err(DifficultyError::OutOfRange(other)),
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.level()
    }
}

/// Reference glyph: each subpath is a connected polyline, subpaths are drawn
/// with a pen lift between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidePath {
    subpaths: Vec<Vec<Vec2>>,
}

impl GuidePath {
    pub fn subpaths(&self) -> &[Vec<Vec2>] {
        &self.subpaths
    }

    /// Number of disconnected pieces
    pub fn segment_count(&self) -> usize {
        self.subpaths.len()
    }

    pub fn is_connected(&self) -> bool {
        self.subpaths.len() == 1
    }

    /// Every straight line in drawing order
    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.subpaths
            .iter()
            .flat_map(|path| path.windows(2).map(|w| (w[0], w[1])))
    }

    /// Total inked length
    pub fn length(&self) -> f32 {
        self.lines().map(|(a, b)| a.distance(b)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_pattern_per_difficulty() {
        assert_eq!(Difficulty::Easy.guide_path().segment_count(), 3);
        assert_eq!(Difficulty::Medium.guide_path().segment_count(), 2);
        let full = Difficulty::Full.guide_path();
        assert_eq!(full.segment_count(), 1);
        assert!(full.is_connected());
        assert_eq!(full.lines().count(), 4);
    }

    #[test]
    fn test_full_shape_has_diagonal() {
        let full = Difficulty::Full.guide_path();
        let easy = Difficulty::Easy.guide_path();
        // Diagonal from (150,150) to (50,200) only exists on the full glyph
        let diagonal = MID_RIGHT.distance(BASE_LEFT);
        assert!((full.length() - easy.length() - diagonal).abs() < 1e-3);
    }

    #[test]
    fn test_try_from_rejects_undefined_levels() {
        assert_eq!(Difficulty::try_from(2), Ok(Difficulty::Medium));
        assert_eq!(Difficulty::try_from(0), Err(DifficultyError::OutOfRange(0)));
        assert_eq!(Difficulty::try_from(4), Err(DifficultyError::OutOfRange(4)));
    }

    #[test]
    fn test_harder_easier_saturate() {
        assert_eq!(Difficulty::Full.harder(), Difficulty::Full);
        assert_eq!(Difficulty::Easy.easier(), Difficulty::Easy);
        assert_eq!(Difficulty::Easy.harder().harder(), Difficulty::Full);
    }
}
