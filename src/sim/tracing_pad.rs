//! Number tracing pad
//!
//! Freehand strokes over a guide glyph. Practice only: nothing is scored.
//! Points are surface coordinates (pointer offset within the pad).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::glyph::{Difficulty, GuidePath};
use crate::consts::PAD_SIZE;

/// One continuous pen-down stroke
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub points: Vec<Vec2>,
}

impl Stroke {
    fn starting_at(point: Vec2) -> Self {
        Self {
            points: vec![point],
        }
    }

    /// Last captured point
    pub fn tip(&self) -> Option<Vec2> {
        self.points.last().copied()
    }
}

/// Tracing surface state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TracingPad {
    difficulty: Difficulty,
    guide: GuidePath,
    strokes: Vec<Stroke>,
    stroke_in_progress: bool,
    size: Vec2,
}

impl Default for TracingPad {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

impl TracingPad {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            guide: difficulty.guide_path(),
            strokes: Vec::new(),
            stroke_in_progress: false,
            size: Vec2::splat(PAD_SIZE),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn guide(&self) -> &GuidePath {
        &self.guide
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn stroke_in_progress(&self) -> bool {
        self.stroke_in_progress
    }

    /// Switch guide glyph. A new difficulty wipes the pad; the same one is a no-op.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if difficulty == self.difficulty {
            return false;
        }
        self.difficulty = difficulty;
        self.guide = difficulty.guide_path();
        self.strokes.clear();
        self.stroke_in_progress = false;
        log::debug!("tracing difficulty -> {}", difficulty.level());
        true
    }

    pub fn next_difficulty(&mut self) -> bool {
        self.set_difficulty(self.difficulty.harder())
    }

    pub fn previous_difficulty(&mut self) -> bool {
        self.set_difficulty(self.difficulty.easier())
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(Vec2::ZERO).all() && point.cmple(self.size).all()
    }

    /// Pen down. Ignored outside the pad.
    pub fn begin_stroke(&mut self, point: Vec2) -> bool {
        if !self.contains(point) {
            return false;
        }
        self.strokes.push(Stroke::starting_at(point));
        self.stroke_in_progress = true;
        true
    }

    /// Pen moved. Leaving the pad ends the stroke.
    pub fn extend_stroke(&mut self, point: Vec2) -> bool {
        if !self.stroke_in_progress {
            return false;
        }
        if !self.contains(point) {
            self.end_stroke();
            return false;
        }
        match self.strokes.last_mut() {
            Some(stroke) => {
                stroke.points.push(point);
                true
            }
            None => {
                self.stroke_in_progress = false;
                false
            }
        }
    }

    /// Pen up (or pointer left the pad)
    pub fn end_stroke(&mut self) {
        self.stroke_in_progress = false;
    }

    pub fn clear_strokes(&mut self) {
        self.strokes.clear();
        self.stroke_in_progress = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_lifecycle() {
        let mut pad = TracingPad::default();
        assert!(!pad.extend_stroke(Vec2::new(10.0, 10.0)));
        assert!(pad.begin_stroke(Vec2::new(50.0, 80.0)));
        assert!(pad.stroke_in_progress());
        assert!(pad.extend_stroke(Vec2::new(100.0, 80.0)));
        assert!(pad.extend_stroke(Vec2::new(150.0, 80.0)));
        pad.end_stroke();
        pad.end_stroke();
        assert!(!pad.stroke_in_progress());
        assert!(!pad.extend_stroke(Vec2::new(150.0, 150.0)));

        assert_eq!(pad.strokes().len(), 1);
        assert_eq!(pad.strokes()[0].points.len(), 3);
        assert_eq!(pad.strokes()[0].tip(), Some(Vec2::new(150.0, 80.0)));
    }

    #[test]
    fn test_leaving_pad_ends_stroke() {
        let mut pad = TracingPad::default();
        pad.begin_stroke(Vec2::new(290.0, 150.0));
        assert!(!pad.extend_stroke(Vec2::new(310.0, 150.0)));
        assert!(!pad.stroke_in_progress());
        assert_eq!(pad.strokes()[0].points.len(), 1);
    }

    #[test]
    fn test_begin_outside_ignored() {
        let mut pad = TracingPad::default();
        assert!(!pad.begin_stroke(Vec2::new(-1.0, 5.0)));
        assert!(pad.strokes().is_empty());
        assert!(!pad.stroke_in_progress());
    }

    #[test]
    fn test_set_difficulty_idempotent() {
        let mut pad = TracingPad::default();
        pad.begin_stroke(Vec2::new(60.0, 80.0));
        pad.end_stroke();

        assert!(pad.set_difficulty(Difficulty::Full));
        assert_eq!(pad.guide().segment_count(), 1);
        assert!(pad.strokes().is_empty());
        let once = pad.clone();
        assert!(!pad.set_difficulty(Difficulty::Full));
        assert_eq!(pad, once);
    }

    #[test]
    fn test_same_difficulty_keeps_strokes() {
        let mut pad = TracingPad::new(Difficulty::Easy);
        pad.begin_stroke(Vec2::new(60.0, 80.0));
        assert!(!pad.set_difficulty(Difficulty::Easy));
        assert_eq!(pad.strokes().len(), 1);
        assert!(pad.stroke_in_progress());
    }

    #[test]
    fn test_difficulty_buttons_clamp() {
        let mut pad = TracingPad::new(Difficulty::Easy);
        assert_eq!(pad.guide().segment_count(), 3);
        assert!(!pad.previous_difficulty());
        assert!(pad.next_difficulty());
        assert!(pad.next_difficulty());
        assert!(!pad.next_difficulty());
        assert_eq!(pad.difficulty().level(), 3);
    }

    #[test]
    fn test_clear_strokes() {
        let mut pad = TracingPad::default();
        pad.begin_stroke(Vec2::new(1.0, 1.0));
        pad.clear_strokes();
        assert!(pad.strokes().is_empty());
        assert!(!pad.extend_stroke(Vec2::new(2.0, 2.0)));
    }
}
