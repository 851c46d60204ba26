//! Answer evaluation
//!
//! Pure and side-effect free so it can be tested without a session.

use serde::{Deserialize, Serialize};

use super::level::{Answer, Level};

/// Outcome of checking one selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Correct,
    Wrong,
}

/// Feedback shown for the current level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Feedback {
    #[default]
    None,
    Correct,
    Wrong,
}

impl From<Verdict> for Feedback {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Correct => Feedback::Correct,
            Verdict::Wrong => Feedback::Wrong,
        }
    }
}

impl Feedback {
    pub fn verdict(&self) -> Option<Verdict> {
        match self {
            Feedback::None => None,
            Feedback::Correct => Some(Verdict::Correct),
            Feedback::Wrong => Some(Verdict::Wrong),
        }
    }

    /// Short line shown under the board
    pub fn message(&self) -> &'static str {
        match self {
            Feedback::None => "",
            Feedback::Correct => "Awesome! You found it!",
            Feedback::Wrong => "Oops! Try again.",
        }
    }
}

/// Compare a selection against the level's target by value
#[inline]
pub fn evaluate(level: &Level, selection: &Answer) -> Verdict {
    if *selection == level.target {
        Verdict::Correct
    } else {
        Verdict::Wrong
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_number_match_level_three() {
        let level = Level::numbers(3, "Find 6", 6, &[6, 9, 8, 0, 3, 5]);
        assert_eq!(evaluate(&level, &Answer::Number(9)), Verdict::Wrong);
        assert_eq!(evaluate(&level, &Answer::Number(6)), Verdict::Correct);
    }

    #[test]
    fn test_feedback_from_verdict() {
        assert_eq!(Feedback::from(Verdict::Correct), Feedback::Correct);
        assert_eq!(Feedback::from(Verdict::Wrong).verdict(), Some(Verdict::Wrong));
        assert_eq!(Feedback::None.verdict(), None);
    }

    proptest! {
        #[test]
        fn prop_evaluate_is_deterministic(target in 0u32..20, pick in 0u32..20) {
            let level = Level::numbers(1, "p", target, &[target, target + 20]);
            let before = level.clone();
            let first = evaluate(&level, &Answer::Number(pick));
            let second = evaluate(&level, &Answer::Number(pick));
            prop_assert_eq!(first, second);
            prop_assert_eq!(first == Verdict::Correct, pick == target);
            prop_assert_eq!(level, before);
        }
    }
}
