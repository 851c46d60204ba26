//! Per-game answer policies
//!
//! Every quiz game runs the same session state machine; the policy decides
//! what happens after an answer.

use serde::{Deserialize, Serialize};

/// How a session reacts to answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Once a level is answered, further selections are ignored
    pub locks_on_answer: bool,
    /// Wrong answers cost a life; running out ends the session
    pub lives_enabled: bool,
    /// Wrong answers leave the board open for another try
    pub retry_allowed: bool,
}

impl Policy {
    /// Answer once per level; a wrong answer leaves only restart
    pub const LOCKING: Policy = Policy {
        locks_on_answer: true,
        lives_enabled: false,
        retry_allowed: false,
    };

    /// Keep picking until correct, then press Next
    pub const FREE_RETRY: Policy = Policy {
        locks_on_answer: false,
        lives_enabled: false,
        retry_allowed: true,
    };

    /// Every answer moves on; wrong ones cost a heart
    pub const LIVES: Policy = Policy {
        locks_on_answer: false,
        lives_enabled: true,
        retry_allowed: false,
    };

    /// Answers move straight to the next level without a Next press
    pub fn auto_advances(&self) -> bool {
        !self.locks_on_answer && !self.retry_allowed
    }

    /// Whether sessions count correct answers. One-shot boards don't.
    pub fn keeps_score(&self) -> bool {
        !self.locks_on_answer
    }
}

/// The quiz games on offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameVariant {
    /// Letter matching with three hearts
    LetterRecognition,
    /// Find the letter among look-alikes; one shot per level
    LetterDetective,
    /// Find the number among look-alikes
    NumberMatch,
    /// Butterfly story math
    FocusChallenge,
}

impl GameVariant {
    pub const ALL: [GameVariant; 4] = [
        GameVariant::LetterRecognition,
        GameVariant::LetterDetective,
        GameVariant::NumberMatch,
        GameVariant::FocusChallenge,
    ];

    pub fn policy(&self) -> Policy {
        match self {
            GameVariant::LetterRecognition => Policy::LIVES,
            GameVariant::LetterDetective => Policy::LOCKING,
            GameVariant::NumberMatch | GameVariant::FocusChallenge => Policy::FREE_RETRY,
        }
    }

    /// Page slug, matching the Games catalog ids
    pub fn slug(&self) -> &'static str {
        match self {
            GameVariant::LetterRecognition => "letter-recognition",
            GameVariant::LetterDetective => "letter-detective",
            GameVariant::NumberMatch => "number-match",
            GameVariant::FocusChallenge => "focus-challenge",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.slug() == s)
    }

    pub fn title(&self) -> &'static str {
        match self {
            GameVariant::LetterRecognition => "Letter Recognition",
            GameVariant::LetterDetective => "Letter Detective",
            GameVariant::NumberMatch => "Number Explorer",
            GameVariant::FocusChallenge => "Butterfly Focus",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_lives_policy_auto_advances() {
        assert!(Policy::LIVES.auto_advances());
        assert!(!Policy::LOCKING.auto_advances());
        assert!(!Policy::FREE_RETRY.auto_advances());
    }

    #[test]
    fn test_one_shot_boards_keep_no_score() {
        assert!(!Policy::LOCKING.keeps_score());
        assert!(Policy::FREE_RETRY.keeps_score());
        assert!(Policy::LIVES.keeps_score());
    }

    #[test]
    fn test_slug_round_trip() {
        for variant in GameVariant::ALL {
            assert_eq!(GameVariant::from_slug(variant.slug()), Some(variant));
        }
        assert_eq!(GameVariant::from_slug("number-tracing"), None);
    }
}
