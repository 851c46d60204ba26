//! Quiz session state
//!
//! One session per open game page. Nothing here is persisted; a session is
//! dropped when the player leaves or resets.

use serde::{Deserialize, Serialize};

use super::catalog::Catalog;
use super::evaluate::{Feedback, Verdict};
use super::level::Answer;
use super::policy::Policy;
use crate::consts::MAX_LIVES;

/// Where the session is in the answer cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Current level has no answer yet
    AwaitingInput,
    /// Current level shows feedback
    Answered(Verdict),
    /// Out of lives, or out of levels in an auto-advancing game
    Terminal,
}

/// The button the board should offer next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NextAction {
    /// Keep answering
    None,
    /// Move to the next level
    Next,
    /// Start over
    Restart,
}

/// Things that happened during a step, drained by the front-end for sound and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Answered { level_index: usize, verdict: Verdict },
    LifeLost { remaining: u8 },
    Advanced { level_index: usize },
    Finished { score: Option<u32>, out_of_lives: bool },
    Reset,
}

/// End-of-game numbers for the results card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score: Option<u32>,
    pub total: usize,
    pub lives: Option<u8>,
}

impl SessionSummary {
    pub fn headline(&self) -> &'static str {
        if self.lives == Some(0) {
            "Keep Practicing!"
        } else {
            "Great Job!"
        }
    }
}

/// Ephemeral play-through of one game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
    pub(super) policy: Policy,
    pub(super) level_count: usize,
    pub(super) level_index: usize,
    pub(super) selection: Option<Answer>,
    pub(super) feedback: Feedback,
    pub(super) lives: Option<u8>,
    /// Correct answers, for games that keep score
    pub(super) score: Option<u32>,
    pub(super) finished: bool,
    /// Pending events (not part of the session's logical state)
    #[serde(skip)]
    pub(super) events: Vec<GameEvent>,
}

impl QuizSession {
    /// Fresh session for a catalog of `level_count` levels
    pub fn new(policy: Policy, level_count: usize) -> Self {
        Self {
            policy,
            level_count,
            level_index: 0,
            selection: None,
            feedback: Feedback::None,
            lives: policy.lives_enabled.then_some(MAX_LIVES),
            score: policy.keeps_score().then_some(0),
            finished: false,
            events: Vec::new(),
        }
    }

    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.variant().policy(), catalog.len())
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level_count(&self) -> usize {
        self.level_count
    }

    pub fn selection(&self) -> Option<Answer> {
        self.selection
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Remaining hearts, when the game uses them
    pub fn lives(&self) -> Option<u8> {
        self.lives
    }

    pub fn score(&self) -> Option<u32> {
        self.score
    }

    pub fn is_last_level(&self) -> bool {
        self.level_index + 1 >= self.level_count
    }

    pub fn phase(&self) -> SessionPhase {
        if self.finished {
            return SessionPhase::Terminal;
        }
        match self.feedback.verdict() {
            Some(verdict) => SessionPhase::Answered(verdict),
            None => SessionPhase::AwaitingInput,
        }
    }

    /// Whether new selections are currently ignored
    pub fn is_locked(&self) -> bool {
        match self.phase() {
            SessionPhase::Terminal => true,
            SessionPhase::Answered(Verdict::Correct) => !self.policy.auto_advances(),
            SessionPhase::Answered(Verdict::Wrong) => self.policy.locks_on_answer,
            SessionPhase::AwaitingInput => false,
        }
    }

    /// Next/restart affordance for the current state
    pub fn next_action(&self) -> NextAction {
        match self.phase() {
            SessionPhase::Terminal => NextAction::Restart,
            SessionPhase::Answered(Verdict::Correct) if self.is_last_level() => NextAction::Restart,
            SessionPhase::Answered(Verdict::Correct) => NextAction::Next,
            SessionPhase::Answered(Verdict::Wrong) if self.policy.locks_on_answer => {
                NextAction::Restart
            }
            SessionPhase::Answered(Verdict::Wrong) | SessionPhase::AwaitingInput => {
                NextAction::None
            }
        }
    }

    /// Whether the player has nothing left to answer
    pub fn is_complete(&self) -> bool {
        self.finished || (self.is_last_level() && self.feedback == Feedback::Correct)
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            score: self.score,
            total: self.level_count,
            lives: self.lives,
        }
    }

    /// Take pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(super) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

impl PartialEq for QuizSession {
    fn eq(&self, other: &Self) -> bool {
        self.policy == other.policy
            && self.level_count == other.level_count
            && self.level_index == other.level_index
            && self.selection == other.selection
            && self.feedback == other.feedback
            && self.lives == other.lives
            && self.score == other.score
            && self.finished == other.finished
    }
}

impl Eq for QuizSession {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::policy::GameVariant;

    #[test]
    fn test_new_session_defaults() {
        let session = QuizSession::new(Policy::LIVES, 5);
        assert_eq!(session.level_index(), 0);
        assert_eq!(session.lives(), Some(3));
        assert_eq!(session.score(), Some(0));
        assert_eq!(session.phase(), SessionPhase::AwaitingInput);
        assert_eq!(session.next_action(), NextAction::None);

        let session = QuizSession::new(Policy::FREE_RETRY, 8);
        assert_eq!(session.lives(), None);
        assert_eq!(session.score(), Some(0));

        let session = QuizSession::new(Policy::LOCKING, 6);
        assert_eq!(session.score(), None);
    }

    #[test]
    fn test_for_catalog_uses_variant_policy() {
        let catalog = Catalog::for_variant(GameVariant::LetterDetective);
        let session = QuizSession::for_catalog(&catalog);
        assert_eq!(session.policy(), Policy::LOCKING);
        assert_eq!(session.level_count(), 6);
    }

    #[test]
    fn test_summary_headline() {
        let won = SessionSummary { score: Some(4), total: 5, lives: Some(2) };
        assert_eq!(won.headline(), "Great Job!");
        let lost = SessionSummary { score: Some(1), total: 5, lives: Some(0) };
        assert_eq!(lost.headline(), "Keep Practicing!");
    }

    #[test]
    fn test_equality_ignores_pending_events() {
        let mut a = QuizSession::new(Policy::LOCKING, 3);
        let b = a.clone();
        a.push_event(GameEvent::Reset);
        assert_eq!(a, b);
    }
}
