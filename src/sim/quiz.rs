//! A quiz game: one catalog plus the session playing it
//!
//! This is what a page binds to. Each page owns its own `QuizGame`.

use super::catalog::Catalog;
use super::level::{Answer, Level};
use super::policy::GameVariant;
use super::state::{GameEvent, QuizSession};
use super::step::{QuizInput, step};

#[derive(Debug, Clone)]
pub struct QuizGame {
    catalog: Catalog,
    session: QuizSession,
}

impl QuizGame {
    pub fn new(catalog: Catalog) -> Self {
        let session = QuizSession::for_catalog(&catalog);
        Self { catalog, session }
    }

    /// Game with its built-in levels
    pub fn for_variant(variant: GameVariant) -> Self {
        Self::new(Catalog::for_variant(variant))
    }

    pub fn variant(&self) -> GameVariant {
        self.catalog.variant()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Level currently on the board
    pub fn current_level(&self) -> &Level {
        self.catalog.level_clamped(self.session.level_index())
    }

    pub fn apply(&mut self, input: QuizInput) -> bool {
        step(&self.catalog, &mut self.session, &input)
    }

    pub fn select_option(&mut self, answer: Answer) -> bool {
        self.apply(QuizInput::Select(answer))
    }

    pub fn advance(&mut self) -> bool {
        self.apply(QuizInput::Advance)
    }

    pub fn reset(&mut self) {
        self.apply(QuizInput::Reset);
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.session.drain_events()
    }

    /// Progress bar fill: the current level counts as reached
    pub fn progress_percent(&self) -> f32 {
        let len = self.catalog.len().max(1) as f32;
        (self.session.level_index() + 1) as f32 / len * 100.0
    }

    /// "Level 3 of 8"
    pub fn level_label(&self) -> String {
        format!(
            "Level {} of {}",
            self.session.level_index() + 1,
            self.catalog.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::evaluate::Feedback;

    #[test]
    fn test_progress_percent() {
        let mut game = QuizGame::for_variant(GameVariant::LetterRecognition);
        assert!((game.progress_percent() - 20.0).abs() < 1e-4);
        game.select_option(Answer::Letter('A'));
        assert!((game.progress_percent() - 40.0).abs() < 1e-4);
        assert_eq!(game.level_label(), "Level 2 of 5");
    }

    #[test]
    fn test_current_level_follows_session() {
        let mut game = QuizGame::for_variant(GameVariant::NumberMatch);
        assert_eq!(game.current_level().target, Answer::Number(2));
        assert!(game.select_option(Answer::Number(2)));
        assert!(game.advance());
        assert_eq!(game.current_level().target, Answer::Number(5));
        game.reset();
        assert_eq!(game.current_level().id, 1);
        assert_eq!(game.session().feedback(), Feedback::None);
    }

    #[test]
    fn test_games_are_isolated() {
        let mut a = QuizGame::for_variant(GameVariant::NumberMatch);
        let b = QuizGame::for_variant(GameVariant::NumberMatch);
        a.select_option(Answer::Number(2));
        assert_eq!(b.session().feedback(), Feedback::None);
    }
}
