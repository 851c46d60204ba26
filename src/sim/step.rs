//! Session transitions
//!
//! `step` applies one input to a session in place; `reduce` is the pure
//! `(state, input) -> state` form. Both are synchronous and never fail:
//! inputs that don't apply are ignored.

use serde::{Deserialize, Serialize};

use super::catalog::Catalog;
use super::evaluate::{Feedback, Verdict, evaluate};
use super::level::Answer;
use super::state::{GameEvent, QuizSession};

/// A player action on a quiz board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizInput {
    /// Tap an option tile
    Select(Answer),
    /// Press "Next Level"
    Advance,
    /// Press "Restart" / "Play Again"
    Reset,
}

/// Apply one input. Returns true if the session changed.
pub fn step(catalog: &Catalog, session: &mut QuizSession, input: &QuizInput) -> bool {
    match *input {
        QuizInput::Select(answer) => select(catalog, session, answer),
        QuizInput::Advance => advance(session),
        QuizInput::Reset => {
            reset(session);
            true
        }
    }
}

/// Pure transition: returns the next session, leaving `session` untouched
pub fn reduce(catalog: &Catalog, session: &QuizSession, input: &QuizInput) -> QuizSession {
    let mut next = session.clone();
    step(catalog, &mut next, input);
    next
}

fn select(catalog: &Catalog, session: &mut QuizSession, answer: Answer) -> bool {
    if session.is_locked() {
        log::debug!("select {answer} ignored: board locked");
        return false;
    }

    let level = catalog.level_clamped(session.level_index);
    if !level.offers(&answer) {
        log::debug!("select {answer} ignored: not an option on level {}", level.id);
        return false;
    }

    let verdict = evaluate(level, &answer);
    session.selection = Some(answer);
    session.feedback = Feedback::from(verdict);
    session.push_event(GameEvent::Answered {
        level_index: session.level_index,
        verdict,
    });
    log::debug!("level {} answered {answer}: {verdict:?}", level.id);

    match verdict {
        Verdict::Correct => {
            if let Some(score) = session.score.as_mut() {
                *score += 1;
            }
        }
        Verdict::Wrong => {
            if let Some(lives) = session.lives.as_mut() {
                *lives = lives.saturating_sub(1);
                let remaining = *lives;
                session.push_event(GameEvent::LifeLost { remaining });
            }
        }
    }

    // Running out of lives ends the session under any policy
    if session.lives == Some(0) {
        finish(session, true);
    } else if session.policy.auto_advances() {
        if session.is_last_level() {
            finish(session, false);
        } else {
            move_to_next_level(session);
        }
    }

    true
}

fn advance(session: &mut QuizSession) -> bool {
    if session.finished || session.policy.auto_advances() {
        log::debug!("advance ignored: session advances on its own");
        return false;
    }
    if session.feedback != Feedback::Correct {
        log::debug!("advance ignored: level not solved");
        return false;
    }
    if session.is_last_level() {
        log::debug!("advance ignored: already on the last level");
        return false;
    }
    move_to_next_level(session);
    true
}

fn reset(session: &mut QuizSession) {
    let events = std::mem::take(&mut session.events);
    *session = QuizSession::new(session.policy, session.level_count);
    session.events = events;
    session.push_event(GameEvent::Reset);
    log::debug!("session reset");
}

fn move_to_next_level(session: &mut QuizSession) {
    session.level_index += 1;
    session.selection = None;
    session.feedback = Feedback::None;
    session.push_event(GameEvent::Advanced {
        level_index: session.level_index,
    });
}

fn finish(session: &mut QuizSession, out_of_lives: bool) {
    session.finished = true;
    session.push_event(GameEvent::Finished {
        score: session.score,
        out_of_lives,
    });
    log::info!(
        "session finished: score {}/{} ({})",
        session.score.unwrap_or(0),
        session.level_count,
        if out_of_lives { "out of lives" } else { "all levels answered" }
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::policy::{GameVariant, Policy};
    use crate::sim::state::{NextAction, SessionPhase};
    use proptest::prelude::*;

    fn start(variant: GameVariant) -> (Catalog, QuizSession) {
        let catalog = Catalog::for_variant(variant);
        let session = QuizSession::for_catalog(&catalog);
        (catalog, session)
    }

    fn target(catalog: &Catalog, session: &QuizSession) -> Answer {
        catalog.level(session.level_index()).unwrap().target
    }

    fn wrong(catalog: &Catalog, session: &QuizSession) -> Answer {
        let level = catalog.level(session.level_index()).unwrap();
        *level.options.iter().find(|o| **o != level.target).unwrap()
    }

    #[test]
    fn test_locking_correct_enables_next() {
        let (catalog, mut session) = start(GameVariant::LetterDetective);
        assert!(step(&catalog, &mut session, &QuizInput::Select(Answer::Letter('C'))));
        assert_eq!(session.feedback(), Feedback::Correct);
        assert_eq!(session.next_action(), NextAction::Next);
        assert_eq!(session.score(), None);

        assert!(step(&catalog, &mut session, &QuizInput::Advance));
        assert_eq!(session.level_index(), 1);
        assert_eq!(session.selection(), None);
        assert_eq!(session.feedback(), Feedback::None);
    }

    #[test]
    fn test_locking_wrong_locks_board() {
        let (catalog, mut session) = start(GameVariant::LetterDetective);
        step(&catalog, &mut session, &QuizInput::Select(Answer::Letter('A')));
        assert_eq!(session.feedback(), Feedback::Wrong);
        assert!(session.is_locked());
        assert_eq!(session.next_action(), NextAction::Restart);

        // Retrying the correct tile does nothing
        assert!(!step(&catalog, &mut session, &QuizInput::Select(Answer::Letter('C'))));
        assert_eq!(session.selection(), Some(Answer::Letter('A')));
        assert_eq!(session.feedback(), Feedback::Wrong);

        // Neither does Next
        assert!(!step(&catalog, &mut session, &QuizInput::Advance));
        assert_eq!(session.level_index(), 0);
    }

    #[test]
    fn test_free_retry_number_match() {
        let (catalog, mut session) = start(GameVariant::NumberMatch);
        step(&catalog, &mut session, &QuizInput::Select(Answer::Number(2)));
        step(&catalog, &mut session, &QuizInput::Advance);
        step(&catalog, &mut session, &QuizInput::Select(Answer::Number(5)));
        step(&catalog, &mut session, &QuizInput::Advance);
        assert_eq!(session.level_index(), 2);

        step(&catalog, &mut session, &QuizInput::Select(Answer::Number(9)));
        assert_eq!(session.feedback(), Feedback::Wrong);
        assert!(!session.is_locked());
        assert_eq!(session.next_action(), NextAction::None);
        assert!(!step(&catalog, &mut session, &QuizInput::Advance));

        step(&catalog, &mut session, &QuizInput::Select(Answer::Number(6)));
        assert_eq!(session.feedback(), Feedback::Correct);
        assert_eq!(session.next_action(), NextAction::Next);
        assert_eq!(session.score(), Some(3));
    }

    #[test]
    fn test_free_retry_locks_after_correct() {
        let (catalog, mut session) = start(GameVariant::NumberMatch);
        step(&catalog, &mut session, &QuizInput::Select(Answer::Number(2)));
        assert!(!step(&catalog, &mut session, &QuizInput::Select(Answer::Number(3))));
        assert_eq!(session.feedback(), Feedback::Correct);
        assert_eq!(session.score(), Some(1));
    }

    #[test]
    fn test_invalid_selection_ignored() {
        let (catalog, mut session) = start(GameVariant::NumberMatch);
        let before = session.clone();
        assert!(!step(&catalog, &mut session, &QuizInput::Select(Answer::Number(4))));
        assert!(!step(&catalog, &mut session, &QuizInput::Select(Answer::Letter('A'))));
        assert_eq!(session, before);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_lives_wrong_answer_costs_heart_and_advances() {
        let (catalog, mut session) = start(GameVariant::LetterRecognition);
        step(&catalog, &mut session, &QuizInput::Select(Answer::Letter('B')));
        assert_eq!(session.lives(), Some(2));
        assert_eq!(session.level_index(), 1);
        assert_eq!(session.phase(), SessionPhase::AwaitingInput);
        assert_eq!(
            session.drain_events(),
            vec![
                GameEvent::Answered { level_index: 0, verdict: Verdict::Wrong },
                GameEvent::LifeLost { remaining: 2 },
                GameEvent::Advanced { level_index: 1 },
            ]
        );
    }

    #[test]
    fn test_lives_three_wrong_answers_end_session() {
        let (catalog, mut session) = start(GameVariant::LetterRecognition);
        for _ in 0..3 {
            let answer = wrong(&catalog, &session);
            step(&catalog, &mut session, &QuizInput::Select(answer));
        }
        assert_eq!(session.lives(), Some(0));
        assert_eq!(session.phase(), SessionPhase::Terminal);
        assert_eq!(session.next_action(), NextAction::Restart);
        assert_eq!(session.summary().headline(), "Keep Practicing!");
        assert_eq!(session.summary().score, Some(0));

        // Terminal sessions ignore further answers
        let answer = target(&catalog, &session);
        assert!(!step(&catalog, &mut session, &QuizInput::Select(answer)));
    }

    #[test]
    fn test_lives_last_heart_survives_correct_answer() {
        let (catalog, mut session) = start(GameVariant::LetterRecognition);
        for _ in 0..2 {
            let answer = wrong(&catalog, &session);
            step(&catalog, &mut session, &QuizInput::Select(answer));
        }
        assert_eq!(session.lives(), Some(1));
        let answer = target(&catalog, &session);
        step(&catalog, &mut session, &QuizInput::Select(answer));
        assert_eq!(session.phase(), SessionPhase::AwaitingInput);
        assert_eq!(session.level_index(), 3);
    }

    #[test]
    fn test_lives_perfect_run_finishes_on_last_level() {
        let (catalog, mut session) = start(GameVariant::LetterRecognition);
        while session.phase() != SessionPhase::Terminal {
            let answer = target(&catalog, &session);
            step(&catalog, &mut session, &QuizInput::Select(answer));
        }
        assert_eq!(session.score(), Some(5));
        assert_eq!(session.lives(), Some(3));
        assert_eq!(session.level_index(), 4);
        assert_eq!(session.summary().headline(), "Great Job!");
    }

    #[test]
    fn test_lives_explicit_advance_is_noop() {
        let (catalog, mut session) = start(GameVariant::LetterRecognition);
        assert!(!step(&catalog, &mut session, &QuizInput::Advance));
        assert_eq!(session.level_index(), 0);
    }

    #[test]
    fn test_focus_last_level_offers_restart() {
        let (catalog, mut session) = start(GameVariant::FocusChallenge);
        for _ in 0..4 {
            let answer = target(&catalog, &session);
            step(&catalog, &mut session, &QuizInput::Select(answer));
            step(&catalog, &mut session, &QuizInput::Advance);
        }
        assert_eq!(session.level_index(), 4);
        step(&catalog, &mut session, &QuizInput::Select(Answer::Number(10)));
        assert_eq!(session.feedback(), Feedback::Correct);
        assert_eq!(session.next_action(), NextAction::Restart);
        assert!(session.is_complete());
        assert!(!step(&catalog, &mut session, &QuizInput::Advance));
        assert_eq!(session.level_index(), 4);
    }

    #[test]
    fn test_reset_from_terminal_then_replay() {
        let (catalog, mut session) = start(GameVariant::LetterDetective);
        step(&catalog, &mut session, &QuizInput::Select(Answer::Letter('A')));
        assert_eq!(session.next_action(), NextAction::Restart);

        step(&catalog, &mut session, &QuizInput::Reset);
        assert_eq!(session.level_index(), 0);
        assert_eq!(session.selection(), None);
        assert_eq!(session.feedback(), Feedback::None);

        step(&catalog, &mut session, &QuizInput::Select(Answer::Letter('C')));
        assert_eq!(session.feedback(), Feedback::Correct);
        assert_eq!(session.next_action(), NextAction::Next);
    }

    #[test]
    fn test_reset_restores_lives() {
        let (catalog, mut session) = start(GameVariant::LetterRecognition);
        for _ in 0..3 {
            let answer = wrong(&catalog, &session);
            step(&catalog, &mut session, &QuizInput::Select(answer));
        }
        step(&catalog, &mut session, &QuizInput::Reset);
        assert_eq!(session, QuizSession::for_catalog(&catalog));
        assert_eq!(session.lives(), Some(3));
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let (catalog, session) = start(GameVariant::NumberMatch);
        let next = reduce(&catalog, &session, &QuizInput::Select(Answer::Number(2)));
        assert_eq!(session.feedback(), Feedback::None);
        assert_eq!(next.feedback(), Feedback::Correct);
    }

    #[derive(Debug, Clone)]
    enum Action {
        Pick(usize),
        Advance,
        Reset,
    }

    fn action() -> impl Strategy<Value = Action> {
        prop_oneof![
            6 => (0usize..6).prop_map(Action::Pick),
            2 => Just(Action::Advance),
            1 => Just(Action::Reset),
        ]
    }

    fn variant() -> impl Strategy<Value = GameVariant> {
        prop::sample::select(GameVariant::ALL.to_vec())
    }

    fn to_input(catalog: &Catalog, session: &QuizSession, action: &Action) -> QuizInput {
        match action {
            Action::Pick(i) => {
                let level = catalog.level(session.level_index()).unwrap();
                QuizInput::Select(level.options[i % level.options.len()])
            }
            Action::Advance => QuizInput::Advance,
            Action::Reset => QuizInput::Reset,
        }
    }

    proptest! {
        #[test]
        fn prop_index_moves_forward_by_one(variant in variant(), actions in prop::collection::vec(action(), 0..60)) {
            let (catalog, mut session) = start(variant);
            for action in &actions {
                let input = to_input(&catalog, &session, action);
                let before = session.level_index();
                let changed = step(&catalog, &mut session, &input);
                let after = session.level_index();
                match input {
                    QuizInput::Reset => prop_assert_eq!(after, 0),
                    QuizInput::Advance if changed => prop_assert_eq!(after, before + 1),
                    _ => prop_assert!(after == before || after == before + 1),
                }
                prop_assert!(after < catalog.len());
            }
        }

        #[test]
        fn prop_lives_bound_and_terminal(actions in prop::collection::vec(action(), 0..60)) {
            let (catalog, mut session) = start(GameVariant::LetterRecognition);
            for action in &actions {
                let input = to_input(&catalog, &session, action);
                step(&catalog, &mut session, &input);
                let lives = session.lives().unwrap();
                prop_assert!(lives <= 3);
                let terminal = session.phase() == SessionPhase::Terminal;
                let exhausted = session.is_last_level() && session.selection().is_some();
                prop_assert_eq!(terminal, lives == 0 || exhausted);
            }
        }

        #[test]
        fn prop_reset_is_idempotent(variant in variant(), actions in prop::collection::vec(action(), 0..30)) {
            let (catalog, mut session) = start(variant);
            for action in &actions {
                let input = to_input(&catalog, &session, action);
                step(&catalog, &mut session, &input);
            }
            let once = reduce(&catalog, &session, &QuizInput::Reset);
            let twice = reduce(&catalog, &once, &QuizInput::Reset);
            prop_assert_eq!(&once, &twice);
            prop_assert_eq!(once, QuizSession::for_catalog(&catalog));
        }

        #[test]
        fn prop_locked_board_ignores_selection(first in 0usize..6, rest in prop::collection::vec(0usize..6, 1..10)) {
            let (catalog, mut session) = start(GameVariant::LetterDetective);
            let input = to_input(&catalog, &session, &Action::Pick(first));
            step(&catalog, &mut session, &input);
            let selection = session.selection();
            let feedback = session.feedback();
            for pick in rest {
                let input = to_input(&catalog, &session, &Action::Pick(pick));
                prop_assert!(!step(&catalog, &mut session, &input));
                prop_assert_eq!(session.selection(), selection);
                prop_assert_eq!(session.feedback(), feedback);
            }
        }
    }

    #[test]
    fn test_policy_descriptor_drives_behavior() {
        // A custom catalog run under the locking policy behaves like letter detective
        let catalog = Catalog::new(
            GameVariant::NumberMatch,
            vec![crate::sim::level::Level::numbers(1, "p", 1, &[1, 2])],
        )
        .unwrap();
        let mut session = QuizSession::new(Policy::LOCKING, catalog.len());
        step(&catalog, &mut session, &QuizInput::Select(Answer::Number(2)));
        assert!(session.is_locked());
    }

    fn single_level(targets: &[u32]) -> Catalog {
        let levels = targets
            .iter()
            .enumerate()
            .map(|(i, t)| crate::sim::level::Level::numbers(i as u32 + 1, "p", *t, &[*t, 100]))
            .collect();
        Catalog::new(GameVariant::NumberMatch, levels).unwrap()
    }

    #[test]
    fn test_lives_with_retry_end_at_zero() {
        let catalog = single_level(&[1, 2, 3]);
        let policy = Policy {
            locks_on_answer: false,
            lives_enabled: true,
            retry_allowed: true,
        };
        let mut session = QuizSession::new(policy, catalog.len());
        for expected in [2, 1, 0] {
            assert!(step(&catalog, &mut session, &QuizInput::Select(Answer::Number(100))));
            assert_eq!(session.lives(), Some(expected));
        }
        assert_eq!(session.level_index(), 0);
        assert_eq!(session.phase(), SessionPhase::Terminal);
        assert!(session.is_locked());
        assert_eq!(session.next_action(), NextAction::Restart);
        assert!(!step(&catalog, &mut session, &QuizInput::Select(Answer::Number(1))));
        assert_eq!(session.summary().headline(), "Keep Practicing!");
    }

    #[test]
    fn test_lives_with_locking_costs_one_heart_per_level() {
        let catalog = single_level(&[1, 2, 3]);
        let policy = Policy {
            locks_on_answer: true,
            lives_enabled: true,
            retry_allowed: false,
        };
        let mut session = QuizSession::new(policy, catalog.len());
        step(&catalog, &mut session, &QuizInput::Select(Answer::Number(100)));
        assert_eq!(session.lives(), Some(2));
        assert!(session.is_locked());
        assert_eq!(session.phase(), SessionPhase::Answered(Verdict::Wrong));
        assert!(!step(&catalog, &mut session, &QuizInput::Select(Answer::Number(100))));
        assert_eq!(session.lives(), Some(2));
    }

    proptest! {
        #[test]
        fn prop_any_lives_policy_ends_at_zero(locks in any::<bool>(), retry in any::<bool>(), actions in prop::collection::vec(action(), 0..60)) {
            let catalog = Catalog::for_variant(GameVariant::NumberMatch);
            let policy = Policy { locks_on_answer: locks, lives_enabled: true, retry_allowed: retry };
            let mut session = QuizSession::new(policy, catalog.len());
            for action in &actions {
                let input = to_input(&catalog, &session, action);
                step(&catalog, &mut session, &input);
                if session.lives() == Some(0) {
                    prop_assert_eq!(session.phase(), SessionPhase::Terminal);
                }
            }
        }
    }
}
