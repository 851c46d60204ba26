//! Games list shown on the games page
//!
//! Static display metadata only. Progress and stars are fixed values; no
//! session ever writes back here.

use serde::Serialize;

use crate::sim::GameVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Letters,
    Numbers,
    Focus,
}

/// What a game card launches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameKind {
    Quiz(GameVariant),
    Tracing,
}

/// One card on the games page
#[derive(Debug, Clone, Serialize)]
pub struct GameInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub category: Category,
    /// Stored progress, 0-100
    pub progress: u8,
    /// Stars earned, 0-3
    pub stars: u8,
    pub time_estimate: &'static str,
    pub kind: GameKind,
}

/// Path of the games list page
pub const LIST_ROUTE: &str = "/games";

impl GameInfo {
    pub fn route(&self) -> String {
        format!("{LIST_ROUTE}/{}", self.id)
    }

    /// Card button text
    pub fn cta_label(&self) -> &'static str {
        if self.progress > 0 {
            "Continue Game"
        } else {
            "Start Game"
        }
    }
}

/// Banner above the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LearningJourney {
    pub level: u8,
    pub progress: u8,
}

pub const JOURNEY: LearningJourney = LearningJourney {
    level: 3,
    progress: 68,
};

const GAMES: [GameInfo; 5] = [
    GameInfo {
        id: "letter-recognition",
        title: "Letter Detective",
        description: "Help find the hidden letters in this magical adventure!",
        difficulty: Difficulty::Easy,
        category: Category::Letters,
        progress: 75,
        stars: 2,
        time_estimate: "5 min",
        kind: GameKind::Quiz(GameVariant::LetterRecognition),
    },
    GameInfo {
        id: "letter-detective",
        title: "Look-Alike Letters",
        description: "Spot the right letter among its tricky twins.",
        difficulty: Difficulty::Medium,
        category: Category::Letters,
        progress: 0,
        stars: 0,
        time_estimate: "5 min",
        kind: GameKind::Quiz(GameVariant::LetterDetective),
    },
    GameInfo {
        id: "number-match",
        title: "Number Friends",
        description: "Match numbers with their quantity friends in the garden.",
        difficulty: Difficulty::Medium,
        category: Category::Numbers,
        progress: 40,
        stars: 1,
        time_estimate: "8 min",
        kind: GameKind::Quiz(GameVariant::NumberMatch),
    },
    GameInfo {
        id: "focus-challenge",
        title: "Butterfly Focus",
        description: "Follow the colorful butterflies and improve concentration.",
        difficulty: Difficulty::Easy,
        category: Category::Focus,
        progress: 90,
        stars: 3,
        time_estimate: "6 min",
        kind: GameKind::Quiz(GameVariant::FocusChallenge),
    },
    GameInfo {
        id: "number-tracing",
        title: "Number Tracing",
        description: "Trace numbers step by step and improve handwriting skills.",
        difficulty: Difficulty::Easy,
        category: Category::Numbers,
        progress: 0,
        stars: 0,
        time_estimate: "7 min",
        kind: GameKind::Tracing,
    },
];

pub fn all() -> &'static [GameInfo] {
    &GAMES
}

pub fn find(id: &str) -> Option<&'static GameInfo> {
    GAMES.iter().find(|g| g.id == id)
}

/// Game id from a page path like `/games/number-match/`
pub fn slug_from_path(path: &str) -> Option<&str> {
    let slug = path
        .strip_prefix(LIST_ROUTE)?
        .strip_prefix('/')?
        .trim_end_matches('/');
    (!slug.is_empty() && !slug.contains('/')).then_some(slug)
}
