use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::player::Player;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Word {
    pub id: Uuid,
    pub text: String,
    pub used: bool,
}

/// Mutable session state for one (player, word) attempt, pre-termination.
///
/// `attempted_letters` only ever holds single uppercase characters;
/// `remaining_attempts` never goes negative and never increases.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveGame {
    pub id: Uuid,
    pub player: Player,
    pub word: Word,
    pub attempted_letters: BTreeSet<char>,
    pub remaining_attempts: i32,
    pub started_at: String, // ISO 8601 string
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GameResult {
    Won,
    Lost,
}

impl GameResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameResult::Won => "WON",
            GameResult::Lost => "LOST",
        }
    }
}

impl std::str::FromStr for GameResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WON" => Ok(GameResult::Won),
            "LOST" => Ok(GameResult::Lost),
            other => Err(format!("unknown game result: {other}")),
        }
    }
}

/// Client-facing view of an in-progress (or just-terminated) game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuessResponse {
    pub hidden_word: String,
    pub attempted_letters: Vec<char>,
    pub remaining_attempts: i32,
    pub word_complete: bool,
    pub score: i32,
}

#[derive(Debug, Clone)]
pub struct GuessOutcome {
    pub response: GuessResponse,
    pub terminated: bool,
}

/// Flat projection of a finished game for the listing queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameSummary {
    pub id: Uuid,
    pub player_id: Uuid,
    pub player_name: String,
    pub result: GameResult,
    pub score: i32,
    pub played_at: String, // ISO 8601 string
    pub word: Option<String>,
}
