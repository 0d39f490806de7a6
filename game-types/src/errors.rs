use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GameError {
    #[error("player not found: {player_id}")]
    PlayerNotFound { player_id: Uuid },
    #[error("no unused words left to play")]
    NoWordsAvailable,
    #[error("guess must be a single alphabetic letter")]
    InvalidLetter { letter: Option<char> },
    #[error("no game in progress for player {player_id}")]
    NoActiveGame { player_id: Uuid },
}
