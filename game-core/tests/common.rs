use std::collections::BTreeSet;

use game_core::MAX_ATTEMPTS;
use game_types::{ActiveGame, Player, Word};
use uuid::Uuid;

/// Creates a test player with the given display name
pub fn create_test_player(name: &str) -> Player {
    Player {
        id: Uuid::new_v4(),
        name: name.to_string(),
    }
}

/// Creates a test word already assigned to a game
pub fn create_test_word(text: &str) -> Word {
    Word {
        id: Uuid::new_v4(),
        text: text.to_string(),
        used: true,
    }
}

/// Creates a fresh in-progress game against a specific word
pub fn create_game_with_word(text: &str) -> ActiveGame {
    create_game_with_state(text, &[], MAX_ATTEMPTS)
}

/// Creates an in-progress game at an arbitrary point of play
pub fn create_game_with_state(text: &str, attempted: &[char], remaining: i32) -> ActiveGame {
    ActiveGame {
        id: Uuid::new_v4(),
        player: create_test_player("Alice"),
        word: create_test_word(text),
        attempted_letters: attempted.iter().copied().collect::<BTreeSet<char>>(),
        remaining_attempts: remaining,
        started_at: chrono::Utc::now().to_rfc3339(),
    }
}
