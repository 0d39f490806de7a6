use std::collections::BTreeSet;

use game_types::{ActiveGame, GameError, GuessOutcome, GuessResponse};
use tracing::debug;

use crate::ScoringEngine;

/// Starting attempt budget for every new game.
pub const MAX_ATTEMPTS: i32 = 7;

pub struct GuessEngine;

impl GuessEngine {
    /// Apply a single letter guess to a game snapshot.
    ///
    /// Repeating an already-attempted letter leaves the state untouched and
    /// returns the recomputed view. A miss consumes one attempt, floored at
    /// zero.
    pub fn apply_guess(game: &mut ActiveGame, letter: char) -> Result<GuessOutcome, GameError> {
        if !letter.is_ascii_alphabetic() {
            return Err(GameError::InvalidLetter {
                letter: Some(letter),
            });
        }

        let letter = letter.to_ascii_uppercase();
        if game.attempted_letters.contains(&letter) {
            return Ok(Self::outcome(game));
        }

        game.attempted_letters.insert(letter);
        let word = game.word.text.to_uppercase();
        if !word.contains(letter) && game.remaining_attempts > 0 {
            game.remaining_attempts -= 1;
        }

        debug!(
            game_id = %game.id,
            letter = %letter,
            remaining = game.remaining_attempts,
            "applied guess"
        );

        Ok(Self::outcome(game))
    }

    /// Rebuild the client view for an existing game without applying a guess.
    pub fn render_state(game: &ActiveGame) -> GuessResponse {
        let word = game.word.text.to_uppercase();
        let hidden_word = hidden_word(&word, &game.attempted_letters);
        let word_complete = hidden_word == word;
        let score = ScoringEngine::score(
            &word,
            &game.attempted_letters,
            word_complete,
            game.remaining_attempts,
        );

        GuessResponse {
            hidden_word,
            attempted_letters: game.attempted_letters.iter().copied().collect(),
            remaining_attempts: game.remaining_attempts,
            word_complete,
            score,
        }
    }

    fn outcome(game: &ActiveGame) -> GuessOutcome {
        let response = Self::render_state(game);
        let terminated = response.word_complete || response.remaining_attempts == 0;
        GuessOutcome {
            response,
            terminated,
        }
    }
}

/// Render a word with every unguessed, non-space character masked.
pub fn hidden_word(word: &str, attempted_letters: &BTreeSet<char>) -> String {
    word.chars()
        .map(|c| {
            if c == ' ' || attempted_letters.contains(&c) {
                c
            } else {
                '_'
            }
        })
        .collect()
}
