use std::collections::BTreeSet;

pub const WORD_COMPLETE_POINTS: i32 = 20;
pub const POINTS_PER_LETTER: i32 = 1;

pub struct ScoringEngine;

impl ScoringEngine {
    /// Score a game snapshot.
    ///
    /// A completed word earns the flat completion bonus regardless of how
    /// many attempts are left. An exhausted game earns one point per
    /// distinct attempted letter that occurs in the word. A game still
    /// running scores zero.
    pub fn score(
        word: &str,
        attempted_letters: &BTreeSet<char>,
        word_complete: bool,
        remaining_attempts: i32,
    ) -> i32 {
        if word_complete {
            WORD_COMPLETE_POINTS
        } else if remaining_attempts == 0 {
            let correct_letters = attempted_letters
                .iter()
                .filter(|letter| word.contains(**letter))
                .count() as i32;
            correct_letters * POINTS_PER_LETTER
        } else {
            0
        }
    }
}
