pub mod prelude;

pub mod games;
pub mod games_in_progress;
pub mod players;
pub mod words;
