pub use super::games::Entity as Games;
pub use super::games_in_progress::Entity as GamesInProgress;
pub use super::players::Entity as Players;
pub use super::words::Entity as Words;
