pub mod game_in_progress_repository;
pub mod game_repository;
pub mod player_repository;
pub mod word_repository;

pub use game_in_progress_repository::GameInProgressRepository;
pub use game_repository::GameRepository;
pub use player_repository::PlayerRepository;
pub use word_repository::WordRepository;
