use std::sync::Arc;

use dashmap::DashMap;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use game_core::{GuessEngine, MAX_ATTEMPTS};
use game_persistence::repositories::{
    GameInProgressRepository, GameRepository, PlayerRepository, WordRepository,
};
use game_types::{GameError, GameResult, GameSummary, GuessResponse, Player};

#[derive(Debug, Error)]
pub enum GameServiceError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("database error: {0}")]
    Database(#[from] DbErr),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Sequences engine calls with repository reads and writes.
///
/// Every mutating request runs under the owning player's lock and inside a
/// single transaction, so two concurrent guesses cannot read the same
/// attempt count, and a terminating guess commits its word-flag repair,
/// finished record, and in-progress deletion together or not at all.
pub struct GameService {
    db: DatabaseConnection,
    player_locks: DashMap<Uuid, Arc<Mutex<()>>>,
}

impl GameService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            player_locks: DashMap::new(),
        }
    }

    fn player_lock(&self, player_id: Uuid) -> Arc<Mutex<()>> {
        self.player_locks
            .entry(player_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    pub async fn create_player(&self, name: &str) -> Result<Player, GameServiceError> {
        let player = PlayerRepository::create(&self.db, name).await?;
        info!(player_id = %player.id, "registered player");
        Ok(player)
    }

    pub async fn start_game(&self, player_id: Uuid) -> Result<GuessResponse, GameServiceError> {
        let lock = self.player_lock(player_id);
        let _guard = lock.lock().await;

        let txn = self.db.begin().await?;
        let player = PlayerRepository::find_by_id(&txn, player_id)
            .await?
            .ok_or(GameError::PlayerNotFound { player_id })?;

        // One active game per player: a second start returns the existing
        // view instead of drawing another word.
        if let Some(existing) = GameInProgressRepository::find_active_by_player(&txn, &player)
            .await?
            .into_iter()
            .next()
        {
            txn.commit().await?;
            return Ok(GuessEngine::render_state(&existing));
        }

        let word = WordRepository::find_random_unused(&txn)
            .await?
            .ok_or(GameError::NoWordsAvailable)?;
        WordRepository::mark_used(&txn, word.id).await?;

        let game = GameInProgressRepository::insert(&txn, &player, &word, MAX_ATTEMPTS).await?;
        txn.commit().await?;

        info!(player_id = %player.id, game_id = %game.id, "started game");
        Ok(GuessEngine::render_state(&game))
    }

    pub async fn make_guess(
        &self,
        player_id: Uuid,
        letter: Option<char>,
    ) -> Result<GuessResponse, GameServiceError> {
        let lock = self.player_lock(player_id);
        let _guard = lock.lock().await;

        let txn = self.db.begin().await?;
        let player = PlayerRepository::find_by_id(&txn, player_id)
            .await?
            .ok_or(GameError::PlayerNotFound { player_id })?;

        let letter = letter.ok_or(GameError::InvalidLetter { letter: None })?;

        let mut game = GameInProgressRepository::find_active_by_player(&txn, &player)
            .await?
            .into_iter()
            .next()
            .ok_or(GameError::NoActiveGame { player_id })?;

        let outcome = GuessEngine::apply_guess(&mut game, letter)?;
        GameInProgressRepository::update_progress(&txn, &game).await?;

        if outcome.terminated {
            // The flag was set at start_game; repair it here so the finished
            // record never points at an unused word.
            if !game.word.used {
                WordRepository::mark_used(&txn, game.word.id).await?;
            }

            let result = if outcome.response.word_complete {
                GameResult::Won
            } else {
                GameResult::Lost
            };
            GameRepository::insert(&txn, &player, &game.word, result, outcome.response.score)
                .await?;
            GameInProgressRepository::delete(&txn, game.id).await?;

            info!(
                player_id = %player.id,
                game_id = %game.id,
                result = ?result,
                score = outcome.response.score,
                "game finished"
            );
        }

        txn.commit().await?;
        Ok(outcome.response)
    }

    pub async fn games_by_player(
        &self,
        player_id: Uuid,
    ) -> Result<Vec<GameSummary>, GameServiceError> {
        Ok(GameRepository::find_by_player(&self.db, player_id).await?)
    }

    pub async fn all_games(&self) -> Result<Vec<GameSummary>, GameServiceError> {
        Ok(GameRepository::find_all(&self.db).await?)
    }
}
