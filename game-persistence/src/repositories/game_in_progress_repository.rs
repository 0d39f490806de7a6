use std::collections::BTreeSet;

use anyhow::Result;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, Order, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::entities::{games_in_progress, prelude::*};
use crate::repositories::{PlayerRepository, WordRepository};
use game_types::{ActiveGame, Player, Word};

pub struct GameInProgressRepository;

impl GameInProgressRepository {
    // The letters column is a plain string of uppercase characters; the set
    // representation only exists in memory.
    fn decode_letters(raw: &str) -> BTreeSet<char> {
        raw.chars().filter(|c| c.is_ascii_alphabetic()).collect()
    }

    fn encode_letters(letters: &BTreeSet<char>) -> String {
        letters.iter().collect()
    }

    fn model_to_game(model: games_in_progress::Model, player: Player, word: Word) -> ActiveGame {
        ActiveGame {
            id: model.id,
            player,
            word,
            attempted_letters: Self::decode_letters(&model.attempted_letters),
            remaining_attempts: model.remaining_attempts,
            started_at: model.started_at.to_rfc3339(),
        }
    }

    pub async fn find_by_player_and_word<C: ConnectionTrait>(
        db: &C,
        player_id: Uuid,
        word_id: Uuid,
    ) -> Result<Option<ActiveGame>> {
        let model = GamesInProgress::find()
            .filter(games_in_progress::Column::PlayerId.eq(player_id))
            .filter(games_in_progress::Column::WordId.eq(word_id))
            .one(db)
            .await?;
        let Some(model) = model else {
            return Ok(None);
        };

        let player = PlayerRepository::find_by_id(db, model.player_id)
            .await?
            .ok_or_else(|| {
                anyhow::anyhow!("in-progress game {} references a missing player", model.id)
            })?;
        let word = Words::find_by_id(model.word_id)
            .one(db)
            .await?
            .map(WordRepository::model_to_word)
            .ok_or_else(|| {
                anyhow::anyhow!("in-progress game {} references a missing word", model.id)
            })?;

        Ok(Some(Self::model_to_game(model, player, word)))
    }

    /// All in-progress games for a player, most recently started first.
    pub async fn find_active_by_player<C: ConnectionTrait>(
        db: &C,
        player: &Player,
    ) -> Result<Vec<ActiveGame>> {
        let rows = GamesInProgress::find()
            .filter(games_in_progress::Column::PlayerId.eq(player.id))
            .order_by(games_in_progress::Column::StartedAt, Order::Desc)
            .find_also_related(Words)
            .all(db)
            .await?;

        rows.into_iter()
            .map(|(model, word)| {
                let word = word.map(WordRepository::model_to_word).ok_or_else(|| {
                    anyhow::anyhow!("in-progress game {} references a missing word", model.id)
                })?;
                Ok(Self::model_to_game(model, player.clone(), word))
            })
            .collect()
    }

    pub async fn insert<C: ConnectionTrait>(
        db: &C,
        player: &Player,
        word: &Word,
        remaining_attempts: i32,
    ) -> Result<ActiveGame> {
        let model = games_in_progress::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            player_id: ActiveValue::Set(player.id),
            word_id: ActiveValue::Set(word.id),
            attempted_letters: ActiveValue::Set(String::new()),
            remaining_attempts: ActiveValue::Set(remaining_attempts),
            started_at: ActiveValue::Set(chrono::Utc::now().into()),
        };

        let saved = GamesInProgress::insert(model).exec(db).await?;
        let created = GamesInProgress::find_by_id(saved.last_insert_id)
            .one(db)
            .await?
            .ok_or_else(|| anyhow::anyhow!("failed to retrieve created game"))?;

        Ok(Self::model_to_game(created, player.clone(), word.clone()))
    }

    /// Persist the mutable part of a game: attempted letters and attempts.
    pub async fn update_progress<C: ConnectionTrait>(db: &C, game: &ActiveGame) -> Result<()> {
        GamesInProgress::update_many()
            .col_expr(
                games_in_progress::Column::AttemptedLetters,
                Expr::value(Self::encode_letters(&game.attempted_letters)),
            )
            .col_expr(
                games_in_progress::Column::RemainingAttempts,
                Expr::value(game.remaining_attempts),
            )
            .filter(games_in_progress::Column::Id.eq(game.id))
            .exec(db)
            .await?;

        Ok(())
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, game_id: Uuid) -> Result<()> {
        GamesInProgress::delete_by_id(game_id).exec(db).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::connect_to_memory_database;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::DatabaseConnection;

    async fn setup_test_db() -> DatabaseConnection {
        let db = connect_to_memory_database().await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    async fn seed_player_and_words(db: &DatabaseConnection, words: &[&str]) -> (Player, Vec<Word>) {
        let player = PlayerRepository::create(db, "Alice").await.unwrap();
        let texts: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        WordRepository::seed(db, &texts).await.unwrap();

        let mut drawn = Vec::new();
        for _ in words {
            let word = WordRepository::find_random_unused(db).await.unwrap().unwrap();
            WordRepository::mark_used(db, word.id).await.unwrap();
            drawn.push(Word { used: true, ..word });
        }
        (player, drawn)
    }

    #[tokio::test]
    async fn test_insert_and_find_by_player_and_word() {
        let db = setup_test_db().await;
        let (player, words) = seed_player_and_words(&db, &["CAT"]).await;

        let created = GameInProgressRepository::insert(&db, &player, &words[0], 7)
            .await
            .unwrap();
        assert!(created.attempted_letters.is_empty());
        assert_eq!(created.remaining_attempts, 7);

        let found = GameInProgressRepository::find_by_player_and_word(&db, player.id, words[0].id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.word.text, "CAT");

        let missing =
            GameInProgressRepository::find_by_player_and_word(&db, player.id, Uuid::new_v4())
                .await
                .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_player_word_pair_is_rejected() {
        let db = setup_test_db().await;
        let (player, words) = seed_player_and_words(&db, &["CAT"]).await;

        GameInProgressRepository::insert(&db, &player, &words[0], 7)
            .await
            .unwrap();
        let duplicate = GameInProgressRepository::insert(&db, &player, &words[0], 7).await;
        assert!(duplicate.is_err());
    }

    #[tokio::test]
    async fn test_find_active_by_player_orders_newest_first() {
        let db = setup_test_db().await;
        let (player, words) = seed_player_and_words(&db, &["CAT", "DOG"]).await;

        let first = GameInProgressRepository::insert(&db, &player, &words[0], 7)
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = GameInProgressRepository::insert(&db, &player, &words[1], 7)
            .await
            .unwrap();

        let active = GameInProgressRepository::find_active_by_player(&db, &player)
            .await
            .unwrap();
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].id, second.id);
        assert_eq!(active[1].id, first.id);
    }

    #[tokio::test]
    async fn test_update_progress_roundtrips_letters() {
        let db = setup_test_db().await;
        let (player, words) = seed_player_and_words(&db, &["CAT"]).await;

        let mut game = GameInProgressRepository::insert(&db, &player, &words[0], 7)
            .await
            .unwrap();
        game.attempted_letters.insert('C');
        game.attempted_letters.insert('X');
        game.remaining_attempts = 6;

        GameInProgressRepository::update_progress(&db, &game)
            .await
            .unwrap();

        let reloaded = GameInProgressRepository::find_by_player_and_word(&db, player.id, words[0].id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reloaded.attempted_letters, game.attempted_letters);
        assert_eq!(reloaded.remaining_attempts, 6);
    }

    #[tokio::test]
    async fn test_delete_removes_game() {
        let db = setup_test_db().await;
        let (player, words) = seed_player_and_words(&db, &["CAT"]).await;

        let game = GameInProgressRepository::insert(&db, &player, &words[0], 7)
            .await
            .unwrap();
        GameInProgressRepository::delete(&db, game.id).await.unwrap();

        let active = GameInProgressRepository::find_active_by_player(&db, &player)
            .await
            .unwrap();
        assert!(active.is_empty());
    }
}
