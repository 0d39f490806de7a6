use std::collections::HashMap;
use std::str::FromStr;

use anyhow::Result;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, Order, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::entities::{games, players, prelude::*, words};
use game_types::{GameResult, GameSummary, Player, Word};

pub struct GameRepository;

impl GameRepository {
    /// Record a finished game. Called exactly once per terminated session.
    pub async fn insert<C: ConnectionTrait>(
        db: &C,
        player: &Player,
        word: &Word,
        result: GameResult,
        score: i32,
    ) -> Result<()> {
        let model = games::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            player_id: ActiveValue::Set(player.id),
            word_id: ActiveValue::Set(Some(word.id)),
            result: ActiveValue::Set(result.as_str().to_string()),
            score: ActiveValue::Set(score),
            played_at: ActiveValue::Set(chrono::Utc::now().into()),
        };
        Games::insert(model).exec(db).await?;

        Ok(())
    }

    pub async fn find_by_player<C: ConnectionTrait>(
        db: &C,
        player_id: Uuid,
    ) -> Result<Vec<GameSummary>> {
        let rows = Games::find()
            .filter(games::Column::PlayerId.eq(player_id))
            .order_by(games::Column::PlayedAt, Order::Desc)
            .find_also_related(Players)
            .all(db)
            .await?;

        Self::to_summaries(db, rows).await
    }

    pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<GameSummary>> {
        let rows = Games::find()
            .order_by(games::Column::PlayedAt, Order::Desc)
            .find_also_related(Players)
            .all(db)
            .await?;

        Self::to_summaries(db, rows).await
    }

    async fn to_summaries<C: ConnectionTrait>(
        db: &C,
        rows: Vec<(games::Model, Option<players::Model>)>,
    ) -> Result<Vec<GameSummary>> {
        // One batched lookup for the word texts; a summary stays null-safe
        // when the word ref is gone.
        let word_ids: Vec<Uuid> = rows.iter().filter_map(|(game, _)| game.word_id).collect();
        let word_texts: HashMap<Uuid, String> = if word_ids.is_empty() {
            HashMap::new()
        } else {
            Words::find()
                .filter(words::Column::Id.is_in(word_ids))
                .all(db)
                .await?
                .into_iter()
                .map(|word| (word.id, word.text))
                .collect()
        };

        rows.into_iter()
            .map(|(game, player)| {
                let player = player.ok_or_else(|| {
                    anyhow::anyhow!("finished game {} references a missing player", game.id)
                })?;
                let result =
                    GameResult::from_str(&game.result).map_err(|err| anyhow::anyhow!(err))?;

                Ok(GameSummary {
                    id: game.id,
                    player_id: player.id,
                    player_name: player.name,
                    result,
                    score: game.score,
                    played_at: game.played_at.to_rfc3339(),
                    word: game.word_id.and_then(|id| word_texts.get(&id).cloned()),
                })
            })
            .collect()
    }
}
