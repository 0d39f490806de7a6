use anyhow::Result;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, Order, QueryFilter, QueryOrder,
};
use tracing::info;
use uuid::Uuid;

use crate::entities::{prelude::*, words};
use game_types::Word;

pub struct WordRepository;

impl WordRepository {
    pub(crate) fn model_to_word(model: words::Model) -> Word {
        Word {
            id: model.id,
            text: model.text,
            used: model.used,
        }
    }

    /// Draw a random word that has not been assigned to any game yet.
    pub async fn find_random_unused<C: ConnectionTrait>(db: &C) -> Result<Option<Word>> {
        let model = Words::find()
            .filter(words::Column::Used.eq(false))
            .order_by(Expr::cust("RANDOM()"), Order::Asc)
            .one(db)
            .await?;

        Ok(model.map(Self::model_to_word))
    }

    /// Flip the used flag. Safe to call on a word that is already marked.
    pub async fn mark_used<C: ConnectionTrait>(db: &C, word_id: Uuid) -> Result<()> {
        Words::update_many()
            .col_expr(words::Column::Used, Expr::value(true))
            .filter(words::Column::Id.eq(word_id))
            .exec(db)
            .await?;

        Ok(())
    }

    /// Insert every word not already present, uppercased. Existing rows keep
    /// their used flag.
    pub async fn seed<C: ConnectionTrait>(db: &C, texts: &[String]) -> Result<usize> {
        let mut inserted = 0;
        for text in texts {
            let text = text.trim().to_uppercase();
            if text.is_empty() {
                continue;
            }

            let exists = Words::find()
                .filter(words::Column::Text.eq(text.as_str()))
                .one(db)
                .await?
                .is_some();
            if exists {
                continue;
            }

            let model = words::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                text: ActiveValue::Set(text),
                used: ActiveValue::Set(false),
            };
            Words::insert(model).exec(db).await?;
            inserted += 1;
        }

        if inserted > 0 {
            info!("seeded {} new words", inserted);
        }
        Ok(inserted)
    }
}
