use anyhow::Result;
use sea_orm::{ActiveValue, ConnectionTrait, EntityTrait};
use uuid::Uuid;

use crate::entities::{players, prelude::*};
use game_types::Player;

pub struct PlayerRepository;

impl PlayerRepository {
    pub(crate) fn model_to_player(model: players::Model) -> Player {
        Player {
            id: model.id,
            name: model.name,
        }
    }

    pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<Option<Player>> {
        let model = Players::find_by_id(id).one(db).await?;
        Ok(model.map(Self::model_to_player))
    }

    pub async fn create<C: ConnectionTrait>(db: &C, name: &str) -> Result<Player> {
        let model = players::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(chrono::Utc::now().into()),
        };

        let saved = Players::insert(model).exec(db).await?;
        let created = Players::find_by_id(saved.last_insert_id)
            .one(db)
            .await?
            .ok_or_else(|| anyhow::anyhow!("failed to retrieve created player"))?;

        Ok(Self::model_to_player(created))
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

    #[tokio::test]
    async fn test_create_and_find_player() {
        let db = setup_test_db().await;

        let created = PlayerRepository::create(&db, "Alice").await.unwrap();
        assert_eq!(created.name, "Alice");

        let found = PlayerRepository::find_by_id(&db, created.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_find_unknown_player_returns_none() {
        let db = setup_test_db().await;

        let found = PlayerRepository::find_by_id(&db, Uuid::new_v4())
            .await
            .unwrap();
        assert!(found.is_none());
    }
}
