use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;

use game_persistence::{connection::connect_to_memory_database, repositories::WordRepository};
use game_server::game_service::GameService;
use game_types::Player;

/// Fresh in-memory database with the schema applied.
pub async fn setup_test_db() -> DatabaseConnection {
    let db = connect_to_memory_database().await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

/// Service over an in-memory database seeded with the given words.
pub async fn setup_service_with_words(words: &[&str]) -> Arc<GameService> {
    let db = setup_test_db().await;
    let words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
    WordRepository::seed(&db, &words).await.unwrap();
    Arc::new(GameService::new(db))
}

pub async fn create_test_player(service: &GameService, name: &str) -> Player {
    service.create_player(name).await.unwrap()
}
