use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GamesInProgress::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GamesInProgress::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GamesInProgress::PlayerId).uuid().not_null())
                    .col(ColumnDef::new(GamesInProgress::WordId).uuid().not_null())
                    .col(
                        ColumnDef::new(GamesInProgress::AttemptedLetters)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(GamesInProgress::RemainingAttempts)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GamesInProgress::StartedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_in_progress_player")
                            .from(GamesInProgress::Table, GamesInProgress::PlayerId)
                            .to(Players::Table, Players::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_in_progress_word")
                            .from(GamesInProgress::Table, GamesInProgress::WordId)
                            .to(Words::Table, Words::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one in-progress game per (player, word) pair
        manager
            .create_index(
                Index::create()
                    .name("idx_games_in_progress_player_word")
                    .table(GamesInProgress::Table)
                    .col(GamesInProgress::PlayerId)
                    .col(GamesInProgress::WordId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Newest-first lookup of a player's active game
        manager
            .create_index(
                Index::create()
                    .name("idx_games_in_progress_player_started")
                    .table(GamesInProgress::Table)
                    .col(GamesInProgress::PlayerId)
                    .col(GamesInProgress::StartedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GamesInProgress::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GamesInProgress {
    Table,
    Id,
    PlayerId,
    WordId,
    AttemptedLetters,
    RemainingAttempts,
    StartedAt,
}

#[derive(DeriveIden)]
enum Players {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Words {
    Table,
    Id,
}
