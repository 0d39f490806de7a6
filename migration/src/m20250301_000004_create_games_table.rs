use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Games::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Games::PlayerId).uuid().not_null())
                    .col(ColumnDef::new(Games::WordId).uuid())
                    .col(ColumnDef::new(Games::Result).string().not_null())
                    .col(ColumnDef::new(Games::Score).integer().not_null())
                    .col(
                        ColumnDef::new(Games::PlayedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_player")
                            .from(Games::Table, Games::PlayerId)
                            .to(Players::Table, Players::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_word")
                            .from(Games::Table, Games::WordId)
                            .to(Words::Table, Words::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Per-player history listing
        manager
            .create_index(
                Index::create()
                    .name("idx_games_player")
                    .table(Games::Table)
                    .col(Games::PlayerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Games {
    Table,
    Id,
    PlayerId,
    WordId,
    Result,
    Score,
    PlayedAt,
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
