use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Quests::Table)
                    .if_not_exists()
                    .col(integer(Quests::Id).primary_key())
                    .col(string(Quests::Title))
                    .col(text(Quests::Description))
                    .col(text(Quests::LogText))
                    .col(string(Quests::Map))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Quests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Quests {
    Table,
    Id,
    Title,
    Description,
    LogText,
    Map,
}
