use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::Users;
use super::m20260301_000004_create_quest_table::Quests;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserStars::Table)
                    .if_not_exists()
                    .col(pk_auto(UserStars::Id))
                    .col(integer(UserStars::UserId))
                    .col(integer(UserStars::QuestId))
                    .col(timestamp_with_time_zone(UserStars::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_stars_user_id")
                            .from(UserStars::Table, UserStars::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_stars_quest_id")
                            .from(UserStars::Table, UserStars::QuestId)
                            .to(Quests::Table, Quests::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_user_stars_user_quest")
                            .col(UserStars::UserId)
                            .col(UserStars::QuestId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserStars::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserStars {
    Table,
    Id,
    UserId,
    QuestId,
    CreatedAt,
}
