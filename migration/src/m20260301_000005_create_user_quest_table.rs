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
                    .table(UserQuests::Table)
                    .if_not_exists()
                    .col(integer(UserQuests::UserId))
                    .col(integer(UserQuests::QuestId))
                    .col(integer(UserQuests::Status).default(0))
                    .col(text(UserQuests::UserDescription))
                    .col(text(UserQuests::UserLogText))
                    .primary_key(
                        Index::create()
                            .name("pk_user_quests")
                            .col(UserQuests::UserId)
                            .col(UserQuests::QuestId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_quests_user_id")
                            .from(UserQuests::Table, UserQuests::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_quests_quest_id")
                            .from(UserQuests::Table, UserQuests::QuestId)
                            .to(Quests::Table, Quests::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserQuests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserQuests {
    Table,
    UserId,
    QuestId,
    Status,
    UserDescription,
    UserLogText,
}
