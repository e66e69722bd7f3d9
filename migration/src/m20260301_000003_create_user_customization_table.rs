use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::Users;
use super::m20260301_000002_create_customization_table::Customizations;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserCustomizations::Table)
                    .if_not_exists()
                    .col(integer(UserCustomizations::UserId))
                    .col(integer(UserCustomizations::CustomizationId))
                    .col(boolean(UserCustomizations::Equipped).default(false))
                    .primary_key(
                        Index::create()
                            .name("pk_user_customizations")
                            .col(UserCustomizations::UserId)
                            .col(UserCustomizations::CustomizationId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_customizations_user_id")
                            .from(UserCustomizations::Table, UserCustomizations::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_customizations_customization_id")
                            .from(
                                UserCustomizations::Table,
                                UserCustomizations::CustomizationId,
                            )
                            .to(Customizations::Table, Customizations::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserCustomizations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserCustomizations {
    Table,
    UserId,
    CustomizationId,
    Equipped,
}
