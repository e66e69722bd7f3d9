use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customizations::Table)
                    .if_not_exists()
                    .col(integer(Customizations::Id).primary_key())
                    .col(string(Customizations::Name))
                    .col(string(Customizations::Category))
                    .col(string(Customizations::ImageUrl))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customizations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Customizations {
    Table,
    Id,
    Name,
    Category,
    ImageUrl,
}
