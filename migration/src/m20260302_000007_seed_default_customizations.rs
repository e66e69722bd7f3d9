use sea_orm_migration::prelude::*;

use super::m20260301_000002_create_customization_table::Customizations;

/// Starter items granted and equipped on registration.
const DEFAULT_CUSTOMIZATIONS: [(i32, &str, &str, &str); 3] = [
    (64, "Starter Hat", "head", "/customizations/64.png"),
    (65, "Starter Shirt", "body", "/customizations/65.png"),
    (66, "Starter Boots", "feet", "/customizations/66.png"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert.into_table(Customizations::Table).columns([
            Customizations::Id,
            Customizations::Name,
            Customizations::Category,
            Customizations::ImageUrl,
        ]);

        for (id, name, category, image_url) in DEFAULT_CUSTOMIZATIONS {
            insert.values_panic([
                id.into(),
                name.into(),
                category.into(),
                image_url.into(),
            ]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let ids: Vec<i32> = DEFAULT_CUSTOMIZATIONS.iter().map(|(id, ..)| *id).collect();

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Customizations::Table)
                    .and_where(Expr::col(Customizations::Id).is_in(ids))
                    .to_owned(),
            )
            .await
    }
}
