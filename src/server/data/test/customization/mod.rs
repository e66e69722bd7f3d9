use crate::server::data::customization::{CustomizationRepository, UserCustomizationRepository};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod equip;
mod get_by_ids;
mod get_inventory;

/// Counts the ownership rows of a user.
async fn owned_count(db: &sea_orm::DatabaseConnection, user_id: i32) -> Result<u64, DbErr> {
    entity::prelude::UserCustomization::find()
        .filter(entity::user_customization::Column::UserId.eq(user_id))
        .count(db)
        .await
}
