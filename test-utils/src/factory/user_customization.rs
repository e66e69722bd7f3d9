//! Ownership rows linking users to catalog customizations.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Grants `customization_id` to `user_id` directly, bypassing the inventory service.
///
/// Both the user and the catalog item must already exist.
pub async fn create_user_customization(
    db: &DatabaseConnection,
    user_id: i32,
    customization_id: i32,
    equipped: bool,
) -> Result<entity::user_customization::Model, DbErr> {
    entity::user_customization::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        customization_id: ActiveValue::Set(customization_id),
        equipped: ActiveValue::Set(equipped),
    }
    .insert(db)
    .await
}
