//! Customization catalog and ownership repositories.
//!
//! `CustomizationRepository` reads the immutable catalog. `UserCustomizationRepository`
//! manages which catalog items each user owns and which of those are equipped. The
//! (user_id, customization_id) primary key guarantees at most one ownership row per item.

use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::inventory::{Customization, Inventory, InventoryItem};

pub struct CustomizationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CustomizationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the catalog items among `ids`, ordered by id. Unknown ids are skipped.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Customization>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Customization::find()
            .filter(entity::customization::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::customization::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(Customization::from_entity)
            .collect())
    }
}

pub struct UserCustomizationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserCustomizationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every item owned by the user joined with its catalog entry, in catalog order.
    pub async fn get_inventory(&self, user_id: i32) -> Result<Inventory, DbErr> {
        let rows = entity::prelude::UserCustomization::find()
            .find_also_related(entity::prelude::Customization)
            .filter(entity::user_customization::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_customization::Column::CustomizationId)
            .all(self.db)
            .await?;

        let items = rows
            .into_iter()
            .filter_map(|(owned, catalog)| {
                catalog.map(|catalog| InventoryItem {
                    customization: Customization::from_entity(catalog),
                    equipped: owned.equipped,
                })
            })
            .collect();

        Ok(Inventory { items })
    }

    /// Grants one item to the user unless they already own it.
    ///
    /// An existing ownership row is left untouched, including its equipped flag.
    ///
    /// # Returns
    /// - `Ok(true)` - Row inserted
    /// - `Ok(false)` - The user already owned the item
    /// - `Err(DbErr)` - Database error, including foreign key violations
    pub async fn grant(
        &self,
        user_id: i32,
        customization_id: i32,
        equipped: bool,
    ) -> Result<bool, DbErr> {
        let inserted =
            entity::prelude::UserCustomization::insert(entity::user_customization::ActiveModel {
                user_id: sea_orm::ActiveValue::Set(user_id),
                customization_id: sea_orm::ActiveValue::Set(customization_id),
                equipped: sea_orm::ActiveValue::Set(equipped),
            })
            .on_conflict(
                OnConflict::columns([
                    entity::user_customization::Column::UserId,
                    entity::user_customization::Column::CustomizationId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(inserted > 0)
    }

    /// Grants each item in turn.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of newly inserted rows
    pub async fn grant_many(
        &self,
        user_id: i32,
        customization_ids: &[i32],
        equipped: bool,
    ) -> Result<u64, DbErr> {
        let mut inserted = 0;

        for customization_id in customization_ids {
            if self.grant(user_id, *customization_id, equipped).await? {
                inserted += 1;
            }
        }

        Ok(inserted)
    }

    /// Sets `equipped = false` on every item the user owns.
    pub async fn unequip_all(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::UserCustomization::update_many()
            .col_expr(entity::user_customization::Column::Equipped, Expr::value(false))
            .filter(entity::user_customization::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Sets `equipped = true` on the listed items the user owns. Ids the user does not
    /// own are ignored.
    pub async fn equip(&self, user_id: i32, customization_ids: &[i32]) -> Result<u64, DbErr> {
        if customization_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::UserCustomization::update_many()
            .col_expr(entity::user_customization::Column::Equipped, Expr::value(true))
            .filter(entity::user_customization::Column::UserId.eq(user_id))
            .filter(
                entity::user_customization::Column::CustomizationId
                    .is_in(customization_ids.iter().copied()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::UserCustomization::delete_many()
            .filter(entity::user_customization::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
