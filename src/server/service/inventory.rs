//! Inventory service for business logic.
//!
//! This module provides the `InventoryService` for granting catalog items to users and
//! swapping their equipped set. It is generic over the connection so registration can
//! grant the default items inside its own transaction.

use sea_orm::{ConnectionTrait, TransactionSession, TransactionTrait};

use crate::server::{
    data::{
        customization::{CustomizationRepository, UserCustomizationRepository},
        user::UserRepository,
    },
    error::AppError,
    model::inventory::{GrantItemsParam, Inventory},
};

/// Items granted and equipped on every new account.
pub const DEFAULT_CUSTOMIZATION_IDS: [i32; 3] = [64, 65, 66];

pub struct InventoryService<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait + TransactionTrait> InventoryService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every item the user owns, in catalog order.
    ///
    /// An unknown user simply has an empty inventory.
    pub async fn get_inventory(&self, user_id: i32) -> Result<Inventory, AppError> {
        let inventory = UserCustomizationRepository::new(self.db)
            .get_inventory(user_id)
            .await?;
        Ok(inventory)
    }

    /// Grants a single unequipped item.
    ///
    /// # Returns
    /// - `Ok(true)` - Item added to the inventory
    /// - `Ok(false)` - The user already owned it; nothing changed
    /// - `Err(AppError::NotFound)` - Unknown user or catalog item
    pub async fn grant_item(&self, user_id: i32, customization_id: i32) -> Result<bool, AppError> {
        self.ensure_user_exists(user_id).await?;
        self.ensure_catalog_items_exist(&[customization_id]).await?;

        let added = UserCustomizationRepository::new(self.db)
            .grant(user_id, customization_id, false)
            .await?;

        tracing::debug!(
            "Grant of customization {} to user {}: added={}",
            customization_id,
            user_id,
            added
        );

        Ok(added)
    }

    /// Grants every listed item, skipping ones the user already owns.
    ///
    /// The grants run in one transaction, so a failure part way leaves the inventory
    /// unchanged.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one item was added
    /// - `Ok(false)` - The user already owned every item
    /// - `Err(AppError::BadRequest)` - Empty id list
    /// - `Err(AppError::NotFound)` - Unknown user or catalog item
    pub async fn grant_item_set(&self, param: GrantItemsParam) -> Result<bool, AppError> {
        let mut ids = param.customization_ids;
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Err(AppError::BadRequest(
                "customization_ids must contain at least one id".to_string(),
            ));
        }

        self.ensure_user_exists(param.user_id).await?;
        self.ensure_catalog_items_exist(&ids).await?;

        let txn = self.db.begin().await?;
        let inserted = UserCustomizationRepository::new(&txn)
            .grant_many(param.user_id, &ids, param.equipped)
            .await?;
        txn.commit().await?;

        Ok(inserted > 0)
    }

    /// Grants the starter items, equipped. Used during registration.
    pub async fn grant_default_items(&self, user_id: i32) -> Result<u64, AppError> {
        let inserted = UserCustomizationRepository::new(self.db)
            .grant_many(user_id, &DEFAULT_CUSTOMIZATION_IDS, true)
            .await?;
        Ok(inserted)
    }

    /// Replaces the equipped set of the user.
    ///
    /// Clears every equipped flag of the user, then sets it on the listed items they
    /// own, in one transaction. Any failure rolls back to the previous equipped set.
    /// Ids the user does not own are ignored.
    ///
    /// # Returns
    /// - `Ok(Inventory)` - The inventory after the swap
    pub async fn set_equipped(
        &self,
        user_id: i32,
        equipped_ids: &[i32],
    ) -> Result<Inventory, AppError> {
        let txn = self.db.begin().await?;

        let repo = UserCustomizationRepository::new(&txn);
        repo.unequip_all(user_id).await?;
        let equipped = repo.equip(user_id, equipped_ids).await?;

        txn.commit().await?;

        tracing::debug!(
            "Equipped {} of {} requested items for user {}",
            equipped,
            equipped_ids.len(),
            user_id
        );

        self.get_inventory(user_id).await
    }

    async fn ensure_user_exists(&self, user_id: i32) -> Result<(), AppError> {
        match UserRepository::new(self.db).find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound("User not found".to_string())),
        }
    }

    /// Fails with the first id in `ids` missing from the catalog.
    async fn ensure_catalog_items_exist(&self, ids: &[i32]) -> Result<(), AppError> {
        let found = CustomizationRepository::new(self.db).get_by_ids(ids).await?;

        match ids
            .iter()
            .find(|id| !found.iter().any(|item| item.id == **id))
        {
            Some(missing) => Err(AppError::NotFound(format!(
                "Customization {} not found",
                missing
            ))),
            None => Ok(()),
        }
    }
}
