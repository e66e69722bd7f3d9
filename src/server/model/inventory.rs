//! Customization catalog and inventory domain models.

use crate::model::inventory::{CustomizationDto, InventoryDto};

/// Cosmetic catalog item.
#[derive(Debug, Clone, PartialEq)]
pub struct Customization {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub image_url: String,
}

impl Customization {
    pub fn from_entity(entity: entity::customization::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            category: entity.category,
            image_url: entity.image_url,
        }
    }
}

/// A catalog item owned by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub customization: Customization,
    pub equipped: bool,
}

impl InventoryItem {
    pub fn into_dto(self) -> CustomizationDto {
        CustomizationDto {
            customization_id: self.customization.id,
            name: self.customization.name,
            category: self.customization.category,
            image_url: self.customization.image_url,
            equipped: self.equipped,
        }
    }
}

/// Every item a user owns, in catalog order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Inventory {
    pub items: Vec<InventoryItem>,
}

impl Inventory {
    /// Ids of the items currently equipped, in catalog order.
    pub fn equipped_ids(&self) -> Vec<i32> {
        self.items
            .iter()
            .filter(|item| item.equipped)
            .map(|item| item.customization.id)
            .collect()
    }

    pub fn into_dto(self) -> InventoryDto {
        let inventory: Vec<CustomizationDto> =
            self.items.into_iter().map(InventoryItem::into_dto).collect();
        let equipped = inventory.iter().filter(|c| c.equipped).cloned().collect();

        InventoryDto {
            equipped,
            inventory,
        }
    }
}

/// Parameters for granting catalog items to a user.
#[derive(Debug, Clone)]
pub struct GrantItemsParam {
    pub user_id: i32,
    pub customization_ids: Vec<i32>,
    pub equipped: bool,
}
