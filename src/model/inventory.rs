use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CustomizationDto {
    pub customization_id: i32,
    pub name: String,
    pub category: String,
    pub image_url: String,
    pub equipped: bool,
}

/// A user's owned items and the subset currently equipped.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct InventoryDto {
    pub equipped: Vec<CustomizationDto>,
    pub inventory: Vec<CustomizationDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AddCustomizationDto {
    pub user_id: Option<i32>,
    pub customization_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AddCustomizationSetDto {
    pub user_id: Option<i32>,
    pub customization_ids: Option<Vec<i32>>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GrantResultDto {
    /// Whether at least one new item was added to the inventory.
    pub added: bool,
}

/// Replaces the equipped set. Ids may be sent as numbers or numeric strings.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct EquipDto {
    pub user_id: Option<i32>,
    #[schema(value_type = Option<Vec<i32>>)]
    pub equipped_ids: Option<Vec<serde_json::Value>>,
}
