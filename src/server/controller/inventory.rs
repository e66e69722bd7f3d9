use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        inventory::{
            AddCustomizationDto, AddCustomizationSetDto, EquipDto, GrantResultDto, InventoryDto,
        },
    },
    server::{
        error::AppError, model::inventory::GrantItemsParam, service::inventory::InventoryService,
        state::AppState,
        util::{
            extract::{JsonBody, PathParam},
            parse::parse_item_ids,
        },
    },
};

/// Tag for grouping inventory endpoints in OpenAPI documentation
pub static INVENTORY_TAG: &str = "inventory";

/// Get a user's owned items and the equipped subset.
#[utoipa::path(
    get,
    path = "/inventory/{id}",
    tag = INVENTORY_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Inventory of the user", body = InventoryDto),
        (status = 400, description = "Invalid user id"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inventory(
    State(state): State<AppState>,
    PathParam(user_id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let inventory = InventoryService::new(&state.db)
        .get_inventory(user_id)
        .await?;

    Ok((StatusCode::OK, Json(inventory.into_dto())))
}

/// Grant one unequipped item. Granting an owned item is a no-op.
///
/// # Returns
/// - `200 OK` - `{"added": bool}`
/// - `400 Bad Request` - Missing user_id or customization_id
/// - `404 Not Found` - Unknown user or item
#[utoipa::path(
    post,
    path = "/add-customization",
    tag = INVENTORY_TAG,
    request_body = AddCustomizationDto,
    responses(
        (status = 200, description = "Grant processed", body = GrantResultDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 404, description = "User or customization not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_customization(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AddCustomizationDto>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(user_id), Some(customization_id)) = (payload.user_id, payload.customization_id)
    else {
        return Err(AppError::BadRequest(
            "Missing required fields: user_id, customization_id".to_string(),
        ));
    };

    let added = InventoryService::new(&state.db)
        .grant_item(user_id, customization_id)
        .await?;

    Ok((StatusCode::OK, Json(GrantResultDto { added })))
}

/// Grant several unequipped items at once.
#[utoipa::path(
    post,
    path = "/add-customization-set",
    tag = INVENTORY_TAG,
    request_body = AddCustomizationSetDto,
    responses(
        (status = 200, description = "Grant processed", body = GrantResultDto),
        (status = 400, description = "Missing fields or empty id list", body = ErrorDto),
        (status = 404, description = "User or customization not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_customization_set(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AddCustomizationSetDto>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(user_id), Some(customization_ids)) = (payload.user_id, payload.customization_ids)
    else {
        return Err(AppError::BadRequest(
            "Missing required fields: user_id, customization_ids".to_string(),
        ));
    };

    let added = InventoryService::new(&state.db)
        .grant_item_set(GrantItemsParam {
            user_id,
            customization_ids,
            equipped: false,
        })
        .await?;

    Ok((StatusCode::OK, Json(GrantResultDto { added })))
}

/// Replace the equipped set.
///
/// Unequips everything the user owns, then equips the listed items they own, in one
/// transaction. An empty list unequips everything.
///
/// # Returns
/// - `200 OK` - The inventory after the swap
/// - `400 Bad Request` - Missing fields or a non-integer id
#[utoipa::path(
    put,
    path = "/inventory/equip",
    tag = INVENTORY_TAG,
    request_body = EquipDto,
    responses(
        (status = 200, description = "Equipped set replaced", body = InventoryDto),
        (status = 400, description = "Missing fields or invalid item id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn equip(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<EquipDto>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(user_id), Some(equipped_ids)) = (payload.user_id, payload.equipped_ids) else {
        return Err(AppError::BadRequest(
            "Missing required fields: user_id, equipped_ids".to_string(),
        ));
    };
    let equipped_ids = parse_item_ids(equipped_ids)?;

    let inventory = InventoryService::new(&state.db)
        .set_equipped(user_id, &equipped_ids)
        .await?;

    Ok((StatusCode::OK, Json(inventory.into_dto())))
}
