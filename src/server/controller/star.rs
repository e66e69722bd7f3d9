use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        star::{AddUserStarDto, StarDto},
    },
    server::{
        error::AppError,
        service::star::StarService,
        state::AppState,
        util::extract::{JsonBody, PathParam},
    },
};

/// Tag for grouping star endpoints in OpenAPI documentation
pub static STAR_TAG: &str = "star";

/// List a user's stars.
#[utoipa::path(
    get,
    path = "/stars/{id}",
    tag = STAR_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Stars of the user", body = Vec<StarDto>),
        (status = 400, description = "Invalid user id"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stars(
    State(state): State<AppState>,
    PathParam(user_id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let stars = StarService::new(&state.db).get_stars(user_id).await?;

    let stars_dto: Vec<StarDto> = stars.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(stars_dto)))
}

/// Award a star for a quest.
///
/// # Returns
/// - `200 OK` - Star created
/// - `304 Not Modified` - The user already has this star
/// - `400 Bad Request` - Missing user_id or quest_id
/// - `404 Not Found` - Unknown user or quest
#[utoipa::path(
    post,
    path = "/add-user-star",
    tag = STAR_TAG,
    request_body = AddUserStarDto,
    responses(
        (status = 200, description = "Star added", body = MessageDto),
        (status = 304, description = "Star already exists"),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 404, description = "User or quest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_user_star(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AddUserStarDto>,
) -> Result<Response, AppError> {
    let (Some(user_id), Some(quest_id)) = (payload.user_id, payload.quest_id) else {
        return Err(AppError::BadRequest(
            "Missing required fields: user_id, quest_id".to_string(),
        ));
    };

    if !StarService::new(&state.db).add_star(user_id, quest_id).await? {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    Ok((StatusCode::OK, Json(MessageDto::new("Star added"))).into_response())
}
