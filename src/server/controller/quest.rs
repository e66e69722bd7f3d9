use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        quest::{QuestDto, UpdateQuestStatusDto, UpdateQuestTextDto, UserQuestDto},
    },
    server::{
        error::AppError,
        model::quest::{QuestTextParam, UpdateQuestStatusParam},
        service::quest::QuestService,
        state::AppState,
        util::extract::{JsonBody, PathParam},
    },
};

/// Tag for grouping quest endpoints in OpenAPI documentation
pub static QUEST_TAG: &str = "quest";

/// List the quest catalog.
#[utoipa::path(
    get,
    path = "/quests",
    tag = QUEST_TAG,
    responses(
        (status = 200, description = "Quest catalog", body = Vec<QuestDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_quests(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let quests = QuestService::new(&state.db).get_catalog().await?;

    let quests_dto: Vec<QuestDto> = quests.into_iter().map(|q| q.into_dto()).collect();

    Ok((StatusCode::OK, Json(quests_dto)))
}

/// List a user's quests with their status and private texts.
#[utoipa::path(
    get,
    path = "/user-quests/{id}",
    tag = QUEST_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Quests of the user", body = Vec<UserQuestDto>),
        (status = 400, description = "Invalid user id"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_quests(
    State(state): State<AppState>,
    PathParam(user_id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let quests = QuestService::new(&state.db)
        .get_user_quests(user_id)
        .await?;

    let quests_dto: Vec<UserQuestDto> = quests.into_iter().map(|q| q.into_dto()).collect();

    Ok((StatusCode::OK, Json(quests_dto)))
}

/// Overwrite a user's copy of a quest's description and log text.
#[utoipa::path(
    put,
    path = "/user-quests/{user_id}/{quest_id}",
    tag = QUEST_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("quest_id" = i32, Path, description = "Quest ID")
    ),
    request_body = UpdateQuestTextDto,
    responses(
        (status = 200, description = "Quest text updated", body = MessageDto),
        (status = 400, description = "Missing fields", body = ErrorDto),
        (status = 404, description = "The user has no such quest", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_quest_text(
    State(state): State<AppState>,
    PathParam((user_id, quest_id)): PathParam<(i32, i32)>,
    JsonBody(payload): JsonBody<UpdateQuestTextDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = QuestTextParam::from_dto(payload)?;

    if !QuestService::new(&state.db)
        .update_user_text(user_id, quest_id, param)
        .await?
    {
        return Err(AppError::NotFound("User quest not found".to_string()));
    }

    Ok((StatusCode::OK, Json(MessageDto::new("Quest updated"))))
}

/// Change the status of one of a user's quests.
#[utoipa::path(
    put,
    path = "/user-quests-status",
    tag = QUEST_TAG,
    request_body = UpdateQuestStatusDto,
    responses(
        (status = 200, description = "Status updated", body = MessageDto),
        (status = 400, description = "Missing fields", body = ErrorDto),
        (status = 404, description = "The user has no such quest", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_quest_status(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UpdateQuestStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateQuestStatusParam::from_dto(payload)?;

    if !QuestService::new(&state.db).update_status(param).await? {
        return Err(AppError::NotFound("User quest not found".to_string()));
    }

    Ok((StatusCode::OK, Json(MessageDto::new("Quest status updated"))))
}

/// Edit the catalog description and log text of a quest.
///
/// Copies already assigned to users keep their text.
#[utoipa::path(
    put,
    path = "/quests/{id}",
    tag = QUEST_TAG,
    params(
        ("id" = i32, Path, description = "Quest ID")
    ),
    request_body = UpdateQuestTextDto,
    responses(
        (status = 200, description = "Quest updated", body = QuestDto),
        (status = 400, description = "Missing fields", body = ErrorDto),
        (status = 404, description = "Quest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_quest(
    State(state): State<AppState>,
    PathParam(quest_id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateQuestTextDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = QuestTextParam::from_dto(payload)?;

    let quest = QuestService::new(&state.db)
        .update_catalog_text(quest_id, param)
        .await?;

    Ok((StatusCode::OK, Json(quest.into_dto())))
}
