use askama::Template;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{
            ForgotPasswordDto, LoginDto, ProfileDto, RegisterDto, ResetPasswordDto,
            UpdateUserDto, UserDto, VerifyEmailQuery,
        },
    },
    server::{
        error::AppError,
        model::user::{LoginParam, RegisterParam, ResetPasswordParam, UpdateProfileParam},
        service::account::AccountService,
        state::AppState,
        util::{
            extract::{JsonBody, PathParam},
            parse::non_blank,
        },
    },
};

/// Tag for grouping account endpoints in OpenAPI documentation
pub static ACCOUNT_TAG: &str = "account";

fn account_service(state: &AppState) -> AccountService<'_> {
    AccountService::new(&state.db, state.mailer.as_ref(), &state.urls)
}

/// Register a new account.
///
/// Creates an unverified account holding the default equipped items and every catalog
/// quest, then emails an activation link.
///
/// # Returns
/// - `201 Created` - The new profile with its inventory
/// - `400 Bad Request` - Missing username, email or password
/// - `409 Conflict` - Email already in use
/// - `500 Internal Server Error` - Database or mail delivery error
#[utoipa::path(
    post,
    path = "/register",
    tag = ACCOUNT_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = ProfileDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = RegisterParam::from_dto(payload)?;

    let profile = account_service(&state).register(param).await?;

    Ok((StatusCode::CREATED, Json(profile.into_dto())))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Profile with inventory
/// - `400 Bad Request` - Missing email or password
/// - `401 Unauthorized` - Invalid credentials or email not verified
#[utoipa::path(
    post,
    path = "/login",
    tag = ACCOUNT_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Authenticated", body = ProfileDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 401, description = "Invalid credentials or unverified email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = LoginParam::from_dto(payload)?;

    let profile = account_service(&state).login(param).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Activation link target. Renders an HTML page for both outcomes.
#[utoipa::path(
    get,
    path = "/verify-email",
    tag = ACCOUNT_TAG,
    params(VerifyEmailQuery),
    responses(
        (status = 200, description = "Email verified", content_type = "text/html", body = String),
        (status = 400, description = "Invalid or already used token", content_type = "text/html", body = String),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_email(
    State(state): State<AppState>,
    query: Result<Query<VerifyEmailQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let token = query.ok().and_then(|Query(query)| query.token);
    let verified = account_service(&state).verify_email(token).await?;

    let (status, page) = if verified {
        (
            StatusCode::OK,
            VerificationPage {
                title: "Email verified",
                message: "Your account is now active. You can close this page and log in.",
            },
        )
    } else {
        (
            StatusCode::BAD_REQUEST,
            VerificationPage {
                title: "Verification failed",
                message: "This activation link is invalid or has already been used.",
            },
        )
    };

    Ok((status, Html(page.render()?)))
}

#[derive(Template)]
#[template(path = "verify_email.html")]
struct VerificationPage<'a> {
    title: &'a str,
    message: &'a str,
}

/// Request a password reset email.
///
/// Always answers with the same message, whether or not the email is registered.
#[utoipa::path(
    post,
    path = "/forgot-password",
    tag = ACCOUNT_TAG,
    request_body = ForgotPasswordDto,
    responses(
        (status = 200, description = "Request accepted", body = MessageDto),
        (status = 400, description = "Missing email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ForgotPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let email = non_blank(payload.email)
        .ok_or_else(|| AppError::BadRequest("Missing required field: email".to_string()))?;

    let _ = account_service(&state).forgot_password(&email).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(
            "If an account exists for that email, a password reset link has been sent",
        )),
    ))
}

/// Set a new password using a reset token.
///
/// # Returns
/// - `200 OK` - Password replaced
/// - `400 Bad Request` - Missing fields, or invalid or expired token
#[utoipa::path(
    post,
    path = "/reset-password",
    tag = ACCOUNT_TAG,
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password replaced", body = MessageDto),
        (status = 400, description = "Missing fields or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = ResetPasswordParam::from_dto(payload)?;

    account_service(&state).reset_password(param).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Password has been reset")),
    ))
}

/// Update any subset of username, email and password.
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Nothing to update
/// - `403 Forbidden` - Missing or wrong current password
/// - `404 Not Found` - Unknown user
/// - `409 Conflict` - Email already in use
#[utoipa::path(
    put,
    path = "/user/{id}",
    tag = ACCOUNT_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "No data provided", body = ErrorDto),
        (status = 403, description = "Current password is incorrect", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    PathParam(user_id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateProfileParam::from_dto(payload);

    let user = account_service(&state)
        .update_profile(user_id, param)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete an account together with its inventory, quests and stars.
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = ACCOUNT_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    PathParam(user_id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !account_service(&state).delete_user(user_id).await? {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok((StatusCode::OK, Json(MessageDto::new("User deleted"))))
}
