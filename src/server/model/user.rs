//! User domain models and parameters.
//!
//! Provides the account domain model with its credential and token state, plus the
//! parameter types for registration, login and profile updates.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{
        LoginDto, ProfileDto, RegisterDto, ResetPasswordDto, UpdateUserDto, UserDto,
    },
    server::{
        error::AppError,
        model::inventory::Inventory,
        util::parse::{non_blank, non_empty},
    },
};

/// Registered account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    /// Whether the email address was confirmed through the activation link.
    pub is_verified: bool,
    /// Pending activation token; cleared once verified.
    pub verification_token: Option<String>,
    /// Pending password reset token.
    pub reset_token: Option<String>,
    /// Instant after which `reset_token` is no longer accepted.
    pub reset_token_expires: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            is_verified: entity.is_verified,
            verification_token: entity.verification_token,
            reset_token: entity.reset_token,
            reset_token_expires: entity.reset_token_expires,
            created_at: entity.created_at,
        }
    }

    /// Whether `token` matches the pending reset token and has not expired at `now`.
    pub fn has_valid_reset_token(&self, token: &str, now: DateTime<Utc>) -> bool {
        match (&self.reset_token, self.reset_token_expires) {
            (Some(stored), Some(expires)) => stored == token && expires > now,
            _ => false,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            user_id: self.id,
            username: self.username,
            email: self.email,
            is_verified: self.is_verified,
        }
    }
}

/// User together with their inventory, as returned by registration and login.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub user: User,
    pub inventory: Inventory,
}

impl UserProfile {
    pub fn into_dto(self) -> ProfileDto {
        ProfileDto {
            user_id: self.user.id,
            username: self.user.username,
            email: self.user.email,
            inventories: self.inventory.into_dto(),
        }
    }
}

/// Row values for inserting a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub verification_token: String,
}

/// Column changes for an existing user. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterParam {
    /// Validates the registration body. Emails are lowercased.
    ///
    /// # Returns
    /// - `Ok(RegisterParam)` - All fields present
    /// - `Err(AppError::BadRequest)` - Any of username, email or password missing or blank
    pub fn from_dto(dto: RegisterDto) -> Result<Self, AppError> {
        match (
            non_blank(dto.username),
            non_blank(dto.email),
            non_empty(dto.password),
        ) {
            (Some(username), Some(email), Some(password)) => Ok(Self {
                username,
                email: email.to_lowercase(),
                password,
            }),
            _ => Err(AppError::BadRequest(
                "Missing required fields: username, email, password".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
}

impl LoginParam {
    pub fn from_dto(dto: LoginDto) -> Result<Self, AppError> {
        match (non_blank(dto.email), non_empty(dto.password)) {
            (Some(email), Some(password)) => Ok(Self {
                email: email.to_lowercase(),
                password,
            }),
            _ => Err(AppError::BadRequest(
                "Missing required fields: email, password".to_string(),
            )),
        }
    }
}

/// Requested profile changes, before the current password has been checked.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParam {
    pub username: Option<String>,
    pub email: Option<String>,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

impl UpdateProfileParam {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            username: non_blank(dto.username),
            email: non_blank(dto.email).map(|e| e.to_lowercase()),
            current_password: non_empty(dto.current_password),
            new_password: non_empty(dto.new_password),
        }
    }

    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.new_password.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct ResetPasswordParam {
    pub token: String,
    pub new_password: String,
}

impl ResetPasswordParam {
    pub fn from_dto(dto: ResetPasswordDto) -> Result<Self, AppError> {
        match (non_blank(dto.token), non_empty(dto.new_password)) {
            (Some(token), Some(new_password)) => Ok(Self {
                token,
                new_password,
            }),
            _ => Err(AppError::BadRequest(
                "Missing required fields: token, newPassword".to_string(),
            )),
        }
    }
}
