use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::inventory::InventoryDto;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// User profile together with their inventory, returned by register and login.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub inventories: InventoryDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub is_verified: bool,
}

/// Partial profile update. Any subset of fields may be provided.
#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct UpdateUserDto {
    pub username: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "currentPassword")]
    pub current_password: Option<String>,
    #[serde(rename = "newPassword")]
    pub new_password: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ForgotPasswordDto {
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ResetPasswordDto {
    pub token: Option<String>,
    #[serde(rename = "newPassword")]
    pub new_password: Option<String>,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VerifyEmailQuery {
    /// Activation token from the verification email.
    pub token: Option<String>,
}
