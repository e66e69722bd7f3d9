use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct StarDto {
    pub id: i32,
    pub user_id: i32,
    pub quest_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AddUserStarDto {
    pub user_id: Option<i32>,
    pub quest_id: Option<i32>,
}
