use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct QuestDto {
    pub quest_id: i32,
    pub title: String,
    pub description: String,
    pub log_text: String,
    pub map: String,
}

/// Catalog quest joined with one user's progress and private copy of the texts.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct UserQuestDto {
    pub quest_id: i32,
    pub title: String,
    pub description: String,
    pub log_text: String,
    pub map: String,
    pub status: i32,
    pub user_description: String,
    pub user_log_text: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateQuestTextDto {
    pub description: Option<String>,
    pub log_text: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateQuestStatusDto {
    pub user_id: Option<i32>,
    pub quest_id: Option<i32>,
    #[serde(rename = "newStatus")]
    pub new_status: Option<i32>,
}
