//! Quest catalog and per-user progress domain models.

use crate::{
    model::quest::{QuestDto, UpdateQuestStatusDto, UpdateQuestTextDto, UserQuestDto},
    server::error::AppError,
};

/// Catalog quest definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Quest {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub log_text: String,
    pub map: String,
}

impl Quest {
    pub fn from_entity(entity: entity::quest::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            log_text: entity.log_text,
            map: entity.map,
        }
    }

    pub fn into_dto(self) -> QuestDto {
        QuestDto {
            quest_id: self.id,
            title: self.title,
            description: self.description,
            log_text: self.log_text,
            map: self.map,
        }
    }
}

/// A user's progress on one catalog quest.
///
/// `user_description` and `user_log_text` start as copies of the catalog texts and
/// are edited independently afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct UserQuest {
    pub quest: Quest,
    pub status: i32,
    pub user_description: String,
    pub user_log_text: String,
}

impl UserQuest {
    pub fn from_entity(progress: entity::user_quest::Model, quest: entity::quest::Model) -> Self {
        Self {
            quest: Quest::from_entity(quest),
            status: progress.status,
            user_description: progress.user_description,
            user_log_text: progress.user_log_text,
        }
    }

    pub fn into_dto(self) -> UserQuestDto {
        UserQuestDto {
            quest_id: self.quest.id,
            title: self.quest.title,
            description: self.quest.description,
            log_text: self.quest.log_text,
            map: self.quest.map,
            status: self.status,
            user_description: self.user_description,
            user_log_text: self.user_log_text,
        }
    }
}

/// Initial status of every assigned quest.
pub const QUEST_STATUS_NOT_STARTED: i32 = 0;

/// Parameters for changing the status of one user quest.
#[derive(Debug, Clone)]
pub struct UpdateQuestStatusParam {
    pub user_id: i32,
    pub quest_id: i32,
    pub status: i32,
}

impl UpdateQuestStatusParam {
    pub fn from_dto(dto: UpdateQuestStatusDto) -> Result<Self, AppError> {
        match (dto.user_id, dto.quest_id, dto.new_status) {
            (Some(user_id), Some(quest_id), Some(status)) => Ok(Self {
                user_id,
                quest_id,
                status,
            }),
            _ => Err(AppError::BadRequest(
                "Missing required fields: user_id, quest_id, newStatus".to_string(),
            )),
        }
    }
}

/// Replacement description and log text.
#[derive(Debug, Clone)]
pub struct QuestTextParam {
    pub description: String,
    pub log_text: String,
}

impl QuestTextParam {
    /// Both texts are required; empty strings are accepted.
    pub fn from_dto(dto: UpdateQuestTextDto) -> Result<Self, AppError> {
        match (dto.description, dto.log_text) {
            (Some(description), Some(log_text)) => Ok(Self {
                description,
                log_text,
            }),
            _ => Err(AppError::BadRequest(
                "Missing required fields: description, log_text".to_string(),
            )),
        }
    }
}
