use chrono::{DateTime, Utc};

use crate::model::star::StarDto;

/// Achievement marker for a completed quest.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub id: i32,
    pub user_id: i32,
    pub quest_id: i32,
    pub created_at: DateTime<Utc>,
}

impl Star {
    pub fn from_entity(entity: entity::user_star::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            quest_id: entity.quest_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> StarDto {
        StarDto {
            id: self.id,
            user_id: self.user_id,
            quest_id: self.quest_id,
            created_at: self.created_at,
        }
    }
}
