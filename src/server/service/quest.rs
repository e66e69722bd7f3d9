//! Quest tracking service.
//!
//! Provides the `QuestService` for assigning the catalog to users, updating their
//! progress and private texts, and editing the catalog itself.

use sea_orm::{ConnectionTrait, TransactionTrait};

use crate::server::{
    data::quest::{QuestRepository, UserQuestRepository},
    error::AppError,
    model::quest::{Quest, QuestTextParam, UpdateQuestStatusParam, UserQuest},
};

pub struct QuestService<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait + TransactionTrait> QuestService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_catalog(&self) -> Result<Vec<Quest>, AppError> {
        Ok(QuestRepository::new(self.db).get_all().await?)
    }

    /// Assigns every catalog quest to the user with status 0 and copies of the catalog
    /// texts.
    ///
    /// Quests the user already has are left as they are, so calling this again only
    /// adds quests introduced to the catalog since.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of quests newly assigned (0 for an empty catalog)
    pub async fn assign_default_quests(&self, user_id: i32) -> Result<u64, AppError> {
        let quests = QuestRepository::new(self.db).get_all().await?;
        if quests.is_empty() {
            return Ok(0);
        }

        let assigned = UserQuestRepository::new(self.db)
            .assign(user_id, &quests)
            .await?;

        tracing::debug!("Assigned {} quests to user {}", assigned, user_id);

        Ok(assigned)
    }

    pub async fn get_user_quests(&self, user_id: i32) -> Result<Vec<UserQuest>, AppError> {
        Ok(UserQuestRepository::new(self.db)
            .get_for_user(user_id)
            .await?)
    }

    /// # Returns
    /// - `Ok(true)` - Status updated
    /// - `Ok(false)` - The user has no such quest
    pub async fn update_status(&self, param: UpdateQuestStatusParam) -> Result<bool, AppError> {
        Ok(UserQuestRepository::new(self.db)
            .update_status(param)
            .await?)
    }

    /// Overwrites the user's copy of the quest description and log text.
    ///
    /// # Returns
    /// - `Ok(true)` - Texts updated
    /// - `Ok(false)` - The user has no such quest
    pub async fn update_user_text(
        &self,
        user_id: i32,
        quest_id: i32,
        param: QuestTextParam,
    ) -> Result<bool, AppError> {
        Ok(UserQuestRepository::new(self.db)
            .update_text(user_id, quest_id, param)
            .await?)
    }

    /// Edits the catalog texts of a quest. Existing user copies keep their text.
    ///
    /// # Returns
    /// - `Ok(Quest)` - The updated quest
    /// - `Err(AppError::NotFound)` - Unknown quest id
    pub async fn update_catalog_text(
        &self,
        quest_id: i32,
        param: QuestTextParam,
    ) -> Result<Quest, AppError> {
        QuestRepository::new(self.db)
            .update_text(quest_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Quest not found".to_string()))
    }
}
