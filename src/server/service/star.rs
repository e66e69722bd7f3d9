//! Star service.

use sea_orm::{ConnectionTrait, TransactionTrait};

use crate::server::{
    data::{quest::QuestRepository, star::StarRepository, user::UserRepository},
    error::AppError,
    model::star::Star,
};

pub struct StarService<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait + TransactionTrait> StarService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_stars(&self, user_id: i32) -> Result<Vec<Star>, AppError> {
        Ok(StarRepository::new(self.db).get_for_user(user_id).await?)
    }

    /// Awards a star for a quest.
    ///
    /// # Returns
    /// - `Ok(true)` - Star created
    /// - `Ok(false)` - The user already has a star for that quest
    /// - `Err(AppError::NotFound)` - Unknown user or quest
    pub async fn add_star(&self, user_id: i32, quest_id: i32) -> Result<bool, AppError> {
        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        if QuestRepository::new(self.db)
            .find_by_id(quest_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Quest not found".to_string()));
        }

        Ok(StarRepository::new(self.db).create(user_id, quest_id).await?)
    }
}
