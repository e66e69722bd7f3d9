//! Star (achievement marker) repository.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::star::Star;

pub struct StarRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StarRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the user's stars ordered by quest id.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Star>, DbErr> {
        let entities = entity::prelude::UserStar::find()
            .filter(entity::user_star::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_star::Column::QuestId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Star::from_entity).collect())
    }

    /// Awards a star for the quest unless the user already has one.
    ///
    /// # Returns
    /// - `Ok(true)` - Star created
    /// - `Ok(false)` - The user already had a star for that quest
    pub async fn create(&self, user_id: i32, quest_id: i32) -> Result<bool, DbErr> {
        let inserted = entity::prelude::UserStar::insert(entity::user_star::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(user_id),
            quest_id: ActiveValue::Set(quest_id),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::user_star::Column::UserId,
                entity::user_star::Column::QuestId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::UserStar::delete_many()
            .filter(entity::user_star::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
