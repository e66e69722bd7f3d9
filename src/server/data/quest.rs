//! Quest catalog and per-user quest progress repositories.

use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::quest::{
    Quest, QuestTextParam, UpdateQuestStatusParam, UserQuest, QUEST_STATUS_NOT_STARTED,
};

pub struct QuestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> QuestRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the whole catalog ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Quest>, DbErr> {
        let entities = entity::prelude::Quest::find()
            .order_by_asc(entity::quest::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Quest::from_entity).collect())
    }

    pub async fn find_by_id(&self, quest_id: i32) -> Result<Option<Quest>, DbErr> {
        let entity = entity::prelude::Quest::find_by_id(quest_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Quest::from_entity))
    }

    /// Replaces the catalog description and log text of a quest.
    ///
    /// Copies already assigned to users are not touched.
    ///
    /// # Returns
    /// - `Ok(Some(Quest))` - The updated quest
    /// - `Ok(None)` - No quest with that id
    pub async fn update_text(
        &self,
        quest_id: i32,
        param: QuestTextParam,
    ) -> Result<Option<Quest>, DbErr> {
        let Some(existing) = entity::prelude::Quest::find_by_id(quest_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::quest::ActiveModel = existing.into();
        active.description = ActiveValue::Set(param.description);
        active.log_text = ActiveValue::Set(param.log_text);

        let updated = active.update(self.db).await?;

        Ok(Some(Quest::from_entity(updated)))
    }
}

pub struct UserQuestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserQuestRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates one not-started progress row per quest, copying the catalog texts.
    ///
    /// Quests the user already has are skipped.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows inserted
    pub async fn assign(&self, user_id: i32, quests: &[Quest]) -> Result<u64, DbErr> {
        let mut inserted = 0;

        for quest in quests {
            let rows =
                entity::prelude::UserQuest::insert(entity::user_quest::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    quest_id: ActiveValue::Set(quest.id),
                    status: ActiveValue::Set(QUEST_STATUS_NOT_STARTED),
                    user_description: ActiveValue::Set(quest.description.clone()),
                    user_log_text: ActiveValue::Set(quest.log_text.clone()),
                })
                .on_conflict(
                    OnConflict::columns([
                        entity::user_quest::Column::UserId,
                        entity::user_quest::Column::QuestId,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(self.db)
                .await?;

            inserted += rows;
        }

        Ok(inserted)
    }

    /// Gets the user's quests joined with their catalog entries, ordered by quest id.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<UserQuest>, DbErr> {
        let rows = entity::prelude::UserQuest::find()
            .find_also_related(entity::prelude::Quest)
            .filter(entity::user_quest::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_quest::Column::QuestId)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(progress, quest)| {
                quest.map(|quest| UserQuest::from_entity(progress, quest))
            })
            .collect())
    }

    /// # Returns
    /// - `Ok(true)` - Status updated
    /// - `Ok(false)` - The user has no row for that quest
    pub async fn update_status(&self, param: UpdateQuestStatusParam) -> Result<bool, DbErr> {
        let result = entity::prelude::UserQuest::update_many()
            .col_expr(entity::user_quest::Column::Status, Expr::value(param.status))
            .filter(entity::user_quest::Column::UserId.eq(param.user_id))
            .filter(entity::user_quest::Column::QuestId.eq(param.quest_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Overwrites the user's copy of the quest texts.
    ///
    /// # Returns
    /// - `Ok(true)` - Texts updated
    /// - `Ok(false)` - The user has no row for that quest
    pub async fn update_text(
        &self,
        user_id: i32,
        quest_id: i32,
        param: QuestTextParam,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::UserQuest::update_many()
            .col_expr(
                entity::user_quest::Column::UserDescription,
                Expr::value(param.description),
            )
            .col_expr(
                entity::user_quest::Column::UserLogText,
                Expr::value(param.log_text),
            )
            .filter(entity::user_quest::Column::UserId.eq(user_id))
            .filter(entity::user_quest::Column::QuestId.eq(quest_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::UserQuest::delete_many()
            .filter(entity::user_quest::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
