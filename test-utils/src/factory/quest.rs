//! Quest catalog factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for inserting catalog quests with a fixed id.
pub struct QuestFactory<'a> {
    db: &'a DatabaseConnection,
    id: i32,
    title: String,
    description: String,
    log_text: String,
    map: String,
}

impl<'a> QuestFactory<'a> {
    /// Creates a new factory for the catalog id `id`.
    ///
    /// Defaults:
    /// - title: `"Quest {id}"`
    /// - description: `"Description {id}"`
    /// - log_text: `"Log {id}"`
    /// - map: `"overworld"`
    pub fn new(db: &'a DatabaseConnection, id: i32) -> Self {
        Self {
            db,
            id,
            title: format!("Quest {}", id),
            description: format!("Description {}", id),
            log_text: format!("Log {}", id),
            map: "overworld".to_string(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn log_text(mut self, log_text: impl Into<String>) -> Self {
        self.log_text = log_text.into();
        self
    }

    pub async fn build(self) -> Result<entity::quest::Model, DbErr> {
        entity::quest::ActiveModel {
            id: ActiveValue::Set(self.id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            log_text: ActiveValue::Set(self.log_text),
            map: ActiveValue::Set(self.map),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a catalog quest with default values.
pub async fn create_quest(db: &DatabaseConnection, id: i32) -> Result<entity::quest::Model, DbErr> {
    QuestFactory::new(db, id).build().await
}

/// Creates one catalog quest per id, in the given order.
pub async fn create_quests(
    db: &DatabaseConnection,
    ids: &[i32],
) -> Result<Vec<entity::quest::Model>, DbErr> {
    let mut quests = Vec::with_capacity(ids.len());
    for id in ids {
        quests.push(create_quest(db, *id).await?);
    }
    Ok(quests)
}
