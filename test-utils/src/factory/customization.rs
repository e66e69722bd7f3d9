//! Customization catalog factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for inserting catalog customizations with a fixed id.
pub struct CustomizationFactory<'a> {
    db: &'a DatabaseConnection,
    id: i32,
    name: String,
    category: String,
    image_url: String,
}

impl<'a> CustomizationFactory<'a> {
    /// Creates a new factory for the catalog id `id`.
    ///
    /// Defaults:
    /// - name: `"Item {id}"`
    /// - category: `"head"`
    /// - image_url: `"/customizations/{id}.png"`
    pub fn new(db: &'a DatabaseConnection, id: i32) -> Self {
        Self {
            db,
            id,
            name: format!("Item {}", id),
            category: "head".to_string(),
            image_url: format!("/customizations/{}.png", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub async fn build(self) -> Result<entity::customization::Model, DbErr> {
        entity::customization::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            category: ActiveValue::Set(self.category),
            image_url: ActiveValue::Set(self.image_url),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a catalog customization with default values.
pub async fn create_customization(
    db: &DatabaseConnection,
    id: i32,
) -> Result<entity::customization::Model, DbErr> {
    CustomizationFactory::new(db, id).build().await
}

/// Creates one catalog customization per id, in the given order.
pub async fn create_customizations(
    db: &DatabaseConnection,
    ids: &[i32],
) -> Result<Vec<entity::customization::Model>, DbErr> {
    let mut items = Vec::with_capacity(ids.len());
    for id in ids {
        items.push(create_customization(db, *id).await?);
    }
    Ok(items)
}
