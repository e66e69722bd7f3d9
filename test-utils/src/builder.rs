use entity::prelude::*;
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Customization};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Customization)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements for entity unique keys, executed after every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, plus CREATE INDEX statements for its composite unique keys. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.indexes
            .extend(schema.create_index_from_entity(E::default()));
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user and customization catalog tables plus their join table.
    pub fn with_inventory_tables(self) -> Self {
        self.with_table(User)
            .with_table(Customization)
            .with_table(UserCustomization)
    }

    /// Adds the user and quest catalog tables plus per-user progress and stars.
    pub fn with_quest_tables(self) -> Self {
        self.with_table(User)
            .with_table(Quest)
            .with_table(UserQuest)
            .with_table(UserStar)
    }

    /// Adds every table in the schema.
    ///
    /// Use this when testing account flows that touch inventory, quests and stars
    /// together (registration, deletion).
    pub fn with_all_tables(self) -> Self {
        self.with_table(User)
            .with_table(Customization)
            .with_table(UserCustomization)
            .with_table(Quest)
            .with_table(UserQuest)
            .with_table(UserStar)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
