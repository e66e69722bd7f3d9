pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_customization_table;
mod m20260301_000003_create_user_customization_table;
mod m20260301_000004_create_quest_table;
mod m20260301_000005_create_user_quest_table;
mod m20260301_000006_create_user_star_table;
mod m20260302_000007_seed_default_customizations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_customization_table::Migration),
            Box::new(m20260301_000003_create_user_customization_table::Migration),
            Box::new(m20260301_000004_create_quest_table::Migration),
            Box::new(m20260301_000005_create_user_quest_table::Migration),
            Box::new(m20260301_000006_create_user_star_table::Migration),
            Box::new(m20260302_000007_seed_default_customizations::Migration),
        ]
    }
}
