use sea_orm::entity::prelude::*;

/// Catalog item. Ids are assigned by the catalog, not the database.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customizations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub category: String,
    pub image_url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_customization::Entity")]
    UserCustomization,
}

impl Related<super::user_customization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserCustomization.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
