use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "quests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub title: String,
    pub description: String,
    pub log_text: String,
    pub map: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_quest::Entity")]
    UserQuest,
    #[sea_orm(has_many = "super::user_star::Entity")]
    UserStar,
}

impl Related<super::user_quest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserQuest.def()
    }
}

impl Related<super::user_star::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserStar.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
