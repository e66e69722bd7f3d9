use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub is_verified: bool,
    pub verification_token: Option<String>,
    pub reset_token: Option<String>,
    pub reset_token_expires: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_customization::Entity")]
    UserCustomization,
    #[sea_orm(has_many = "super::user_quest::Entity")]
    UserQuest,
    #[sea_orm(has_many = "super::user_star::Entity")]
    UserStar,
}

impl Related<super::user_customization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserCustomization.def()
    }
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
