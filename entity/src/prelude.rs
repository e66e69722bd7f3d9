pub use super::customization::Entity as Customization;
pub use super::quest::Entity as Quest;
pub use super::user::Entity as User;
pub use super::user_customization::Entity as UserCustomization;
pub use super::user_quest::Entity as UserQuest;
pub use super::user_star::Entity as UserStar;
