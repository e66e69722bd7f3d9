//! SeaORM entity models for the questkeeper database.

pub mod prelude;

pub mod customization;
pub mod quest;
pub mod user;
pub mod user_customization;
pub mod user_quest;
pub mod user_star;
