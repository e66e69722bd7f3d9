//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each
//! entity has a `Factory` struct for customization and a `create_*` convenience function
//! for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let hat = factory::create_customization(&db, 1).await?;
//! factory::create_user_customization(&db, user.id, hat.id, true).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("alice@example.com")
//!     .verified(true)
//!     .build()
//!     .await?;
//! ```

pub mod customization;
pub mod helpers;
pub mod quest;
pub mod user;
pub mod user_customization;

pub use customization::{create_customization, create_customizations};
pub use quest::{create_quest, create_quests};
pub use user::create_user;
pub use user_customization::create_user_customization;
