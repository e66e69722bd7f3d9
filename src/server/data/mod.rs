//! Database repository layer for all domain entities.
//!
//! Repositories are generic over `ConnectionTrait`, so the same repository runs against
//! the connection pool or inside a `DatabaseTransaction` opened by a service. They use
//! SeaORM entity models internally and return domain models.

pub mod customization;
pub mod quest;
pub mod star;
pub mod user;

#[cfg(test)]
mod test;
