//! Business logic layer.
//!
//! Services orchestrate repositories and external collaborators (the mailer) and work
//! with domain models rather than DTOs. Services that must compose several writes
//! atomically are generic over the connection so they can run inside a transaction
//! opened by a caller.

pub mod account;
pub mod credential;
pub mod inventory;
pub mod mail;
pub mod quest;
pub mod star;
