//! Data transfer objects shared by the HTTP API.
//!
//! Field names in this module are the wire contract of the API. Server-side domain
//! models convert into these types at the controller boundary.

pub mod api;
pub mod inventory;
pub mod quest;
pub mod star;
pub mod user;
