//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources needed by
//! the handlers. The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Mailer for activation and password reset emails
//! - Link builder for the URLs embedded in those emails

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{config::AppUrls, service::mail::Mailer};

/// Shared application state passed to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    ///
    /// SeaORM connection pool that is cheap to clone and shared across handlers.
    pub db: DatabaseConnection,

    /// Outbound email sender.
    ///
    /// Either the HTTP mail API client or the logging fallback, chosen at startup.
    pub mailer: Arc<dyn Mailer>,

    /// Public API and frontend base URLs used to build email links.
    pub urls: AppUrls,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `mailer` - Outbound email sender
    /// - `urls` - Base URLs for generated links
    pub fn new(db: DatabaseConnection, mailer: Arc<dyn Mailer>, urls: AppUrls) -> Self {
        Self { db, mailer, urls }
    }
}
