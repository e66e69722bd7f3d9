//! Process startup and shutdown helpers.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config,
    error::AppError,
    service::mail::{HttpMailer, LogMailer, Mailer},
};

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG`, defaulting to `info,sqlx=warn`.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a bounded connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema and the
/// default customization catalog are present before the first request.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and pool size
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.database_max_connections)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected and migrations applied");

    Ok(db)
}

/// Builds the HTTP client used for outbound API calls.
///
/// Redirects are disabled so a misconfigured mail endpoint cannot bounce requests
/// carrying the API key elsewhere. Every request is bounded by the configured
/// timeouts, since registration waits on the mail API while holding a transaction.
pub fn setup_reqwest_client(config: &Config) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .connect_timeout(config.http_connect_timeout)
        .timeout(config.http_timeout)
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

    Ok(client)
}

/// Selects the mailer: the HTTP mail API when a key is configured, logging otherwise.
pub fn setup_mailer(config: &Config, http_client: reqwest::Client) -> Arc<dyn Mailer> {
    match &config.mail {
        Some(mail) => {
            tracing::info!("Sending email through {}", mail.api_url);
            Arc::new(HttpMailer::new(http_client, mail.clone()))
        }
        None => {
            tracing::warn!("MAIL_API_KEY not set, emails will only be logged");
            Arc::new(LogMailer)
        }
    }
}

/// Resolves when the process receives Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received");
}
