use std::time::Duration;

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_MAIL_API_URL: &str = "https://api.brevo.com/v3/smtp/email";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
const DEFAULT_HTTP_CONNECT_TIMEOUT_SECS: u64 = 5;

pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,

    pub port: u16,

    /// Base URL of this API, used for the activation link.
    pub public_url: Url,
    /// Base URL of the web client, used for password reset links.
    pub frontend_url: Url,

    /// Deadline for a whole outbound HTTP request, including reading the response.
    pub http_timeout: Duration,
    /// Deadline for establishing an outbound connection.
    pub http_connect_timeout: Duration,

    /// `None` when no mail API key is configured; mail is then only logged.
    pub mail: Option<MailConfig>,
}

#[derive(Clone)]
pub struct MailConfig {
    pub api_url: String,
    pub api_key: String,
    pub sender_email: String,
    pub sender_name: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let require =
            |key: &str| get(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));

        let port = match get("PORT") {
            Some(v) => parse_number(&v, "PORT")?,
            None => DEFAULT_PORT,
        };
        let database_max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(v) => parse_number(&v, "DATABASE_MAX_CONNECTIONS")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let http_timeout = match get("HTTP_TIMEOUT_SECS") {
            Some(v) => parse_seconds(&v, "HTTP_TIMEOUT_SECS")?,
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };
        let http_connect_timeout = match get("HTTP_CONNECT_TIMEOUT_SECS") {
            Some(v) => parse_seconds(&v, "HTTP_CONNECT_TIMEOUT_SECS")?,
            None => Duration::from_secs(DEFAULT_HTTP_CONNECT_TIMEOUT_SECS),
        };

        let public_url = match get("PUBLIC_URL") {
            Some(v) => parse_base_url(&v, "PUBLIC_URL")?,
            None => parse_base_url(&format!("http://localhost:{}", port), "PUBLIC_URL")?,
        };
        let frontend_url = parse_base_url(&require("FRONTEND_URL")?, "FRONTEND_URL")?;

        let mail = match get("MAIL_API_KEY") {
            Some(api_key) => Some(MailConfig {
                api_url: get("MAIL_API_URL").unwrap_or_else(|| DEFAULT_MAIL_API_URL.to_string()),
                api_key,
                sender_email: require("MAIL_SENDER_EMAIL")?,
                sender_name: get("MAIL_SENDER_NAME"),
            }),
            None => None,
        };

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            database_max_connections,
            port,
            public_url,
            frontend_url,
            http_timeout,
            http_connect_timeout,
            mail,
        })
    }

    pub fn urls(&self) -> AppUrls {
        AppUrls {
            public_url: self.public_url.clone(),
            frontend_url: self.frontend_url.clone(),
        }
    }
}

/// Builds the absolute links embedded in outgoing emails.
#[derive(Clone, Debug)]
pub struct AppUrls {
    pub public_url: Url,
    pub frontend_url: Url,
}

impl AppUrls {
    /// Link served by this API that activates the account owning `token`.
    pub fn verification_link(&self, token: &str) -> Result<Url, url::ParseError> {
        Self::token_link(&self.public_url, "verify-email", token)
    }

    /// Web client page where the user picks a new password.
    pub fn password_reset_link(&self, token: &str) -> Result<Url, url::ParseError> {
        Self::token_link(&self.frontend_url, "reset-password", token)
    }

    fn token_link(base: &Url, path: &str, token: &str) -> Result<Url, url::ParseError> {
        let mut url = base.join(path)?;
        url.query_pairs_mut().append_pair("token", token);
        Ok(url)
    }
}

fn parse_number<T: std::str::FromStr>(value: &str, name: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

/// Parses a positive number of seconds.
fn parse_seconds(value: &str, name: &str) -> Result<Duration, ConfigError> {
    match parse_number::<u64>(value, name)? {
        0 => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        secs => Ok(Duration::from_secs(secs)),
    }
}

/// Parses a base URL, forcing a trailing slash so relative joins append instead of replace.
fn parse_base_url(value: &str, name: &str) -> Result<Url, ConfigError> {
    let normalized = if value.ends_with('/') {
        value.to_string()
    } else {
        format!("{}/", value)
    };

    Url::parse(&normalized).map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
