use std::str::FromStr;

use chrono_tz::Tz;
use cinedex_core::clock::{AppClock, DEFAULT_TIMEZONE};
use sqlx::postgres::PgConnectOptions;

/// Configuration failures detected at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("Database is not configured: set DATABASE_URL or DB_NAME")]
    MissingDatabase,
}

/// Log output format (`LOG_FORMAT`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Database connection settings.
///
/// `DATABASE_URL` wins when set; otherwise the discrete `DB_*` variables
/// are assembled into connect options.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url).map_err(|e| ConfigError::Invalid {
                var: "DATABASE_URL",
                value: "<redacted>".to_string(),
                reason: e.to_string(),
            });
        }

        let name = self.name.as_deref().ok_or(ConfigError::MissingDatabase)?;
        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(name);
        if let Some(username) = &self.username {
            options = options.username(username);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        Ok(options)
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database name have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Name reported by the health probe (default: `Movie service`).
    pub service_name: String,
    /// Zone used to stamp record timestamps (default: `UTC`).
    pub app_timezone: Tz,
    pub log_format: LogFormat,
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SERVICE_NAME`         | `Movie service`            |
    /// | `APP_TIMEZONE`         | `UTC`                      |
    /// | `LOG_FORMAT`           | `pretty`                   |
    /// | `DATABASE_URL`         | unset                      |
    /// | `DB_HOST`              | `localhost`                |
    /// | `DB_PORT`              | `5432`                     |
    /// | `DB_USERNAME`          | unset                      |
    /// | `DB_PASSWORD`          | unset                      |
    /// | `DB_NAME`              | unset                      |
    /// | `DB_MAX_CONNECTIONS`   | `20`                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_var("PORT", var("PORT"), 3000u16)?;

        let cors_origins: Vec<String> = var("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs =
            parse_var("REQUEST_TIMEOUT_SECS", var("REQUEST_TIMEOUT_SECS"), 30u64)?;

        let service_name = var("SERVICE_NAME").unwrap_or_else(|| "Movie service".into());

        let app_timezone = match var("APP_TIMEZONE") {
            Some(zone) => AppClock::from_zone_name(&zone)
                .map_err(|reason| ConfigError::Invalid {
                    var: "APP_TIMEZONE",
                    value: zone.clone(),
                    reason,
                })?
                .timezone(),
            None => DEFAULT_TIMEZONE,
        };

        let log_format = match var("LOG_FORMAT").as_deref().map(str::trim) {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        let database = DatabaseConfig {
            url: var("DATABASE_URL"),
            host: var("DB_HOST").unwrap_or_else(|| "localhost".into()),
            port: parse_var("DB_PORT", var("DB_PORT"), 5432u16)?,
            username: var("DB_USERNAME"),
            password: var("DB_PASSWORD"),
            name: var("DB_NAME"),
            max_connections: parse_var("DB_MAX_CONNECTIONS", var("DB_MAX_CONNECTIONS"), 20u32)?,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            service_name,
            app_timezone,
            log_format,
            database,
        })
    }

    pub fn clock(&self) -> AppClock {
        AppClock::new(self.app_timezone)
    }
}

fn parse_var<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|e| ConfigError::Invalid {
                var,
                reason: e.to_string(),
                value,
            })
        }
    }
}
