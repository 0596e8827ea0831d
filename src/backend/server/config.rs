/**
 * Server Configuration
 *
 * Everything the server reads from the environment, loaded once at startup
 * (after `dotenv` has merged an optional `.env` file).
 *
 * # Variables
 *
 * - `DB_TYPE` - `postgres` (default) or `sqlite`
 * - `DATABASE_URL` - full connection URL; wins over the parts below
 * - `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`, `DB_SSL_MODE`
 * - `DB_PATH` - SQLite file (default `./data/medical.db`)
 * - `DB_MAX_CONNECTIONS` - pool size (default 10)
 * - `JWT_SECRET` - token signing key
 * - `TOKEN_TTL_HOURS` - token lifetime (default 24, must be positive)
 * - `ADMIN_PASSWORD` - password for the bootstrap admin (default `123456`)
 * - `SERVER_PORT` / `PORT` - listen port (default 8080)
 *
 * # Errors
 *
 * An unknown `DB_TYPE`, a malformed number or a token lifetime that is
 * not positive or overflows the calendar is fatal.
 */

use chrono::{Duration, Utc};
use std::str::FromStr;
use thiserror::Error;

use crate::backend::db::{DatabaseSettings, Dialect};

const DEV_JWT_SECRET: &str = "clinic-dev-secret-change-me";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0}")]
    UnknownDatabase(String),

    #[error("{name} must be a number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

/// Fully resolved server settings
#[derive(Clone)]
pub struct ServerConfig {
    pub database: DatabaseSettings,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub admin_password: String,
    pub port: u16,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("dialect", &self.database.dialect)
            .field("max_connections", &self.database.max_connections)
            .field("token_ttl_hours", &self.token_ttl.num_hours())
            .field("port", &self.port)
            .finish_non_exhaustive()
    }
}

impl ServerConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variables; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        let dialect = or("DB_TYPE", "postgres")
            .parse::<Dialect>()
            .map_err(ConfigError::UnknownDatabase)?;

        let url = match (var("DATABASE_URL"), dialect) {
            (Some(url), _) => url,
            (None, Dialect::Postgres) => format!(
                "postgres://{}:{}@{}:{}/{}?sslmode={}",
                or("DB_USER", "postgres"),
                or("DB_PASSWORD", "postgres"),
                or("DB_HOST", "localhost"),
                parse_number::<u16>("DB_PORT", var("DB_PORT"), 5432)?,
                or("DB_NAME", "medical_db"),
                or("DB_SSL_MODE", "disable"),
            ),
            (None, Dialect::Sqlite) => format!("sqlite://{}", or("DB_PATH", "./data/medical.db")),
        };

        let jwt_secret = var("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET not set, using the development default");
            DEV_JWT_SECRET.to_string()
        });

        let ttl_hours = parse_number::<i64>("TOKEN_TTL_HOURS", var("TOKEN_TTL_HOURS"), 24)?;
        let token_ttl = Duration::try_hours(ttl_hours)
            .filter(|ttl| *ttl > Duration::zero() && Utc::now().checked_add_signed(*ttl).is_some())
            .ok_or_else(|| ConfigError::InvalidNumber {
                name: "TOKEN_TTL_HOURS",
                value: ttl_hours.to_string(),
            })?;
        let port_var = var("SERVER_PORT").or_else(|| var("PORT"));

        Ok(Self {
            database: DatabaseSettings {
                dialect,
                url,
                max_connections: parse_number("DB_MAX_CONNECTIONS", var("DB_MAX_CONNECTIONS"), 10)?,
            },
            jwt_secret,
            token_ttl,
            admin_password: or("ADMIN_PASSWORD", "123456"),
            port: parse_number("SERVER_PORT", port_var, 8080)?,
        })
    }
}

fn parse_number<T: FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value: v }),
    }
}
