//! Store Module
//!
//! An explicitly constructed database handle, PostgreSQL or SQLite, passed to
//! every repository. Queries are written once against [`Statement`] and
//! executed against whichever pool is live.
//!
//! # Module Structure
//!
//! ```text
//! db/
//! ├── mod.rs        - Database handle, connect, migrate, execute
//! ├── dialect.rs    - Placeholder / operator differences
//! └── statement.rs  - Dialect-aware SQL builder
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use clinic_backend::backend::db::{Database, DatabaseSettings};
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let db = Database::connect(&DatabaseSettings::sqlite_memory()).await?;
//! db.migrate().await?;
//! db.ping().await?;
//! # Ok(())
//! # }
//! ```

pub mod dialect;
pub mod statement;

use sqlx::{
    postgres::{PgPoolOptions, PgRow},
    sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow},
    FromRow, PgPool, SqlitePool,
};
use std::str::FromStr;
use std::time::Duration;

pub use dialect::Dialect;
pub use statement::{Arg, Conditions, Statement};

/// Connection parameters for [`Database::connect`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub dialect: Dialect,
    /// Full connection URL (`postgres://...` or `sqlite://...`)
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseSettings {
    /// Private in-memory SQLite database, one connection so every query
    /// sees the same data
    pub fn sqlite_memory() -> Self {
        Self {
            dialect: Dialect::Sqlite,
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }
}

/// Shared store handle; cloning is cheap
#[derive(Debug, Clone)]
pub enum Database {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

// Each arm binds against a differently typed query, so the loop is expanded
// per backend rather than abstracted over `sqlx::Database`.
macro_rules! bind_args {
    ($query:expr, $args:expr) => {{
        let mut query = $query;
        for arg in $args {
            query = match arg {
                Arg::Int(v) => query.bind(*v),
                Arg::Text(v) => query.bind(v.clone()),
                Arg::Timestamp(v) => query.bind(*v),
                Arg::NullableTimestamp(v) => query.bind(*v),
            };
        }
        query
    }};
}

impl Database {
    /// Open a pool for the configured dialect
    ///
    /// SQLite files (and their parent directory) are created if missing.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, sqlx::Error> {
        match settings.dialect {
            Dialect::Postgres => {
                tracing::info!("Connecting to PostgreSQL...");
                let pool = PgPoolOptions::new()
                    .max_connections(settings.max_connections)
                    .acquire_timeout(Duration::from_secs(5))
                    .connect(&settings.url)
                    .await?;
                Ok(Database::Postgres(pool))
            }
            Dialect::Sqlite => {
                tracing::info!("Opening SQLite database {}", settings.url);
                let options = SqliteConnectOptions::from_str(&settings.url)?
                    .create_if_missing(true)
                    .foreign_keys(true);

                if let Some(parent) = options.get_filename().parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }

                // In-memory databases vanish with their last connection; keep it alive.
                let pool = SqlitePoolOptions::new()
                    .max_connections(settings.max_connections)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connect_with(options)
                    .await?;
                Ok(Database::Sqlite(pool))
            }
        }
    }

    pub fn dialect(&self) -> Dialect {
        match self {
            Database::Postgres(_) => Dialect::Postgres,
            Database::Sqlite(_) => Dialect::Sqlite,
        }
    }

    /// Start an empty statement for this store's dialect
    pub fn statement(&self) -> Statement {
        Statement::new(self.dialect())
    }

    /// Apply the schema migrations for this dialect
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        tracing::info!("Running {} migrations...", self.dialect().as_str());
        match self {
            Database::Postgres(pool) => sqlx::migrate!("./migrations/postgres").run(pool).await?,
            Database::Sqlite(pool) => sqlx::migrate!("./migrations/sqlite").run(pool).await?,
        }
        tracing::info!("Database migrations completed successfully");
        Ok(())
    }

    /// Round-trip `SELECT 1`
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        match self {
            Database::Postgres(pool) => {
                sqlx::query::<sqlx::Postgres>("SELECT 1").execute(pool).await?;
            }
            Database::Sqlite(pool) => {
                sqlx::query::<sqlx::Sqlite>("SELECT 1").execute(pool).await?;
            }
        }
        Ok(())
    }

    pub async fn fetch_all<T>(&self, stmt: &Statement) -> Result<Vec<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        match self {
            Database::Postgres(pool) => {
                bind_args!(sqlx::query_as::<sqlx::Postgres, T>(stmt.sql()), stmt.args())
                    .fetch_all(pool)
                    .await
            }
            Database::Sqlite(pool) => {
                bind_args!(sqlx::query_as::<sqlx::Sqlite, T>(stmt.sql()), stmt.args())
                    .fetch_all(pool)
                    .await
            }
        }
    }

    pub async fn fetch_optional<T>(&self, stmt: &Statement) -> Result<Option<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        match self {
            Database::Postgres(pool) => {
                bind_args!(sqlx::query_as::<sqlx::Postgres, T>(stmt.sql()), stmt.args())
                    .fetch_optional(pool)
                    .await
            }
            Database::Sqlite(pool) => {
                bind_args!(sqlx::query_as::<sqlx::Sqlite, T>(stmt.sql()), stmt.args())
                    .fetch_optional(pool)
                    .await
            }
        }
    }

    pub async fn fetch_one<T>(&self, stmt: &Statement) -> Result<T, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        match self {
            Database::Postgres(pool) => {
                bind_args!(sqlx::query_as::<sqlx::Postgres, T>(stmt.sql()), stmt.args())
                    .fetch_one(pool)
                    .await
            }
            Database::Sqlite(pool) => {
                bind_args!(sqlx::query_as::<sqlx::Sqlite, T>(stmt.sql()), stmt.args())
                    .fetch_one(pool)
                    .await
            }
        }
    }

    /// Single-column string rows
    pub async fn fetch_strings(&self, stmt: &Statement) -> Result<Vec<String>, sqlx::Error> {
        match self {
            Database::Postgres(pool) => {
                bind_args!(sqlx::query_scalar::<sqlx::Postgres, String>(stmt.sql()), stmt.args())
                    .fetch_all(pool)
                    .await
            }
            Database::Sqlite(pool) => {
                bind_args!(sqlx::query_scalar::<sqlx::Sqlite, String>(stmt.sql()), stmt.args())
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Run a statement, returning the number of rows affected
    pub async fn execute(&self, stmt: &Statement) -> Result<u64, sqlx::Error> {
        let affected = match self {
            Database::Postgres(pool) => bind_args!(sqlx::query::<sqlx::Postgres>(stmt.sql()), stmt.args())
                .execute(pool)
                .await?
                .rows_affected(),
            Database::Sqlite(pool) => bind_args!(sqlx::query::<sqlx::Sqlite>(stmt.sql()), stmt.args())
                .execute(pool)
                .await?
                .rows_affected(),
        };
        Ok(affected)
    }

    /// Run an `INSERT` and return the new row's id
    ///
    /// The statement must end with [`Dialect::returning_id`].
    pub async fn insert(&self, stmt: &Statement) -> Result<i64, sqlx::Error> {
        match self {
            Database::Postgres(pool) => {
                bind_args!(sqlx::query_scalar::<sqlx::Postgres, i64>(stmt.sql()), stmt.args())
                    .fetch_one(pool)
                    .await
            }
            Database::Sqlite(pool) => {
                let result = bind_args!(sqlx::query::<sqlx::Sqlite>(stmt.sql()), stmt.args())
                    .execute(pool)
                    .await?;
                Ok(result.last_insert_rowid())
            }
        }
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        match self {
            Database::Postgres(pool) => pool.close().await,
            Database::Sqlite(pool) => pool.close().await,
        }
    }
}
