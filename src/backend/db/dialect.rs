/**
 * SQL Dialects
 *
 * PostgreSQL and SQLite differ in exactly three places for the queries this
 * crate issues: placeholder syntax, the case-insensitive match operator and
 * how the id of an inserted row is recovered. Everything else is written
 * once in portable SQL.
 */

use serde::Serialize;
use std::str::FromStr;

/// Backing store flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Postgres,
    Sqlite,
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::Postgres
    }
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::Sqlite => "sqlite",
        }
    }

    /// Placeholder for the `n`th bound argument, 1-based
    pub fn placeholder(&self, n: usize) -> String {
        match self {
            Dialect::Postgres => format!("${}", n),
            Dialect::Sqlite => "?".to_string(),
        }
    }

    /// Case-insensitive substring operator
    ///
    /// SQLite's `LIKE` is already case-insensitive for ASCII.
    pub fn like_operator(&self) -> &'static str {
        match self {
            Dialect::Postgres => "ILIKE",
            Dialect::Sqlite => "LIKE",
        }
    }

    /// Suffix appended to an `INSERT` so the new id comes back as a row
    pub fn returning_id(&self) -> &'static str {
        match self {
            Dialect::Postgres => " RETURNING id",
            Dialect::Sqlite => "",
        }
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Dialect::Postgres),
            "sqlite" | "sqlite3" => Ok(Dialect::Sqlite),
            other => Err(format!("unsupported database type '{}'", other)),
        }
    }
}
