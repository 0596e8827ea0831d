/**
 * Statement Builder
 *
 * Accumulates SQL text and owned arguments, emitting the right placeholder
 * for the target dialect as each argument is pushed. Repositories build one
 * `Statement` per query and hand it to [`Database`](super::Database), which
 * binds the arguments against the concrete pool.
 *
 * Only values go through `push_bind`. Identifiers such as sort columns are
 * pushed as SQL and must come from a closed allow-list.
 */

use chrono::{DateTime, Utc};

use crate::backend::db::Dialect;

/// A bound argument
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Int(i64),
    Text(String),
    Timestamp(DateTime<Utc>),
    NullableTimestamp(Option<DateTime<Utc>>),
}

impl From<i64> for Arg {
    fn from(v: i64) -> Self {
        Arg::Int(v)
    }
}

impl From<String> for Arg {
    fn from(v: String) -> Self {
        Arg::Text(v)
    }
}

impl From<&str> for Arg {
    fn from(v: &str) -> Self {
        Arg::Text(v.to_string())
    }
}

impl From<&String> for Arg {
    fn from(v: &String) -> Self {
        Arg::Text(v.clone())
    }
}

impl From<DateTime<Utc>> for Arg {
    fn from(v: DateTime<Utc>) -> Self {
        Arg::Timestamp(v)
    }
}

impl From<Option<DateTime<Utc>>> for Arg {
    fn from(v: Option<DateTime<Utc>>) -> Self {
        Arg::NullableTimestamp(v)
    }
}

/// SQL text plus its arguments, in placeholder order
#[derive(Debug, Clone)]
pub struct Statement {
    dialect: Dialect,
    sql: String,
    args: Vec<Arg>,
}

impl Statement {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            sql: String::new(),
            args: Vec::new(),
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Append raw SQL
    pub fn push(&mut self, sql: &str) -> &mut Self {
        self.sql.push_str(sql);
        self
    }

    /// Append a placeholder and record its value
    pub fn push_bind(&mut self, arg: impl Into<Arg>) -> &mut Self {
        self.args.push(arg.into());
        let placeholder = self.dialect.placeholder(self.args.len());
        self.sql.push_str(&placeholder);
        self
    }

    /// Append `<a>, <b>, ...` for each value
    pub fn push_bind_list<A: Into<Arg>>(&mut self, values: impl IntoIterator<Item = A>) -> &mut Self {
        for (i, value) in values.into_iter().enumerate() {
            if i > 0 {
                self.sql.push_str(", ");
            }
            self.push_bind(value);
        }
        self
    }

    /// Append `column <op> <placeholder> ESCAPE '\'` matching `%needle%`
    /// case-insensitively; `%`, `_` and `\` in the needle match literally
    pub fn push_contains(&mut self, column: &str, needle: &str) -> &mut Self {
        self.sql.push_str(column);
        self.sql.push(' ');
        self.sql.push_str(self.dialect.like_operator());
        self.sql.push(' ');
        self.push_bind(format!("%{}%", escape_like(needle)))
            .push(" ESCAPE '\\'")
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }
}

/// Incrementally builds a `WHERE a AND b ...` clause
///
/// The first condition is prefixed with `WHERE`, later ones with `AND`.
#[derive(Debug, Default)]
pub struct Conditions {
    any: bool,
}

impl Conditions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the next condition
    pub fn next<'s>(&mut self, stmt: &'s mut Statement) -> &'s mut Statement {
        stmt.push(if self.any { " AND " } else { " WHERE " });
        self.any = true;
        stmt
    }
}

fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
