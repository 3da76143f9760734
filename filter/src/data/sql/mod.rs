//! SQL abstraction layer for multi-database support
//!
//! This module provides the dialect-specific pieces used when rendering a
//! filtered resource: placeholders, identifier quoting and parameter
//! collection. The dialect is selected once per resource from its
//! [`Backend`], never per field.

mod dialect;
mod mysql_dialect;
mod postgres_dialect;
mod sqlite_dialect;

pub use dialect::SqlDialect;
pub use mysql_dialect::MysqlDialect;
pub use postgres_dialect::PostgresDialect;
pub use sqlite_dialect::SqliteDialect;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::predicate::FilterValue;

/// Database backend identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Sqlite,
    Postgres,
    Mysql,
}

impl Backend {
    /// Get the SQL dialect for this backend
    pub fn dialect(&self) -> &'static dyn SqlDialect {
        match self {
            Backend::Sqlite => &SqliteDialect,
            Backend::Postgres => &PostgresDialect,
            Backend::Mysql => &MysqlDialect,
        }
    }

    /// Get the backend name
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Sqlite => "sqlite",
            Backend::Postgres => "postgres",
            Backend::Mysql => "mysql",
        }
    }

    /// Resolve the backend from a configured name.
    ///
    /// Missing or unrecognised names fall back to the default backend.
    pub fn resolve(name: Option<&str>) -> Self {
        match name.map(str::parse::<Backend>) {
            None => Backend::default(),
            Some(Ok(backend)) => backend,
            Some(Err(e)) => {
                let fallback = Backend::default();
                tracing::warn!(error = %e, fallback = %fallback, "Falling back to default backend");
                fallback
            }
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" | "sqlite3" => Ok(Backend::Sqlite),
            "postgres" | "postgresql" | "pg" => Ok(Backend::Postgres),
            "mysql" | "mysql2" | "mariadb" => Ok(Backend::Mysql),
            other => Err(format!("unknown database backend: {}", other)),
        }
    }
}

/// Identifier quoting convention of a dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    /// `"table"."column"`
    DoubleQuote,
    /// `` `table`.`column` ``
    Backtick,
}

impl QuoteStyle {
    pub fn quote_char(self) -> char {
        match self {
            QuoteStyle::DoubleQuote => '"',
            QuoteStyle::Backtick => '`',
        }
    }

    /// Wrap an identifier in quote characters.
    ///
    /// Embedded quote characters are doubled so the identifier can never
    /// close its own quoting.
    pub fn quote(self, ident: &str) -> String {
        let q = self.quote_char();
        let mut out = String::with_capacity(ident.len() + 2);
        out.push(q);
        for c in ident.chars() {
            if c == q {
                out.push(q);
            }
            out.push(c);
        }
        out.push(q);
        out
    }
}

/// An escaped, table-qualified column reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotedIdentifier(String);

impl QuotedIdentifier {
    pub fn column(dialect: &dyn SqlDialect, table: &str, column: &str) -> Self {
        Self(dialect.quote_qualified(table, column))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuotedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Collects SQL parameters during query building (maintains insertion order)
pub struct SqlParams {
    dialect: &'static dyn SqlDialect,
    pub values: Vec<FilterValue>,
}

impl SqlParams {
    pub fn new(dialect: &'static dyn SqlDialect) -> Self {
        Self {
            dialect,
            values: Vec::new(),
        }
    }

    /// Record a bound value and return its placeholder
    pub fn push(&mut self, value: FilterValue) -> String {
        let cast_type = value.cast_type();
        self.values.push(value);
        let index = self.values.len();
        match cast_type {
            Some(field_type) => self.dialect.typed_placeholder(index, field_type),
            None => self.dialect.placeholder(index),
        }
    }
}
