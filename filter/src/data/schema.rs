//! Column type lookup for filterable resources
//!
//! The filter pipeline only needs to know whether a field exists and what
//! domain type it is declared with. [`TableSchema`] is an immutable
//! snapshot of that, either built in code, deserialized from JSON, or
//! introspected from a live SQLite or PostgreSQL database.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::{PgPool, SqlitePool};

use super::error::DataError;

/// Declared domain type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Boolean,
    String,
    Integer,
    Float,
    Date,
    DateTime,
    Unknown,
}

impl FieldType {
    /// Map a declared SQL column type to a domain type.
    ///
    /// Follows SQLite's substring affinity rules, which also cover the
    /// `data_type` names reported by PostgreSQL.
    pub fn from_sql_type(declared: &str) -> Self {
        let upper = declared.to_ascii_uppercase();
        if upper.contains("BOOL") {
            FieldType::Boolean
        } else if upper.contains("TIMESTAMP") || upper.contains("DATETIME") {
            FieldType::DateTime
        } else if upper.contains("DATE") {
            FieldType::Date
        } else if upper.contains("INT") {
            FieldType::Integer
        } else if upper.contains("CHAR") || upper.contains("CLOB") || upper.contains("TEXT") {
            FieldType::String
        } else if upper.contains("REAL")
            || upper.contains("FLOA")
            || upper.contains("DOUB")
            || upper.contains("NUMERIC")
            || upper.contains("DECIMAL")
        {
            FieldType::Float
        } else {
            FieldType::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Boolean => "boolean",
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::Date => "date",
            FieldType::DateTime => "date_time",
            FieldType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field type lookup service
pub trait SchemaLookup {
    /// Declared type of `field`, or `None` if the resource has no such field
    fn field_type(&self, field: &str) -> Option<FieldType>;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ColumnDef {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

/// Column snapshot of one table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TableSchema {
    pub table: String,
    #[serde(default)]
    pub columns: Vec<ColumnDef>,
}

impl TableSchema {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
        }
    }

    /// Add a column (builder style)
    #[must_use]
    pub fn column(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.columns.push(ColumnDef {
            name: name.into(),
            field_type,
        });
        self
    }

    /// Introspect a SQLite table via `pragma_table_info`
    pub async fn load_sqlite(pool: &SqlitePool, table: &str) -> Result<Self, DataError> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT name, type FROM pragma_table_info(?) ORDER BY cid")
                .bind(table)
                .fetch_all(pool)
                .await
                .map_err(DataError::from_sqlite)?;

        Self::from_declared(table, rows, "sqlite")
    }

    /// Introspect a PostgreSQL table in the current schema
    pub async fn load_postgres(pool: &PgPool, table: &str) -> Result<Self, DataError> {
        let rows: Vec<(String, String)> = sqlx::query_as(
            r#"
            SELECT column_name::text, data_type::text
            FROM information_schema.columns
            WHERE table_schema = current_schema() AND table_name = $1
            ORDER BY ordinal_position
            "#,
        )
        .bind(table)
        .fetch_all(pool)
        .await
        .map_err(DataError::from_postgres)?;

        Self::from_declared(table, rows, "postgres")
    }

    fn from_declared(
        table: &str,
        rows: Vec<(String, String)>,
        backend: &'static str,
    ) -> Result<Self, DataError> {
        if rows.is_empty() {
            return Err(DataError::table_not_found(backend, table));
        }

        let columns: Vec<ColumnDef> = rows
            .into_iter()
            .map(|(name, declared)| ColumnDef {
                field_type: FieldType::from_sql_type(&declared),
                name,
            })
            .collect();

        tracing::debug!(
            backend,
            table,
            columns = columns.len(),
            "Loaded table schema"
        );
        Ok(Self {
            table: table.to_string(),
            columns,
        })
    }
}

impl SchemaLookup for TableSchema {
    fn field_type(&self, field: &str) -> Option<FieldType> {
        self.columns
            .iter()
            .find(|c| c.name == field)
            .map(|c| c.field_type)
    }
}
