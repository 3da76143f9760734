//! Unified error type for data layer
//!
//! The filter pipeline itself never fails; these errors come from schema
//! introspection against a live database.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    /// SQLite database error
    #[error("SQLite error: {0}")]
    Sqlite(sqlx::Error),

    /// PostgreSQL database error
    #[error("PostgreSQL error: {0}")]
    Postgres(sqlx::Error),

    /// Introspection returned no columns
    #[error("Table {table} not found on {backend}")]
    TableNotFound {
        backend: &'static str,
        table: String,
    },
}

impl DataError {
    /// Create a SQLite error with preserved context
    pub fn from_sqlite(e: sqlx::Error) -> Self {
        Self::Sqlite(e)
    }

    /// Create a PostgreSQL error with preserved context
    pub fn from_postgres(e: sqlx::Error) -> Self {
        Self::Postgres(e)
    }

    pub fn table_not_found(backend: &'static str, table: &str) -> Self {
        Self::TableNotFound {
            backend,
            table: table.to_string(),
        }
    }

    /// Get the backend name that generated this error
    pub fn backend(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "sqlite",
            Self::Postgres(_) => "postgres",
            Self::TableNotFound { backend, .. } => backend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_not_found_display() {
        let err = DataError::table_not_found("sqlite", "products");
        assert_eq!(err.to_string(), "Table products not found on sqlite");
        assert_eq!(err.backend(), "sqlite");
    }

    #[test]
    fn test_backend_for_driver_errors() {
        assert_eq!(
            DataError::from_postgres(sqlx::Error::PoolClosed).backend(),
            "postgres"
        );
        assert_eq!(
            DataError::from_sqlite(sqlx::Error::RowNotFound).backend(),
            "sqlite"
        );
    }
}
