//! SQL dialect trait for multi-database support
//!
//! This trait defines the interface for generating the database-specific
//! parts of a filtered query: parameter placeholders and identifier quoting.

use super::QuoteStyle;
use crate::data::schema::FieldType;

/// SQL dialect trait for generating database-specific SQL
///
/// Different databases have different syntax for:
/// - Parameter placeholders (? vs $1)
/// - Identifier quoting ("name" vs `name`)
pub trait SqlDialect: Send + Sync {
    /// Get the dialect name
    fn name(&self) -> &'static str;

    /// Generate a parameter placeholder for the given index (1-based)
    ///
    /// - SQLite/MySQL: Always returns "?"
    /// - PostgreSQL: Returns "$1", "$2", etc.
    fn placeholder(&self, index: usize) -> String;

    /// Placeholder for a text parameter compared against a column of
    /// `field_type`
    ///
    /// Defaults to the plain placeholder. Backends that will not compare a
    /// text parameter with a numeric or temporal column wrap it in a cast.
    fn typed_placeholder(&self, index: usize, _field_type: FieldType) -> String {
        self.placeholder(index)
    }

    /// Identifier quoting convention
    ///
    /// - SQLite/PostgreSQL: `"name"`
    /// - MySQL: `` `name` ``
    fn quote_style(&self) -> QuoteStyle;

    /// Quote a single identifier (table or column name)
    fn quote_identifier(&self, ident: &str) -> String {
        self.quote_style().quote(ident)
    }

    /// Quote a table-qualified column reference
    fn quote_qualified(&self, table: &str, column: &str) -> String {
        format!(
            "{}.{}",
            self.quote_identifier(table),
            self.quote_identifier(column)
        )
    }
}
