//! PostgreSQL SQL dialect implementation

use super::{QuoteStyle, SqlDialect};
use crate::data::schema::FieldType;

/// PostgreSQL SQL dialect
pub struct PostgresDialect;

impl SqlDialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn placeholder(&self, index: usize) -> String {
        format!("${}", index)
    }

    fn typed_placeholder(&self, index: usize, field_type: FieldType) -> String {
        let cast = match field_type {
            FieldType::Integer => "bigint",
            FieldType::Float => "numeric",
            FieldType::Date => "date",
            FieldType::DateTime => "timestamptz",
            _ => return self.placeholder(index),
        };
        format!("CAST(${} AS {})", index, cast)
    }

    fn quote_style(&self) -> QuoteStyle {
        QuoteStyle::DoubleQuote
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder() {
        let dialect = PostgresDialect;
        assert_eq!(dialect.placeholder(1), "$1");
        assert_eq!(dialect.placeholder(5), "$5");
    }

    #[test]
    fn test_typed_placeholder() {
        let dialect = PostgresDialect;
        assert_eq!(dialect.typed_placeholder(1, FieldType::Integer), "CAST($1 AS bigint)");
        assert_eq!(dialect.typed_placeholder(2, FieldType::Float), "CAST($2 AS numeric)");
        assert_eq!(dialect.typed_placeholder(3, FieldType::Date), "CAST($3 AS date)");
        assert_eq!(
            dialect.typed_placeholder(4, FieldType::DateTime),
            "CAST($4 AS timestamptz)"
        );
        assert_eq!(dialect.typed_placeholder(5, FieldType::String), "$5");
    }

    #[test]
    fn test_quote_identifier() {
        let dialect = PostgresDialect;
        assert_eq!(dialect.quote_identifier("created_at"), "\"created_at\"");
        assert_eq!(dialect.quote_identifier("we\"ird"), "\"we\"\"ird\"");
    }
}
