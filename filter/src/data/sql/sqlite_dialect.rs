//! SQLite SQL dialect implementation

use super::{QuoteStyle, SqlDialect};

/// SQLite SQL dialect
pub struct SqliteDialect;

impl SqlDialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn placeholder(&self, _index: usize) -> String {
        "?".to_string()
    }

    fn quote_style(&self) -> QuoteStyle {
        QuoteStyle::DoubleQuote
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::schema::FieldType;

    #[test]
    fn test_placeholder() {
        let dialect = SqliteDialect;
        assert_eq!(dialect.placeholder(1), "?");
        assert_eq!(dialect.placeholder(5), "?");
        assert_eq!(dialect.typed_placeholder(2, FieldType::Integer), "?");
    }

    #[test]
    fn test_quote_qualified() {
        let dialect = SqliteDialect;
        assert_eq!(
            dialect.quote_qualified("products", "price"),
            "\"products\".\"price\""
        );
    }
}
