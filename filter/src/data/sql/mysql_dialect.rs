//! MySQL SQL dialect implementation

use super::{QuoteStyle, SqlDialect};

/// MySQL SQL dialect
pub struct MysqlDialect;

impl SqlDialect for MysqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn placeholder(&self, _index: usize) -> String {
        "?".to_string()
    }

    fn quote_style(&self) -> QuoteStyle {
        QuoteStyle::Backtick
    }
}
