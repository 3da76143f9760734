//! Predicate builder
//!
//! Maps a resolved [`FilterOp`] onto a [`Predicate`] for one quoted column.

use crate::data::predicate::{FilterValue, Predicate};
use crate::data::schema::FieldType;
use crate::data::sql::QuotedIdentifier;

use super::coerce::coerce_values;
use super::parser::FilterOp;

pub fn build_predicate(column: QuotedIdentifier, field_type: FieldType, op: FilterOp) -> Predicate {
    match op {
        FilterOp::In(values) => Predicate::In {
            column,
            values: coerce_values(field_type, values),
        },
        FilterOp::Not(values) => Predicate::NotIn {
            column,
            values: coerce_values(field_type, values),
        },
        FilterOp::Compare(op, value) => Predicate::Compare {
            column,
            op,
            value: FilterValue::for_field(field_type, value),
        },
        FilterOp::Between { low, high } => Predicate::Between {
            column,
            low: FilterValue::for_field(field_type, low),
            high: FilterValue::for_field(field_type, high),
        },
        FilterOp::Like(pattern) => Predicate::Like {
            column,
            pattern: FilterValue::Text(pattern),
        },
        FilterOp::Contains(needle) => Predicate::Like {
            column,
            pattern: FilterValue::Text(format!("%{}%", needle)),
        },
        FilterOp::Null => Predicate::IsNull { column },
        FilterOp::Blank => Predicate::Blank { column },
    }
}
