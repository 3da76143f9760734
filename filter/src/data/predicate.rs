//! Predicate fragments understood by the query layer
//!
//! A predicate is built once per filtered field and never mutated after it
//! is attached to a [`Resource`](crate::data::Resource). Values are always
//! bound as parameters; only quoted identifiers end up in the SQL text.

use std::fmt;

use serde::{Serialize, Serializer};

use super::schema::FieldType;
use super::sql::{QuotedIdentifier, SqlParams};

/// A bound parameter value
///
/// `Typed` holds text aimed at a numeric or temporal column. It is bound as
/// text like `Text`, but dialects without implicit text conversion render
/// its placeholder with a cast to the column type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Typed(String, FieldType),
    Bool(bool),
}

impl FilterValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Text bound for a column of `field_type`
    ///
    /// Only integer, float, date and datetime columns need a typed value;
    /// every other type stays plain text.
    pub fn for_field(field_type: FieldType, value: impl Into<String>) -> Self {
        match field_type {
            FieldType::Integer | FieldType::Float | FieldType::Date | FieldType::DateTime => {
                Self::Typed(value.into(), field_type)
            }
            _ => Self::Text(value.into()),
        }
    }

    /// Column type the placeholder must be cast to, if any
    pub fn cast_type(&self) -> Option<FieldType> {
        match self {
            Self::Typed(_, field_type) => Some(*field_type),
            _ => None,
        }
    }
}

impl Serialize for FilterValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) | Self::Typed(s, _) => serializer.serialize_str(s),
            Self::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Text(s) | FilterValue::Typed(s, _) => f.write_str(s),
            FilterValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Ordering comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Gt,
    Lt,
    Gte,
    Lte,
}

impl Comparison {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Comparison::Gt => ">",
            Comparison::Lt => "<",
            Comparison::Gte => ">=",
            Comparison::Lte => "<=",
        }
    }
}

/// A single filter condition on one column
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Column equals one of the values
    In {
        column: QuotedIdentifier,
        values: Vec<FilterValue>,
    },
    /// Column equals none of the values
    NotIn {
        column: QuotedIdentifier,
        values: Vec<FilterValue>,
    },
    Compare {
        column: QuotedIdentifier,
        op: Comparison,
        value: FilterValue,
    },
    /// Inclusive range
    Between {
        column: QuotedIdentifier,
        low: FilterValue,
        high: FilterValue,
    },
    /// Case-insensitive LIKE, pattern used as given
    Like {
        column: QuotedIdentifier,
        pattern: FilterValue,
    },
    IsNull { column: QuotedIdentifier },
    /// NULL or empty string
    Blank { column: QuotedIdentifier },
}

impl Predicate {
    pub fn column(&self) -> &QuotedIdentifier {
        match self {
            Self::In { column, .. }
            | Self::NotIn { column, .. }
            | Self::Compare { column, .. }
            | Self::Between { column, .. }
            | Self::Like { column, .. }
            | Self::IsNull { column }
            | Self::Blank { column } => column,
        }
    }

    /// Generate SQL WHERE clause fragment
    /// Returns the SQL clause with dialect placeholders and updates params
    pub fn to_sql(&self, params: &mut SqlParams) -> String {
        match self {
            Self::In { column, values } => match values.as_slice() {
                [] => "1=0".to_string(),
                [value] => format!("{} = {}", column, params.push(value.clone())),
                _ => format!("{} IN ({})", column, placeholders(values, params)),
            },
            Self::NotIn { column, values } => match values.as_slice() {
                [] => "1=1".to_string(),
                [value] => format!("{} <> {}", column, params.push(value.clone())),
                _ => format!("{} NOT IN ({})", column, placeholders(values, params)),
            },
            Self::Compare { column, op, value } => {
                format!("{} {} {}", column, op.as_sql(), params.push(value.clone()))
            }
            Self::Between { column, low, high } => {
                let low = params.push(low.clone());
                let high = params.push(high.clone());
                format!("{} BETWEEN {} AND {}", column, low, high)
            }
            Self::Like { column, pattern } => {
                format!(
                    "LOWER({}) LIKE LOWER({})",
                    column,
                    params.push(pattern.clone())
                )
            }
            Self::IsNull { column } => format!("{} IS NULL", column),
            Self::Blank { column } => format!("({} IS NULL OR {} = '')", column, column),
        }
    }
}

fn placeholders(values: &[FilterValue], params: &mut SqlParams) -> String {
    values
        .iter()
        .map(|v| params.push(v.clone()))
        .collect::<Vec<_>>()
        .join(", ")
}
