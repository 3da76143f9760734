//! Per-field filter authorization

use std::fmt;

use crate::core::constants::DEFAULT_MAX_FILTER_FIELDS;
use crate::data::schema::{FieldType, SchemaLookup};

/// Which fields may be filtered and how unknown fields are treated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPolicy {
    /// Allow-list of field names; empty allows every field
    pub filterable_fields: Vec<String>,
    /// Skip fields missing from the schema instead of filtering them as `Unknown`
    pub ignore_unknown_fields: bool,
    /// Fields beyond this count are not processed
    pub max_fields: usize,
}

impl Default for FieldPolicy {
    fn default() -> Self {
        Self {
            filterable_fields: Vec::new(),
            ignore_unknown_fields: true,
            max_fields: DEFAULT_MAX_FILTER_FIELDS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotFilterable,
    UnknownField,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotFilterable => write!(f, "not filterable"),
            SkipReason::UnknownField => write!(f, "unknown field"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDecision {
    Accept(FieldType),
    Skip(SkipReason),
}

impl FieldPolicy {
    pub fn new<S: AsRef<str>>(filterable_fields: &[S], ignore_unknown_fields: bool) -> Self {
        Self {
            filterable_fields: filterable_fields
                .iter()
                .map(|f| f.as_ref().to_string())
                .collect(),
            ignore_unknown_fields,
            ..Self::default()
        }
    }

    pub fn is_filterable(&self, field: &str) -> bool {
        self.filterable_fields.is_empty() || self.filterable_fields.iter().any(|f| f == field)
    }

    pub fn authorize(&self, field: &str, schema: &dyn SchemaLookup) -> FieldDecision {
        if !self.is_filterable(field) {
            return FieldDecision::Skip(SkipReason::NotFilterable);
        }

        match schema.field_type(field) {
            Some(field_type) => FieldDecision::Accept(field_type),
            None if self.ignore_unknown_fields => FieldDecision::Skip(SkipReason::UnknownField),
            None => FieldDecision::Accept(FieldType::Unknown),
        }
    }
}
