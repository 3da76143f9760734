//! Resource filtering from the `filter` query parameter
//!
//! Each `filter[field]=condition` entry becomes one predicate, and all
//! predicates are ANDed onto the resource. Bad input never fails the
//! call: non-object parameters, fields outside the allow-list, unknown
//! fields (by default) and unrecognised functions add no predicate, so a
//! malformed filter narrows less rather than erroring.
//!
//! ## Usage
//!
//! ```no_run
//! use sideseat_filter::data::{Backend, FieldType, Resource, TableSchema};
//! use sideseat_filter::domain::filters::{FieldPolicy, apply_filters};
//!
//! let schema = TableSchema::new("products").column("price", FieldType::Integer);
//! let raw = serde_json::json!({"price": "between(1000,2000)"});
//! let resource = apply_filters(
//!     Some(&raw),
//!     Resource::new(schema, Backend::Sqlite),
//!     &FieldPolicy::default(),
//! );
//! let query = resource.to_query();
//! ```

mod authorizer;
mod builder;
mod coerce;
mod docs;
mod parser;
mod request;

pub use authorizer::{FieldDecision, FieldPolicy, SkipReason};
pub use builder::build_predicate;
pub use coerce::{coerce_values, to_bool};
pub use docs::describe_filter_param;
pub use parser::{FilterOp, ParsedCondition, parse_condition, split_values};
pub use request::FilterRequest;

use serde_json::Value;

use crate::data::predicate::Predicate;
use crate::data::resource::Resource;

/// Apply a decoded `filter` parameter to a resource
pub fn apply_filters(raw: Option<&Value>, resource: Resource, policy: &FieldPolicy) -> Resource {
    match FilterRequest::from_value(raw) {
        Some(request) => apply_request(&request, resource, policy),
        None => resource,
    }
}

/// Filter with an explicit allow-list and unknown-field mode
pub fn filter<S: AsRef<str>>(
    raw: Option<&Value>,
    resource: Resource,
    filterable_fields: &[S],
    ignore_unknown_fields: bool,
) -> Resource {
    let policy = FieldPolicy::new(filterable_fields, ignore_unknown_fields);
    apply_filters(raw, resource, &policy)
}

pub fn apply_request(request: &FilterRequest, resource: Resource, policy: &FieldPolicy) -> Resource {
    if request.len() > policy.max_fields {
        tracing::warn!(
            fields = request.len(),
            max = policy.max_fields,
            "Too many filter fields, ignoring the rest"
        );
    }

    request
        .iter()
        .take(policy.max_fields)
        .fold(resource, |resource, (field, condition)| {
            match field_predicate(&resource, policy, field, condition) {
                Some(predicate) => resource.and_where(predicate),
                None => resource,
            }
        })
}

fn field_predicate(
    resource: &Resource,
    policy: &FieldPolicy,
    field: &str,
    condition: &str,
) -> Option<Predicate> {
    let field_type = match policy.authorize(field, resource.schema()) {
        FieldDecision::Accept(field_type) => field_type,
        FieldDecision::Skip(reason) => {
            tracing::debug!(field, reason = %reason, "Skipping filter field");
            return None;
        }
    };

    let column = resource.column(field);
    let Some(op) = FilterOp::from_condition(parse_condition(condition)) else {
        tracing::debug!(field, condition, "Unrecognised filter function");
        return None;
    };

    tracing::trace!(field, field_type = %field_type, op = ?op, "Adding filter predicate");
    Some(build_predicate(column, field_type, op))
}
