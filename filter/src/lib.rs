//! Filter relational resources from a `filter[field]=condition` parameter.
//!
//! - [`domain::filters`] parses conditions and folds predicates onto a resource
//! - [`data`] holds the resource handle, predicates, dialects and schema lookup
//! - [`core`] is the command-line inspector and its configuration

pub mod core;
pub mod data;
pub mod domain;

pub use data::{Backend, FieldType, RenderedQuery, Resource, TableSchema};
pub use domain::filters::{FieldPolicy, apply_filters, describe_filter_param, filter};
