//! Data layer
//!
//! Query-engine side of filtering: dialects and identifier quoting,
//! predicate fragments, the resource handle they fold onto, and schema
//! lookup.

pub mod error;
pub mod predicate;
pub mod resource;
pub mod schema;
pub mod sql;

pub use error::DataError;
pub use predicate::{Comparison, FilterValue, Predicate};
pub use resource::{RenderedQuery, Resource};
pub use schema::{ColumnDef, FieldType, SchemaLookup, TableSchema};
pub use sql::{Backend, QuoteStyle, QuotedIdentifier, SqlDialect, SqlParams};
