//! Filterable resource handle
//!
//! A [`Resource`] is a value: adding a predicate consumes the handle and
//! returns a new one, so two filter calls starting from clones of the same
//! base resource never see each other's predicates.

use std::sync::Arc;

use serde::Serialize;
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;
use sqlx::{Postgres, Sqlite};

use super::predicate::{FilterValue, Predicate};
use super::schema::TableSchema;
use super::sql::{Backend, QuotedIdentifier, SqlDialect, SqlParams};

#[derive(Debug, Clone)]
pub struct Resource {
    backend: Backend,
    schema: Arc<TableSchema>,
    predicates: Vec<Predicate>,
}

impl Resource {
    pub fn new(schema: TableSchema, backend: Backend) -> Self {
        Self::from_shared(Arc::new(schema), backend)
    }

    /// Build a resource over a schema snapshot shared with other handles
    pub fn from_shared(schema: Arc<TableSchema>, backend: Backend) -> Self {
        Self {
            backend,
            schema,
            predicates: Vec::new(),
        }
    }

    pub fn table(&self) -> &str {
        &self.schema.table
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn dialect(&self) -> &'static dyn SqlDialect {
        self.backend.dialect()
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn is_filtered(&self) -> bool {
        !self.predicates.is_empty()
    }

    /// Escaped, table-qualified reference to `field`
    pub fn column(&self, field: &str) -> QuotedIdentifier {
        QuotedIdentifier::column(self.dialect(), self.table(), field)
    }

    /// Return a new handle with `predicate` ANDed onto this one
    #[must_use]
    pub fn and_where(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Render the conjunction of all predicates, if any
    pub fn where_clause(&self, params: &mut SqlParams) -> Option<String> {
        if self.predicates.is_empty() {
            return None;
        }
        let parts: Vec<String> = self.predicates.iter().map(|p| p.to_sql(params)).collect();
        Some(parts.join(" AND "))
    }

    /// Render a full SELECT over the resource
    pub fn to_query(&self) -> RenderedQuery {
        let mut params = SqlParams::new(self.dialect());
        let mut sql = format!(
            "SELECT * FROM {}",
            self.dialect().quote_identifier(self.table())
        );
        if let Some(clause) = self.where_clause(&mut params) {
            sql.push_str(" WHERE ");
            sql.push_str(&clause);
        }
        RenderedQuery {
            sql,
            params: params.values,
        }
    }
}

/// SQL text plus its bound parameters, in placeholder order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedQuery {
    pub sql: String,
    pub params: Vec<FilterValue>,
}

impl RenderedQuery {
    /// Bind parameters onto a SQLite query
    pub fn bind_sqlite(&self) -> Query<'_, Sqlite, SqliteArguments<'_>> {
        let mut query = sqlx::query(&self.sql);
        for value in &self.params {
            query = match value {
                FilterValue::Text(s) | FilterValue::Typed(s, _) => query.bind(s.as_str()),
                FilterValue::Bool(b) => query.bind(*b),
            };
        }
        query
    }

    /// Bind parameters onto a PostgreSQL query
    ///
    /// Typed values go over as text; their placeholders already carry the
    /// cast to the column type.
    pub fn bind_postgres(&self) -> Query<'_, Postgres, PgArguments> {
        let mut query = sqlx::query(&self.sql);
        for value in &self.params {
            query = match value {
                FilterValue::Text(s) | FilterValue::Typed(s, _) => query.bind(s.as_str()),
                FilterValue::Bool(b) => query.bind(*b),
            };
        }
        query
    }
}
