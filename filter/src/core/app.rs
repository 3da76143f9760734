//! Command-line application

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use sqlx::{PgPool, SqlitePool};

use crate::core::cli::{self, Commands};
use crate::core::config::FilterConfig;
use crate::core::constants::{APP_NAME_LOWER, ENV_LOG, FILTER_PARAM};
use crate::data::{Resource, TableSchema};
use crate::domain::filters::{FilterRequest, apply_request, describe_filter_param};

pub struct CoreApp;

impl CoreApp {
    /// Run the application with CLI argument parsing
    pub async fn run() -> Result<()> {
        dotenvy::dotenv().ok();
        Self::init_logging();

        let (cli_config, command) = cli::parse();
        tracing::trace!(command = ?command, "Parsed command");

        match command {
            Commands::Docs { field } => {
                print!("{}", describe_filter_param(field.as_deref()));
                Ok(())
            }
            Commands::Explain {
                schema,
                database_url,
                table,
                conditions,
            } => {
                let config = FilterConfig::load(&cli_config)?;
                let schema = match (schema, database_url, table) {
                    (Some(path), _, _) => load_schema_file(&path)?,
                    (None, Some(url), Some(table)) => introspect_schema(&url, &table).await?,
                    _ => anyhow::bail!("Either --schema or --database-url with --table is required"),
                };
                let request = FilterRequest::from_pairs(parse_conditions(&conditions)?);

                let resource = apply_request(
                    &request,
                    Resource::new(schema, config.backend),
                    &config.policy(),
                );
                let query = resource.to_query();
                println!("{}", serde_json::to_string_pretty(&query)?);
                Ok(())
            }
        }
    }

    fn init_logging() {
        let default_filter = format!("warn,{}=info", APP_NAME_LOWER);

        let filter = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or(default_filter);

        tracing_subscriber::fmt()
            .with_target(false)
            .with_thread_ids(false)
            .with_level(true)
            .with_writer(std::io::stderr)
            .compact()
            .with_env_filter(filter)
            .init();
    }
}

fn load_schema_file(path: &Path) -> Result<TableSchema> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse schema file: {}", path.display()))
}

async fn introspect_schema(url: &str, table: &str) -> Result<TableSchema> {
    let scheme = url.split_once(':').map(|(scheme, _)| scheme).unwrap_or_default();
    match scheme {
        "postgres" | "postgresql" => {
            let pool = PgPool::connect(url)
                .await
                .context("Failed to connect to PostgreSQL")?;
            let schema = TableSchema::load_postgres(&pool, table).await;
            pool.close().await;
            Ok(schema?)
        }
        "sqlite" => {
            let pool = SqlitePool::connect(url)
                .await
                .context("Failed to open SQLite database")?;
            let schema = TableSchema::load_sqlite(&pool, table).await;
            pool.close().await;
            Ok(schema?)
        }
        _ => anyhow::bail!(
            "Unsupported database URL for introspection: {} (expected sqlite:// or postgres://; use --schema for other backends)",
            url
        ),
    }
}

/// Split `field=condition` (or `filter[field]=condition`) arguments
fn parse_conditions(args: &[String]) -> Result<Vec<(String, String)>> {
    args.iter()
        .map(|arg| {
            let (key, condition) = arg.split_once('=').with_context(|| {
                format!("Invalid condition (expected field=condition): {}", arg)
            })?;
            let field = key
                .strip_prefix(FILTER_PARAM)
                .and_then(|rest| rest.strip_prefix('['))
                .and_then(|rest| rest.strip_suffix(']'))
                .unwrap_or(key);
            Ok((field.to_string(), condition.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_plain_conditions() {
        let pairs = parse_conditions(&args(&["color=red,blue", "price=between(1000,2000)"])).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("color".to_string(), "red,blue".to_string()),
                ("price".to_string(), "between(1000,2000)".to_string())
            ]
        );
    }

    #[test]
    fn parse_bracketed_conditions() {
        let pairs = parse_conditions(&args(&["filter[name]=contains(lovely)"])).unwrap();
        assert_eq!(pairs, vec![("name".to_string(), "contains(lovely)".to_string())]);
    }

    #[test]
    fn condition_may_contain_equals() {
        let pairs = parse_conditions(&args(&["note=a=b"])).unwrap();
        assert_eq!(pairs, vec![("note".to_string(), "a=b".to_string())]);
    }

    #[test]
    fn missing_equals_is_an_error() {
        assert!(parse_conditions(&args(&["color"])).is_err());
    }

    #[test]
    fn schema_file_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"table": "products", "columns": [{"name": "price", "type": "integer"}]}"#,
        )
        .unwrap();

        let schema = load_schema_file(file.path()).unwrap();
        assert_eq!(schema.table, "products");
        assert_eq!(schema.columns.len(), 1);
    }

    #[tokio::test]
    async fn introspect_sqlite_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.db");
        let url = format!("sqlite://{}?mode=rwc", path.display());

        let pool = SqlitePool::connect(&url).await.unwrap();
        sqlx::query("CREATE TABLE products (id INTEGER PRIMARY KEY, in_stock BOOLEAN)")
            .execute(&pool)
            .await
            .unwrap();
        pool.close().await;

        let schema = introspect_schema(&url, "products").await.unwrap();
        assert_eq!(schema.columns.len(), 2);
    }

    #[tokio::test]
    async fn introspect_in_memory_sqlite_reports_missing_table() {
        let err = introspect_schema("sqlite::memory:", "products")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("products"));
    }

    #[tokio::test]
    async fn introspect_rejects_unsupported_schemes() {
        for url in ["mysql://root@localhost/shop", "shop.db", "mariadb://db/shop"] {
            let err = introspect_schema(url, "products").await.unwrap_err();
            assert!(
                err.to_string().contains("Unsupported database URL"),
                "{}: {}",
                url,
                err
            );
        }
    }
}
