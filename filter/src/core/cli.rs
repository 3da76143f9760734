use clap::{Parser, Subcommand};

use std::path::PathBuf;

use super::constants::{ENV_BACKEND, ENV_CONFIG, ENV_IGNORE_UNKNOWN, ENV_MAX_FIELDS};

#[derive(Parser)]
#[command(name = "sideseat-filter")]
#[command(version, about = "Inspect resource filter parameters", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, short = 'c', global = true, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// Database backend: sqlite, postgres or mysql
    #[arg(long, short = 'b', global = true, env = ENV_BACKEND)]
    pub backend: Option<String>,

    /// Skip fields missing from the schema (true) or filter them as unknown (false)
    #[arg(
        long,
        global = true,
        env = ENV_IGNORE_UNKNOWN,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub ignore_unknown_fields: Option<bool>,

    /// Maximum number of filter fields processed
    #[arg(long, global = true, env = ENV_MAX_FIELDS)]
    pub max_fields: Option<usize>,

    /// Filterable fields (comma-separated); empty allows all
    #[arg(long = "allow", global = true, value_delimiter = ',')]
    pub filterable_fields: Vec<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render the SQL a set of filter conditions produces
    Explain {
        /// JSON schema file ({"table": ..., "columns": [{"name": ..., "type": ...}]})
        #[arg(long, short = 's', conflicts_with = "database_url")]
        schema: Option<PathBuf>,

        /// Introspect the schema from a sqlite:// or postgres:// database
        #[arg(long, requires = "table")]
        database_url: Option<String>,

        /// Table to introspect
        #[arg(long, short = 't')]
        table: Option<String>,

        /// Conditions as field=condition, e.g. price=between(1000,2000)
        #[arg(required = true)]
        conditions: Vec<String>,
    },
    /// Describe the filter parameter syntax
    Docs {
        /// Limit the description to one field
        field: Option<String>,
    },
}

/// Configuration values taken from CLI arguments (and their env fallbacks)
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub config: Option<PathBuf>,
    pub backend: Option<String>,
    pub ignore_unknown_fields: Option<bool>,
    pub max_fields: Option<usize>,
    pub filterable_fields: Vec<String>,
}

impl From<&Cli> for CliConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            backend: cli.backend.clone(),
            ignore_unknown_fields: cli.ignore_unknown_fields,
            max_fields: cli.max_fields,
            filterable_fields: cli.filterable_fields.clone(),
        }
    }
}

pub fn parse() -> (CliConfig, Commands) {
    let cli = Cli::parse();
    (CliConfig::from(&cli), cli.command)
}
