use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::data::sql::Backend;
use crate::domain::filters::FieldPolicy;

use super::cli::CliConfig;
use super::constants::{CONFIG_FILE_NAME, DEFAULT_MAX_FILTER_FIELDS};

/// File-based configuration (JSON)
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    /// Backend name; unrecognised names fall back to sqlite
    pub backend: Option<String>,
    pub ignore_unknown_fields: Option<bool>,
    pub filterable_fields: Option<Vec<String>>,
    pub max_fields: Option<usize>,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

impl FileConfig {
    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading config file");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::trace!(config = ?config, "Parsed config file");
        Ok(config)
    }

    /// Warn about unknown fields in the config
    fn warn_unknown_fields(&self) {
        if let serde_json::Value::Object(map) = &self.extra
            && !map.is_empty()
        {
            let keys_str: String = map
                .keys()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            tracing::warn!(
                fields = %keys_str,
                "Unknown fields in config file (possible typos)"
            );
        }
    }
}

/// Resolved filter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub backend: Backend,
    pub ignore_unknown_fields: bool,
    pub filterable_fields: Vec<String>,
    pub max_fields: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            ignore_unknown_fields: true,
            filterable_fields: Vec::new(),
            max_fields: DEFAULT_MAX_FILTER_FIELDS,
        }
    }
}

impl FilterConfig {
    /// Load configuration from all sources
    ///
    /// Priority (lowest to highest):
    /// 1. Defaults
    /// 2. Local directory config OR CLI-specified config path
    /// 3. CLI arguments (which include env var fallbacks via clap)
    pub fn load(cli: &CliConfig) -> Result<Self> {
        tracing::debug!("Loading filter configuration");

        let config_path = if let Some(ref path) = cli.config {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            Some(path.clone())
        } else {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            if local.exists() { Some(local) } else { None }
        };

        let file_config = match config_path {
            Some(path) => {
                let file_config = FileConfig::load_from_file(&path)?;
                file_config.warn_unknown_fields();
                file_config
            }
            None => FileConfig::default(),
        };

        let config = Self::resolve(file_config, cli);
        config.validate()?;
        tracing::debug!(
            backend = %config.backend,
            ignore_unknown_fields = config.ignore_unknown_fields,
            max_fields = config.max_fields,
            "Filter configuration loaded"
        );
        Ok(config)
    }

    fn resolve(file: FileConfig, cli: &CliConfig) -> Self {
        let defaults = Self::default();
        let backend_name = cli.backend.as_deref().or(file.backend.as_deref());
        let filterable_fields = if cli.filterable_fields.is_empty() {
            file.filterable_fields.unwrap_or(defaults.filterable_fields)
        } else {
            cli.filterable_fields.clone()
        };

        Self {
            backend: Backend::resolve(backend_name),
            ignore_unknown_fields: cli
                .ignore_unknown_fields
                .or(file.ignore_unknown_fields)
                .unwrap_or(defaults.ignore_unknown_fields),
            filterable_fields,
            max_fields: cli
                .max_fields
                .or(file.max_fields)
                .unwrap_or(defaults.max_fields),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.max_fields == 0 {
            anyhow::bail!("max_fields must be at least 1");
        }
        Ok(())
    }

    /// Field policy for filter calls made with this configuration
    pub fn policy(&self) -> FieldPolicy {
        FieldPolicy {
            filterable_fields: self.filterable_fields.clone(),
            ignore_unknown_fields: self.ignore_unknown_fields,
            max_fields: self.max_fields,
        }
    }
}
