//! Application constants

/// Application name (lowercase, used in log filters)
pub const APP_NAME_LOWER: &str = "sideseat_filter";

/// Name of the query parameter holding per-field conditions
pub const FILTER_PARAM: &str = "filter";

/// Local config file name
pub const CONFIG_FILE_NAME: &str = "sideseat-filter.json";

// =============================================================================
// Environment variables
// =============================================================================

/// Log filter (falls back to RUST_LOG)
pub const ENV_LOG: &str = "SIDESEAT_FILTER_LOG";

/// Path to config file
pub const ENV_CONFIG: &str = "SIDESEAT_FILTER_CONFIG";

/// Database backend used for identifier quoting and placeholders
pub const ENV_BACKEND: &str = "SIDESEAT_FILTER_BACKEND";

pub const ENV_IGNORE_UNKNOWN: &str = "SIDESEAT_FILTER_IGNORE_UNKNOWN";

pub const ENV_MAX_FIELDS: &str = "SIDESEAT_FILTER_MAX_FIELDS";

// =============================================================================
// Defaults
// =============================================================================

/// Maximum number of filter fields processed per request
pub const DEFAULT_MAX_FILTER_FIELDS: usize = 50;
