//! Built-in default values.

// ============================================================================
// Server
// ============================================================================

/// HTTP bind address (the dashboard is a local tool).
pub const SERVER_ADDR: &str = "127.0.0.1:8050";

// ============================================================================
// Dataset
// ============================================================================

/// Dataset file, relative to the working directory.
pub const DATA_PATH: &str = "predictive_maintenance.csv";

// ============================================================================
// Controls
// ============================================================================

/// Product type selected when the page first loads.
pub const DEFAULT_PRODUCT_TYPE: &str = "M";

/// Failure type selected when the page first loads.
pub const DEFAULT_FAILURE_TYPE: &str = "No Failure";

// ============================================================================
// Environment
// ============================================================================

/// Path to a TOML config file.
pub const ENV_CONFIG: &str = "WEARWATCH_CONFIG";

/// Bind address override (used when `--addr` is not given).
pub const ENV_SERVER_ADDR: &str = "WEARWATCH_SERVER_ADDR";

/// Comma-separated list of extra CORS origins.
pub const ENV_CORS_ORIGINS: &str = "WEARWATCH_CORS_ORIGINS";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "wearwatch.toml";
