//! Dashboard Configuration Module
//!
//! Server address, dataset path and the initial control selection, loaded
//! from TOML. Every field has a built-in default so the dashboard runs with
//! no config file at all.
//!
//! ## Loading Order
//!
//! 1. `WEARWATCH_CONFIG` environment variable (path to TOML file)
//! 2. `wearwatch.toml` in the current working directory
//! 3. Built-in defaults
//!
//! CLI flags (`--addr`, `--data`) are applied on top by the binary.
//!
//! The loaded config is passed explicitly to whatever needs it; there is no
//! process-wide config global.

mod dashboard_config;
pub mod defaults;
pub mod validation;

pub use dashboard_config::*;
