//! # Configuration Modules
//!
//! This module aggregates the configuration providers used by the lab
//! binaries. All settings come from environment variables.

/// Provides per-lab environment-variable configuration structs.
pub mod config_env;
