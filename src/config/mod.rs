//! Configuration loading and types for betterdetex.
//!
//! This module handles all aspects of configuration:
//! - Type definitions for config structures (`types`)
//! - Layered loading from defaults, file, environment and overrides (`load`)

mod load;
mod types;

pub use types::{DEFAULT_THRESHOLD, DetexConfig};

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = "betterdetex.yaml";

/// Prefix for environment overrides (`BETTERDETEX_THRESHOLD`).
pub const ENV_PREFIX: &str = "BETTERDETEX";

// =============================================================================
// Errors
// =============================================================================

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to encode config file path as a unicode string: {0}")]
    EncodePath(std::path::PathBuf),

    #[error("failed to deserialize config: {0}")]
    Deserialize(#[from] config::ConfigError),

    #[error("failed to get current working directory: {0}")]
    CwdFailure(std::io::Error),

    #[error("{0}")]
    Validation(String),
}
