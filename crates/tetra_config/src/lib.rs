//! Parsing and validation of `tetra.toml` configuration files.
//!
//! The logic domain itself is a build-time choice and cannot be configured
//! here. This crate covers the runtime knobs around it: how tolerant literal
//! conversion is, and how values are displayed.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, load_config_or_default, CONFIG_FILE_NAME};
pub use types::*;
