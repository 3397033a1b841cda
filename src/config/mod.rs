//! Configuration module for Logo-Scout
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every setting has a built-in default, so running
//! without a file behaves exactly like an empty file.
//!
//! # Example
//!
//! ```no_run
//! use logo_scout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("logo-scout.toml")).unwrap();
//! println!("Window size: {}", config.batch.window_size);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    BatchConfig, Config, FetcherConfig, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_MS,
    DEFAULT_USER_AGENT, DEFAULT_WINDOW_SIZE,
};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, parse_config};
pub use validation::validate;
