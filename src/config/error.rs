//! Errors raised while loading `command-center.toml`

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("Could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// TOML syntax error or a value of the wrong type
    #[error("Malformed config {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Unknown log format '{0}' (expected 'pretty' or 'json')")]
    UnknownLogFormat(String),

    /// Parsed, but a value is out of range or inconsistent with the seed data
    #[error("Invalid value for '{field}': {message}")]
    Validation { field: String, message: String },
}
