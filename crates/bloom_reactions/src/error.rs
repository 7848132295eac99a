//! Configuration error types

use std::path::PathBuf;

use bloom_core::ColorParseError;
use thiserror::Error;

/// Errors raised while loading or validating a [`BloomConfig`](crate::BloomConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the config schema
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be written back out as TOML
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A palette entry has an invalid color literal
    #[error("Invalid color in palette entry {index}: {source}")]
    Color {
        index: usize,
        #[source]
        source: ColorParseError,
    },

    /// The palette has no entries
    #[error("Palette must contain at least one theme")]
    EmptyPalette,

    /// Icon size is zero, negative or not finite
    #[error("Icon size must be positive, got {0}")]
    InvalidIconSize(f32),

    /// A duration or interval is out of range
    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f32,
        reason: &'static str,
    },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
