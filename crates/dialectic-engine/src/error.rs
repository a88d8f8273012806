//! Error types for engine configuration

use thiserror::Error;

/// Errors that can occur while loading an [`EngineConfig`](crate::EngineConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for this shape
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Config could not be written as TOML
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Values out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
