use std::io::Error as IOError;
use thiserror::Error;
use toml::de::Error as TomlDeError;

/// Failure to obtain a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input is not valid toml.
    #[error("invalid toml: {0}")]
    TomlFormatError(#[from] TomlDeError),
    /// The input is valid toml but not a valid configuration.
    #[error("invalid configuration: {0}")]
    ConfigFormatError(String),
    /// The configuration file could not be read.
    #[error("cannot read configuration file: {0}")]
    IOError(#[from] IOError),
}
