//! Error handling for the clientbind library.
//!
//! This module defines the crate-level `Error` used by loaders, configuration
//! and the CLI, along with a convenient `Result` alias. Resolution failures
//! keep their own domain type ([`ResolutionError`]) and convert into it.
//!
//! # Examples
//!
//! ```
//! use clientbind::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::config("missing client name"))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use thiserror::Error;

use crate::binding::ResolutionError;

/// Result type for clientbind operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for clientbind operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Model loading error
    #[error("Model loading error: {0}")]
    Load(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Binding resolution error
    #[error("Resolution error: {0}")]
    Resolution(#[from] ResolutionError),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new model loading error
    pub fn load<S: Into<String>>(msg: S) -> Self {
        Self::Load(msg.into())
    }
}
