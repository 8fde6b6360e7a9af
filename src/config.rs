//! Resolver configuration.
//!
//! Every policy knob the resolver consults lives on [`ResolverConfig`] and is
//! passed in explicitly. Values can be read from a TOML file; unspecified keys
//! keep their defaults.
//!
//! ```toml
//! filter_by_client_name = false
//! internal_constructors = true
//! generic_exception = "TransportException"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

pub const DEFAULT_GENERIC_EXCEPTION: &str = "HttpOperationException";
pub const DEFAULT_UNIT_MARKER: &str = "Ok";

/// Options consulted during binding resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Only expose operations tagged with the target client name
    pub filter_by_client_name: bool,
    /// Generate client constructors with internal visibility
    pub internal_constructors: bool,
    /// Exception identifier used when the default response has no composite body
    pub generic_exception: String,
    /// Success marker for operations without a response payload
    pub unit_marker: String,
    /// Append a custom-headers declaration to method signatures
    pub add_custom_headers: bool,
    /// Append a cancellation-token declaration to method signatures
    pub add_cancellation_token: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            filter_by_client_name: true,
            internal_constructors: false,
            generic_exception: DEFAULT_GENERIC_EXCEPTION.to_string(),
            unit_marker: DEFAULT_UNIT_MARKER.to_string(),
            add_custom_headers: false,
            add_cancellation_token: false,
        }
    }
}

impl ResolverConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read a configuration file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        tracing::debug!(path = %path.display(), "Loaded resolver configuration");
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_resolver_config_default() {
        let config = ResolverConfig::default();
        assert!(config.filter_by_client_name);
        assert!(!config.internal_constructors);
        assert_eq!(config.generic_exception, "HttpOperationException");
        assert_eq!(config.unit_marker, "Ok");
        assert!(!config.add_custom_headers);
        assert!(!config.add_cancellation_token);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ResolverConfig::from_toml_str(
            r#"
filter_by_client_name = false
generic_exception = "TransportException"
"#,
        )
        .unwrap();

        assert!(!config.filter_by_client_name);
        assert_eq!(config.generic_exception, "TransportException");
        assert_eq!(config.unit_marker, "Ok");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(ResolverConfig::from_toml_str("filter_by_client_name = \"yes\"").is_err());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(b"internal_constructors = true\nadd_cancellation_token = true\n")
            .expect("Failed to write temp file");
        file.flush().expect("Failed to flush temp file");

        let config = ResolverConfig::load(file.path()).await.unwrap();
        assert!(config.internal_constructors);
        assert!(config.add_cancellation_token);
        assert!(config.filter_by_client_name);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = ResolverConfig::load("/nonexistent/clientbind.toml").await;
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }
}
