//! Alias parsing configuration
//!
//! [`AliasConfig`] controls how the `alias` metadata entry of an artifact is
//! split and how version-less entries are completed.

use serde::{Deserialize, Serialize};

/// Version appended to alias entries that do not name one
pub const DEFAULT_ALIAS_VERSION: &str = "0.0.0";

/// Separator between alias entries
pub const DEFAULT_ALIAS_SEPARATOR: char = ',';

/// Alias parsing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AliasConfig {
    /// Version used for entries with at most one `:`
    pub default_version: String,
    /// Separator between entries
    pub separator: char,
}

impl AliasConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With default version
    #[inline]
    #[must_use]
    pub fn with_default_version(mut self, version: impl Into<String>) -> Self {
        self.default_version = version.into();
        self
    }

    /// With separator
    #[inline]
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Load from a TOML document and validate it
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Errors
    /// Returns error if the document does not parse or the values are invalid
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values can produce well-formed identifiers
    ///
    /// # Errors
    /// Returns error if the default version is blank, contains `:` or contains
    /// the separator, or if the separator is `:` or whitespace
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.separator == ':' || self.separator.is_whitespace() {
            return Err(ConfigError::InvalidSeparator(self.separator));
        }
        let version = self.default_version.trim();
        if version.is_empty() || version.contains(':') || version.contains(self.separator) {
            return Err(ConfigError::InvalidDefaultVersion(self.default_version.clone()));
        }
        Ok(())
    }
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self {
            default_version: DEFAULT_ALIAS_VERSION.to_string(),
            separator: DEFAULT_ALIAS_SEPARATOR,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML document did not parse
    #[error("invalid alias configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Default version unusable in an identifier
    #[error("invalid default alias version '{0}'")]
    InvalidDefaultVersion(String),

    /// Separator collides with identifier syntax
    #[error("invalid alias separator '{0}'")]
    InvalidSeparator(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AliasConfig::new();
        assert_eq!(config.default_version, "0.0.0");
        assert_eq!(config.separator, ',');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder() {
        let config = AliasConfig::new().with_default_version("1.0").with_separator(';');
        assert_eq!(config.default_version, "1.0");
        assert_eq!(config.separator, ';');
    }

    #[test]
    fn from_toml_partial() {
        let config = AliasConfig::from_toml_str("default_version = \"9.9\"").unwrap();
        assert_eq!(config.default_version, "9.9");
        assert_eq!(config.separator, ',');
    }

    #[test]
    fn from_toml_empty_is_default() {
        assert_eq!(AliasConfig::from_toml_str("").unwrap(), AliasConfig::default());
    }

    #[test]
    fn from_toml_rejects_garbage() {
        assert!(matches!(
            AliasConfig::from_toml_str("default_version = ["),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let colon = AliasConfig::new().with_default_version("1:0");
        assert!(matches!(colon.validate(), Err(ConfigError::InvalidDefaultVersion(_))));

        let blank = AliasConfig::new().with_default_version("  ");
        assert!(blank.validate().is_err());

        let sep = AliasConfig::new().with_separator(':');
        assert!(matches!(sep.validate(), Err(ConfigError::InvalidSeparator(':'))));
    }
}
