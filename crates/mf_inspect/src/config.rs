//! Traversal configuration.
//!
//! An [`InspectConfig`] is passed explicitly to every traversal and access
//! operation; there is no process-wide state. It can be built in code or
//! deserialized with serde.
//!
//! ```
//! use mf_inspect::InspectConfig;
//!
//! let config = InspectConfig::default()
//!     .with_separator("/")
//!     .unwrap()
//!     .with_max_nodes(Some(1024));
//!
//! assert_eq!(config.separator(), "/");
//! assert_eq!(config.max_nodes(), Some(1024));
//! ```

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

use serde::{Deserialize, Serialize};

// -----------------------------------------------------------------------------
// ConfigError

/// Errors raised while building an [`InspectConfig`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The path separator must contain at least one character.
    #[error("path separator must not be empty")]
    EmptySeparator,
}

// -----------------------------------------------------------------------------
// Separator

/// The non-empty string placed between path segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Separator(Cow<'static, str>);

impl Separator {
    /// The default separator, `"."`.
    pub const DOT: Self = Self(Cow::Borrowed("."));

    /// Creates a separator, rejecting the empty string.
    pub fn new(separator: impl Into<Cow<'static, str>>) -> Result<Self, ConfigError> {
        let separator = separator.into();
        if separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }
        Ok(Self(separator))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Separator {
    #[inline]
    fn default() -> Self {
        Self::DOT
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Separator {
    type Error = ConfigError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Separator> for String {
    #[inline]
    fn from(value: Separator) -> Self {
        value.0.into_owned()
    }
}

// -----------------------------------------------------------------------------
// InspectConfig

/// Options shared by path collection and path access.
///
/// - `separator`: joins and splits path segments. Defaults to `"."`.
/// - `max_nodes`: upper bound on the nodes visited by a single
///   [`terminal_fields`](crate::terminal_fields) call. `None` (the default)
///   means unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InspectConfig {
    separator: Separator,
    max_nodes: Option<usize>,
}

impl InspectConfig {
    /// The default configuration, usable in `const` and `static` items.
    pub const DEFAULT: Self = Self {
        separator: Separator::DOT,
        max_nodes: None,
    };

    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Replaces the path separator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySeparator`] for `""`.
    pub fn with_separator(
        mut self,
        separator: impl Into<Cow<'static, str>>,
    ) -> Result<Self, ConfigError> {
        self.separator = Separator::new(separator)?;
        Ok(self)
    }

    /// Bounds the number of nodes a single collection may visit.
    #[inline]
    pub const fn with_max_nodes(mut self, max_nodes: Option<usize>) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    #[inline]
    pub fn separator(&self) -> &str {
        self.separator.as_str()
    }

    #[inline]
    pub const fn max_nodes(&self) -> Option<usize> {
        self.max_nodes
    }
}

impl Default for InspectConfig {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, InspectConfig, Separator};

    #[test]
    fn default_uses_a_dot() {
        let config = InspectConfig::default();
        assert_eq!(config.separator(), ".");
        assert_eq!(config.max_nodes(), None);
        assert_eq!(config, InspectConfig::new());
    }

    #[test]
    fn empty_separator_is_rejected() {
        assert_eq!(
            InspectConfig::default().with_separator(""),
            Err(ConfigError::EmptySeparator)
        );
        assert!(Separator::new("::").is_ok());
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: InspectConfig = serde_json::from_str(r#"{ "separator": "/" }"#).unwrap();
        assert_eq!(config.separator(), "/");
        assert_eq!(config.max_nodes(), None);

        let config: InspectConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, InspectConfig::DEFAULT);
    }

    #[test]
    fn deserialization_validates() {
        assert!(serde_json::from_str::<InspectConfig>(r#"{ "separator": "" }"#).is_err());
        assert!(serde_json::from_str::<InspectConfig>(r#"{ "sep": "." }"#).is_err());
    }

    #[test]
    fn serializes_flat() {
        let config = InspectConfig::default().with_max_nodes(Some(8));
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"separator":".","max_nodes":8}"#);
    }
}
