//! Renderer configuration.
//!
//! A [`RenderConfig`] is itself a [`Dialect`], so a renderer built from a
//! loaded configuration is simply `ToSqlVisitor::new(config)`.
//!
//! ```rust
//! use librarian_core::config::RenderConfig;
//! use librarian_core::dialect::QuoteStyle;
//!
//! let config = RenderConfig::from_json(r#"{ "quote_style": "backtick" }"#).unwrap();
//! assert_eq!(config.quote_style, QuoteStyle::Backtick);
//! ```

use serde::{Deserialize, Serialize};

use crate::dialect::{Dialect, QuoteStyle};
use crate::error::ConfigError;

/// Settings that parameterize rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Delimiters used for table and column identifiers.
    pub quote_style: QuoteStyle,
}

impl RenderConfig {
    /// Creates a configuration with the given quote style.
    #[must_use]
    pub const fn new(quote_style: QuoteStyle) -> Self {
        Self { quote_style }
    }

    /// Loads a configuration from a JSON document.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is not valid JSON,
    /// contains unknown fields, or names an unknown quote style.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Dialect for RenderConfig {
    fn name(&self) -> &'static str {
        "configured"
    }

    fn quote_style(&self) -> QuoteStyle {
        self.quote_style
    }
}
