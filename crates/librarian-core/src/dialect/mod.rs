//! Identifier quoting.
//!
//! Rendering follows a single strategy; the only dialect-dependent part is
//! how table and column identifiers are delimited. This module provides a
//! trait for that behavior and the supported quoting styles.

mod generic;
mod mysql;

use serde::{Deserialize, Serialize};

pub use generic::GenericDialect;
pub use mysql::MySqlDialect;

/// Identifier delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStyle {
    /// `"name"` (ANSI SQL, PostgreSQL, SQLite).
    #[default]
    Double,
    /// `` `name` `` (MySQL).
    Backtick,
    /// `[name]` (SQL Server).
    Bracket,
}

impl QuoteStyle {
    /// Opening delimiter.
    #[must_use]
    pub const fn open(self) -> char {
        match self {
            Self::Double => '"',
            Self::Backtick => '`',
            Self::Bracket => '[',
        }
    }

    /// Closing delimiter.
    #[must_use]
    pub const fn close(self) -> char {
        match self {
            Self::Double => '"',
            Self::Backtick => '`',
            Self::Bracket => ']',
        }
    }

    /// Wraps `name` in the delimiters. Embedded delimiters are not escaped.
    #[must_use]
    pub fn quote(self, name: &str) -> String {
        let mut quoted = String::with_capacity(name.len() + 2);
        quoted.push(self.open());
        quoted.push_str(name);
        quoted.push(self.close());
        quoted
    }

    /// The configuration name of the style, as spelled in a render config.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Double => "double",
            Self::Backtick => "backtick",
            Self::Bracket => "bracket",
        }
    }
}

/// Trait for dialect-specific identifier quoting.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the identifier quoting style.
    fn quote_style(&self) -> QuoteStyle {
        QuoteStyle::Double
    }

    /// Quotes a table name or alias.
    fn quote_table_name(&self, name: &str) -> String {
        self.quote_style().quote(name)
    }

    /// Quotes a column name.
    fn quote_column_name(&self, name: &str) -> String {
        self.quote_style().quote(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_styles() {
        assert_eq!(QuoteStyle::Double.quote("users"), "\"users\"");
        assert_eq!(QuoteStyle::Backtick.quote("users"), "`users`");
        assert_eq!(QuoteStyle::Bracket.quote("users"), "[users]");
    }

    #[test]
    fn test_quote_does_not_escape() {
        assert_eq!(QuoteStyle::Double.quote("a\"b"), "\"a\"b\"");
    }

    #[test]
    fn test_quote_style_names_match_config() {
        for style in [QuoteStyle::Double, QuoteStyle::Backtick, QuoteStyle::Bracket] {
            let json = serde_json::to_string(&style).unwrap();
            assert_eq!(json, format!("\"{}\"", style.as_str()));
            assert_eq!(serde_json::from_str::<QuoteStyle>(&json).unwrap(), style);
        }
    }
}
