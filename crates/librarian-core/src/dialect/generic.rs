//! Generic SQL dialect.

use super::Dialect;

/// A generic SQL dialect quoting identifiers with double quotes.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect;

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::QuoteStyle;

    #[test]
    fn test_generic_dialect() {
        let dialect = GenericDialect::new();
        assert_eq!(dialect.name(), "generic");
        assert_eq!(dialect.quote_style(), QuoteStyle::Double);
        assert_eq!(dialect.quote_table_name("users"), "\"users\"");
        assert_eq!(dialect.quote_column_name("id"), "\"id\"");
    }
}
