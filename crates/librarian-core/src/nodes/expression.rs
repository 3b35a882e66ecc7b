//! Value-kind nodes: literals, relation references, attributes and operands.

use super::predicate::{Comparison, ComparisonOp, Predicate};

/// A literal scalar value.
///
/// SQL `NULL` is deliberately absent: it only exists as [`Operand::Null`] on
/// the right-hand side of an equality comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Text literal, rendered single-quoted.
    Text(String),
    /// Integer literal.
    Integer(i64),
    /// Double-precision float literal.
    Float(f64),
    /// Single-precision float literal, formatted at its own width.
    Float32(f32),
    /// Boolean literal, rendered as the quoted string `'true'` or `'false'`.
    Boolean(bool),
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i8> for Literal {
    fn from(value: i8) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i16> for Literal {
    fn from(value: i16) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u8> for Literal {
    fn from(value: u8) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u16> for Literal {
    fn from(value: u16) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for Literal {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Literal {
    fn from(value: f32) -> Self {
        Self::Float32(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// A named relation (table), optionally aliased.
///
/// An empty alias means "no alias"; the renderer then falls back to the
/// relation name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    name: String,
    alias: String,
}

impl Reference {
    /// Creates an unaliased reference to the relation `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: String::new(),
        }
    }

    /// Returns the reference carrying `alias` instead of its current one.
    ///
    /// Passing an empty string clears the alias.
    #[must_use]
    pub fn with_alias(self, alias: impl Into<String>) -> Self {
        Self {
            name: self.name,
            alias: alias.into(),
        }
    }

    /// The relation name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The alias, if one is set.
    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        if self.alias.is_empty() {
            None
        } else {
            Some(&self.alias)
        }
    }

    /// Builds an attribute (column) owned by this relation.
    #[must_use]
    pub fn attribute(&self, name: impl Into<String>) -> Attribute {
        Attribute::new(self.clone(), name)
    }
}

/// A column reference: a name plus the relation it belongs to.
///
/// The comparison helpers never modify the attribute, they build a new
/// [`Comparison`] holding a copy of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    relation: Reference,
    name: String,
}

impl Attribute {
    /// Creates a new attribute.
    #[must_use]
    pub fn new(relation: Reference, name: impl Into<String>) -> Self {
        Self {
            relation,
            name: name.into(),
        }
    }

    /// The column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The owning relation.
    #[must_use]
    pub const fn relation(&self) -> &Reference {
        &self.relation
    }

    fn compare(&self, op: ComparisonOp, right: impl Into<Expr>) -> Comparison {
        Comparison::new(op, self.clone(), right)
    }

    /// `attr = value`, or `attr IS NULL` when `value` is the NULL marker.
    #[must_use]
    pub fn eq(&self, value: impl Into<Operand>) -> Comparison {
        Comparison::equal(self.clone(), value)
    }

    /// `attr != value`, or `attr IS NOT NULL` when `value` is the NULL marker.
    #[must_use]
    pub fn not_eq(&self, value: impl Into<Operand>) -> Comparison {
        Comparison::not_equal(self.clone(), value)
    }

    /// `attr > value`.
    #[must_use]
    pub fn gt(&self, value: impl Into<Expr>) -> Comparison {
        self.compare(ComparisonOp::GreaterThan, value)
    }

    /// `attr >= value`.
    #[must_use]
    pub fn gt_eq(&self, value: impl Into<Expr>) -> Comparison {
        self.compare(ComparisonOp::GreaterOrEqual, value)
    }

    /// `attr < value`.
    #[must_use]
    pub fn lt(&self, value: impl Into<Expr>) -> Comparison {
        self.compare(ComparisonOp::LessThan, value)
    }

    /// `attr <= value`.
    #[must_use]
    pub fn lt_eq(&self, value: impl Into<Expr>) -> Comparison {
        self.compare(ComparisonOp::LessOrEqual, value)
    }

    /// `attr LIKE pattern`.
    #[must_use]
    pub fn like(&self, pattern: impl Into<Expr>) -> Comparison {
        self.compare(ComparisonOp::Like, pattern)
    }

    /// Same as [`Attribute::like`].
    #[must_use]
    pub fn matches(&self, pattern: impl Into<Expr>) -> Comparison {
        self.like(pattern)
    }

    /// `attr NOT LIKE pattern`.
    #[must_use]
    pub fn not_like(&self, pattern: impl Into<Expr>) -> Comparison {
        self.compare(ComparisonOp::NotLike, pattern)
    }
}

/// An expression that can occupy an operand, projection, LIMIT or OFFSET slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal(Literal),
    /// A column reference.
    Attribute(Attribute),
    /// A boolean-valued expression used as a value.
    Predicate(Box<Predicate>),
}

impl From<Literal> for Expr {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}

impl From<Attribute> for Expr {
    fn from(value: Attribute) -> Self {
        Self::Attribute(value)
    }
}

impl From<Predicate> for Expr {
    fn from(value: Predicate) -> Self {
        Self::Predicate(Box::new(value))
    }
}

impl From<Comparison> for Expr {
    fn from(value: Comparison) -> Self {
        Self::Predicate(Box::new(Predicate::Comparison(value)))
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Literal(value.into())
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Self::Literal(value.into())
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Literal(value.into())
    }
}

impl From<i8> for Expr {
    fn from(value: i8) -> Self {
        Self::Literal(value.into())
    }
}

impl From<i16> for Expr {
    fn from(value: i16) -> Self {
        Self::Literal(value.into())
    }
}

impl From<u8> for Expr {
    fn from(value: u8) -> Self {
        Self::Literal(value.into())
    }
}

impl From<u16> for Expr {
    fn from(value: u16) -> Self {
        Self::Literal(value.into())
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Self::Literal(value.into())
    }
}

impl From<u32> for Expr {
    fn from(value: u32) -> Self {
        Self::Literal(value.into())
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Literal(value.into())
    }
}

impl From<f32> for Expr {
    fn from(value: f32) -> Self {
        Self::Literal(value.into())
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Literal(value.into())
    }
}

/// The right-hand side of an equality comparison: a value or SQL `NULL`.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A regular expression operand.
    Value(Expr),
    /// The NULL marker.
    Null,
}

impl From<Expr> for Operand {
    fn from(value: Expr) -> Self {
        Self::Value(value)
    }
}

impl From<Literal> for Operand {
    fn from(value: Literal) -> Self {
        Self::Value(value.into())
    }
}

impl From<Attribute> for Operand {
    fn from(value: Attribute) -> Self {
        Self::Value(value.into())
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Self::Value(value.into())
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self::Value(value.into())
    }
}

impl From<i8> for Operand {
    fn from(value: i8) -> Self {
        Self::Value(value.into())
    }
}

impl From<i16> for Operand {
    fn from(value: i16) -> Self {
        Self::Value(value.into())
    }
}

impl From<u8> for Operand {
    fn from(value: u8) -> Self {
        Self::Value(value.into())
    }
}

impl From<u16> for Operand {
    fn from(value: u16) -> Self {
        Self::Value(value.into())
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Self::Value(value.into())
    }
}

impl From<u32> for Operand {
    fn from(value: u32) -> Self {
        Self::Value(value.into())
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Value(value.into())
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Self::Value(value.into())
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Self::Value(value.into())
    }
}

impl<T: Into<Self>> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_alias() {
        let users = Reference::new("users");
        assert_eq!(users.alias(), None);

        let aliased = users.with_alias("u");
        assert_eq!(aliased.name(), "users");
        assert_eq!(aliased.alias(), Some("u"));

        let cleared = aliased.with_alias("");
        assert_eq!(cleared.alias(), None);
    }

    #[test]
    fn test_attribute_from_reference() {
        let users = Reference::new("users").with_alias("u");
        let id = users.attribute("id");
        assert_eq!(id.name(), "id");
        assert_eq!(id.relation(), &users);
    }

    #[test]
    fn test_comparison_does_not_consume_attribute() {
        let id = Reference::new("users").attribute("id");
        let first = id.eq(1);
        let second = id.gt(2);
        assert_eq!(first.op(), ComparisonOp::Equal);
        assert_eq!(second.op(), ComparisonOp::GreaterThan);
        assert_eq!(id.name(), "id");
    }

    #[test]
    fn test_option_operand_conversion() {
        assert_eq!(Operand::from(None::<i64>), Operand::Null);
        assert_eq!(Operand::from(None::<&str>), Operand::Null);
        assert_eq!(
            Operand::from(Some(7)),
            Operand::Value(Expr::Literal(Literal::Integer(7)))
        );
    }

    #[test]
    fn test_literal_conversions() {
        assert_eq!(Literal::from("a"), Literal::Text(String::from("a")));
        assert_eq!(Literal::from(3_i32), Literal::Integer(3));
        assert_eq!(Literal::from(2.5_f64), Literal::Float(2.5));
        assert_eq!(Literal::from(0.1_f32), Literal::Float32(0.1));
        assert_eq!(Literal::from(-7_i8), Literal::Integer(-7));
        assert_eq!(Literal::from(300_i16), Literal::Integer(300));
        assert_eq!(Literal::from(255_u8), Literal::Integer(255));
        assert_eq!(Literal::from(65_535_u16), Literal::Integer(65_535));
        assert_eq!(Literal::from(true), Literal::Boolean(true));
    }
}
