//! Boolean-kind nodes: comparisons and logical connectives.

use super::expression::{Expr, Operand};

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    /// `=`
    Equal,
    /// `!=`
    NotEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterOrEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessOrEqual,
    /// `LIKE`
    Like,
    /// `NOT LIKE`
    NotLike,
}

impl ComparisonOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::GreaterThan => ">",
            Self::GreaterOrEqual => ">=",
            Self::LessThan => "<",
            Self::LessOrEqual => "<=",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
        }
    }

    /// Whether the operator accepts the NULL marker as its right operand.
    #[must_use]
    pub const fn accepts_null(&self) -> bool {
        matches!(self, Self::Equal | Self::NotEqual)
    }
}

/// A binary comparison.
///
/// Only [`ComparisonOp::Equal`] and [`ComparisonOp::NotEqual`] can be paired
/// with [`Operand::Null`]; the constructors make any other pairing
/// impossible.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    op: ComparisonOp,
    left: Expr,
    right: Operand,
}

impl Comparison {
    /// Creates a comparison between two expressions.
    #[must_use]
    pub fn new(op: ComparisonOp, left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Self {
            op,
            left: left.into(),
            right: Operand::Value(right.into()),
        }
    }

    /// `left = right`, or `left IS NULL` against the NULL marker.
    #[must_use]
    pub fn equal(left: impl Into<Expr>, right: impl Into<Operand>) -> Self {
        Self {
            op: ComparisonOp::Equal,
            left: left.into(),
            right: right.into(),
        }
    }

    /// `left != right`, or `left IS NOT NULL` against the NULL marker.
    #[must_use]
    pub fn not_equal(left: impl Into<Expr>, right: impl Into<Operand>) -> Self {
        Self {
            op: ComparisonOp::NotEqual,
            left: left.into(),
            right: right.into(),
        }
    }

    /// The operator.
    #[must_use]
    pub const fn op(&self) -> ComparisonOp {
        self.op
    }

    /// The left operand.
    #[must_use]
    pub const fn left(&self) -> &Expr {
        &self.left
    }

    /// The right operand.
    #[must_use]
    pub const fn right(&self) -> &Operand {
        &self.right
    }

    /// Combines with `other` into `self AND other`.
    #[must_use]
    pub fn and(self, other: impl Into<Predicate>) -> Predicate {
        Predicate::from(self).and(other)
    }

    /// Combines with `other` into `self OR other`.
    #[must_use]
    pub fn or(self, other: impl Into<Predicate>) -> Predicate {
        Predicate::from(self).or(other)
    }
}

/// A boolean-valued expression, the only kind allowed in WHERE and ON.
///
/// `And` and `Or` are never parenthesized automatically. Wrap a side in
/// [`Predicate::grouped`] to control precedence.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// A comparison.
    Comparison(Comparison),
    /// `left AND right`
    And(Box<Predicate>, Box<Predicate>),
    /// `left OR right`
    Or(Box<Predicate>, Box<Predicate>),
    /// `NOT (inner)`
    Not(Box<Predicate>),
    /// `(inner)`
    Grouping(Box<Predicate>),
}

impl Predicate {
    /// Creates `self AND other`.
    #[must_use]
    pub fn and(self, other: impl Into<Self>) -> Self {
        Self::And(Box::new(self), Box::new(other.into()))
    }

    /// Creates `self OR other`.
    #[must_use]
    pub fn or(self, other: impl Into<Self>) -> Self {
        Self::Or(Box::new(self), Box::new(other.into()))
    }

    /// Negates the predicate with `NOT (...)`.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Wraps the predicate in parentheses.
    #[must_use]
    pub fn grouped(self) -> Self {
        Self::Grouping(Box::new(self))
    }
}

impl From<Comparison> for Predicate {
    fn from(value: Comparison) -> Self {
        Self::Comparison(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::Reference;

    #[test]
    fn test_comparison_op_as_str() {
        assert_eq!(ComparisonOp::Equal.as_str(), "=");
        assert_eq!(ComparisonOp::NotEqual.as_str(), "!=");
        assert_eq!(ComparisonOp::GreaterOrEqual.as_str(), ">=");
        assert_eq!(ComparisonOp::NotLike.as_str(), "NOT LIKE");
    }

    #[test]
    fn test_only_equality_accepts_null() {
        assert!(ComparisonOp::Equal.accepts_null());
        assert!(ComparisonOp::NotEqual.accepts_null());
        assert!(!ComparisonOp::LessThan.accepts_null());
        assert!(!ComparisonOp::Like.accepts_null());
    }

    #[test]
    fn test_comparison_or_builds_or_node() {
        let id = Reference::new("users").attribute("id");
        let either = id.eq(1).or(id.eq(2));
        assert!(matches!(
            either,
            Predicate::Or(ref left, ref right)
                if matches!(**left, Predicate::Comparison(_))
                    && matches!(**right, Predicate::Comparison(_))
        ));
    }

    #[test]
    fn test_predicate_chaining() {
        let age = Reference::new("users").attribute("age");
        let predicate = age.gt(18).and(age.lt(65)).grouped().not();
        let Predicate::Not(inner) = predicate else {
            panic!("expected NOT");
        };
        let Predicate::Grouping(inner) = *inner else {
            panic!("expected grouping");
        };
        assert!(matches!(*inner, Predicate::And(_, _)));
    }
}
