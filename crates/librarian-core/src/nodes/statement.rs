//! Join and SELECT statement nodes.

use super::expression::{Expr, Reference};
use super::predicate::Predicate;
use crate::error::{NodeError, Result};

/// An `ON` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct On(Predicate);

impl On {
    /// Creates an `ON` clause from a predicate.
    #[must_use]
    pub fn new(predicate: impl Into<Predicate>) -> Self {
        Self(predicate.into())
    }

    /// The join condition.
    #[must_use]
    pub const fn predicate(&self) -> &Predicate {
        &self.0
    }
}

/// `INNER JOIN <relation> [ON ...]`.
#[derive(Debug, Clone, PartialEq)]
pub struct InnerJoin {
    relation: Reference,
    on: Option<On>,
}

impl InnerJoin {
    /// Creates an inner join without a condition.
    #[must_use]
    pub const fn new(relation: Reference) -> Self {
        Self { relation, on: None }
    }

    /// Returns the join with `predicate` as its `ON` clause.
    #[must_use]
    pub fn on(self, predicate: impl Into<Predicate>) -> Self {
        Self {
            relation: self.relation,
            on: Some(On::new(predicate)),
        }
    }

    /// The joined relation.
    #[must_use]
    pub const fn relation(&self) -> &Reference {
        &self.relation
    }

    /// The `ON` clause, if any.
    #[must_use]
    pub const fn on_clause(&self) -> Option<&On> {
        self.on.as_ref()
    }
}

/// `LEFT OUTER JOIN <relation> ON ...`. The condition is mandatory.
#[derive(Debug, Clone, PartialEq)]
pub struct OuterJoin {
    relation: Reference,
    on: On,
}

impl OuterJoin {
    /// Creates a left outer join.
    #[must_use]
    pub fn new(relation: Reference, predicate: impl Into<Predicate>) -> Self {
        Self {
            relation,
            on: On::new(predicate),
        }
    }

    /// The joined relation.
    #[must_use]
    pub const fn relation(&self) -> &Reference {
        &self.relation
    }

    /// The `ON` clause.
    #[must_use]
    pub const fn on_clause(&self) -> &On {
        &self.on
    }
}

/// One join in a [`JoinSource`].
#[derive(Debug, Clone, PartialEq)]
pub enum Join {
    /// `INNER JOIN`
    Inner(InnerJoin),
    /// `LEFT OUTER JOIN`
    Outer(OuterJoin),
}

impl From<InnerJoin> for Join {
    fn from(value: InnerJoin) -> Self {
        Self::Inner(value)
    }
}

impl From<OuterJoin> for Join {
    fn from(value: OuterJoin) -> Self {
        Self::Outer(value)
    }
}

/// A primary relation followed by an ordered list of joins.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinSource {
    left: Reference,
    right: Vec<Join>,
}

impl JoinSource {
    /// Creates a join source with no joins yet.
    #[must_use]
    pub const fn new(left: Reference) -> Self {
        Self {
            left,
            right: Vec::new(),
        }
    }

    /// Appends a join.
    #[must_use]
    pub fn join(mut self, join: impl Into<Join>) -> Self {
        self.right.push(join.into());
        self
    }

    /// The primary relation.
    #[must_use]
    pub const fn left(&self) -> &Reference {
        &self.left
    }

    /// The joins, in insertion order.
    #[must_use]
    pub fn right(&self) -> &[Join] {
        &self.right
    }
}

/// The `FROM` source of a [`SelectCore`].
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// A bare relation.
    Reference(Reference),
    /// A relation with joins.
    Join(JoinSource),
}

impl From<Reference> for Source {
    fn from(value: Reference) -> Self {
        Self::Reference(value)
    }
}

impl From<JoinSource> for Source {
    fn from(value: JoinSource) -> Self {
        Self::Join(value)
    }
}

/// One `SELECT ... FROM ... [WHERE ...]` block.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectCore {
    projections: Vec<Expr>,
    source: Source,
    relation: Reference,
    wheres: Vec<Predicate>,
}

impl SelectCore {
    /// Selects every column of `relation`, from `relation`.
    #[must_use]
    pub fn new(relation: Reference) -> Self {
        Self {
            projections: Vec::new(),
            source: Source::Reference(relation.clone()),
            relation,
            wheres: Vec::new(),
        }
    }

    /// Creates a core whose `FROM` clause differs from its primary relation.
    #[must_use]
    pub fn with_source(relation: Reference, source: impl Into<Source>) -> Self {
        Self {
            projections: Vec::new(),
            source: source.into(),
            relation,
            wheres: Vec::new(),
        }
    }

    /// Appends a projection.
    #[must_use]
    pub fn project(mut self, expr: impl Into<Expr>) -> Self {
        self.projections.push(expr.into());
        self
    }

    /// Appends a WHERE predicate. Multiple predicates are AND-combined.
    #[must_use]
    pub fn where_clause(mut self, predicate: impl Into<Predicate>) -> Self {
        self.wheres.push(predicate.into());
        self
    }

    /// Appends a join, turning a bare source into a [`JoinSource`].
    #[must_use]
    pub fn join(self, join: impl Into<Join>) -> Self {
        let source = match self.source {
            Source::Reference(reference) => JoinSource::new(reference),
            Source::Join(source) => source,
        };
        Self {
            projections: self.projections,
            source: Source::Join(source.join(join)),
            relation: self.relation,
            wheres: self.wheres,
        }
    }

    /// The projections, in insertion order. Empty means `<relation>.*`.
    #[must_use]
    pub fn projections(&self) -> &[Expr] {
        &self.projections
    }

    /// The `FROM` source.
    #[must_use]
    pub const fn source(&self) -> &Source {
        &self.source
    }

    /// The primary relation.
    #[must_use]
    pub const fn relation(&self) -> &Reference {
        &self.relation
    }

    /// The WHERE predicates, in insertion order.
    #[must_use]
    pub fn wheres(&self) -> &[Predicate] {
        &self.wheres
    }
}

/// A `LIMIT` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Limit(Expr);

impl Limit {
    /// Creates a `LIMIT` clause.
    #[must_use]
    pub fn new(expr: impl Into<Expr>) -> Self {
        Self(expr.into())
    }

    /// The limit expression.
    #[must_use]
    pub const fn expr(&self) -> &Expr {
        &self.0
    }
}

/// An `OFFSET` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Offset(Expr);

impl Offset {
    /// Creates an `OFFSET` clause.
    #[must_use]
    pub fn new(expr: impl Into<Expr>) -> Self {
        Self(expr.into())
    }

    /// The offset expression.
    #[must_use]
    pub const fn expr(&self) -> &Expr {
        &self.0
    }
}

/// One or more select cores with optional `LIMIT` and `OFFSET`.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    cores: Vec<SelectCore>,
    limit: Option<Limit>,
    offset: Option<Offset>,
}

impl SelectStatement {
    /// Creates a statement from a single core.
    #[must_use]
    pub fn new(core: SelectCore) -> Self {
        Self {
            cores: vec![core],
            limit: None,
            offset: None,
        }
    }

    /// Creates a compound statement from `cores`.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::EmptyStatement`] when `cores` is empty.
    pub fn from_cores(cores: Vec<SelectCore>) -> Result<Self> {
        if cores.is_empty() {
            return Err(NodeError::EmptyStatement);
        }
        Ok(Self {
            cores,
            limit: None,
            offset: None,
        })
    }

    /// Appends another core.
    #[must_use]
    pub fn push_core(mut self, core: SelectCore) -> Self {
        self.cores.push(core);
        self
    }

    /// Sets the `LIMIT` clause, replacing any previous one.
    #[must_use]
    pub fn with_limit(self, expr: impl Into<Expr>) -> Self {
        Self {
            limit: Some(Limit::new(expr)),
            ..self
        }
    }

    /// Sets the `OFFSET` clause, replacing any previous one.
    #[must_use]
    pub fn with_offset(self, expr: impl Into<Expr>) -> Self {
        Self {
            offset: Some(Offset::new(expr)),
            ..self
        }
    }

    /// The cores, in insertion order. Never empty.
    #[must_use]
    pub fn cores(&self) -> &[SelectCore] {
        &self.cores
    }

    /// The `LIMIT` clause, if any.
    #[must_use]
    pub const fn limit(&self) -> Option<&Limit> {
        self.limit.as_ref()
    }

    /// The `OFFSET` clause, if any.
    #[must_use]
    pub const fn offset(&self) -> Option<&Offset> {
        self.offset.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cores_rejects_empty() {
        let err = SelectStatement::from_cores(vec![]).unwrap_err();
        assert!(matches!(err, NodeError::EmptyStatement));
    }

    #[test]
    fn test_from_cores_keeps_order() {
        let stmt = SelectStatement::from_cores(vec![
            SelectCore::new(Reference::new("a")),
            SelectCore::new(Reference::new("b")),
        ])
        .unwrap();
        let names: Vec<&str> = stmt.cores().iter().map(|c| c.relation().name()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_core_join_converts_source() {
        let users = Reference::new("users");
        let core = SelectCore::new(users.clone());
        assert!(matches!(core.source(), Source::Reference(_)));

        let core = core
            .join(InnerJoin::new(Reference::new("orders")))
            .join(OuterJoin::new(
                Reference::new("items"),
                users.attribute("id").eq(1),
            ));
        let Source::Join(source) = core.source() else {
            panic!("expected join source");
        };
        assert_eq!(source.left(), &users);
        assert_eq!(source.right().len(), 2);
        assert!(matches!(source.right()[0], Join::Inner(_)));
        assert!(matches!(source.right()[1], Join::Outer(_)));
    }

    #[test]
    fn test_statement_limit_offset() {
        let stmt = SelectStatement::new(SelectCore::new(Reference::new("t")))
            .with_limit(10)
            .with_offset(5);
        assert!(stmt.limit().is_some());
        assert!(stmt.offset().is_some());
        assert_eq!(stmt.cores().len(), 1);
    }

    #[test]
    fn test_inner_join_on_is_optional() {
        let join = InnerJoin::new(Reference::new("orders"));
        assert!(join.on_clause().is_none());
        let join = join.on(Reference::new("orders").attribute("id").eq(1));
        assert!(join.on_clause().is_some());
    }
}
