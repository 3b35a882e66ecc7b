//! SQL rendering.
//!
//! [`ToSqlVisitor`] turns any [`Node`] into SQL text. It holds nothing but a
//! [`Dialect`], renders children before splicing them into their parent's
//! template, and never parenthesizes on its own: precedence is controlled by
//! [`Predicate::Grouping`] nodes in the tree.
//!
//! ```rust
//! use librarian_core::nodes::{Reference, SelectCore, SelectStatement};
//! use librarian_core::visitor::ToSqlVisitor;
//!
//! let users = Reference::new("users");
//! let core = SelectCore::new(users.clone()).where_clause(users.attribute("id").eq(5));
//! let stmt = SelectStatement::new(core).with_limit(10);
//!
//! assert_eq!(
//!     ToSqlVisitor::default().accept(&stmt),
//!     r#"SELECT "users".* FROM "users" WHERE "users"."id" = 5 LIMIT 10"#
//! );
//! ```

mod literal;

use tracing::trace;

use crate::dialect::{Dialect, GenericDialect};
use crate::nodes::{
    Attribute, Comparison, ComparisonOp, Expr, InnerJoin, Join, JoinSource, Limit, Literal, Node,
    Offset, On, Operand, OuterJoin, Predicate, Reference, SelectCore, SelectStatement, Source,
};

/// Renders node trees to SQL text for a dialect.
#[derive(Debug, Clone, Copy)]
pub struct ToSqlVisitor<D = GenericDialect> {
    dialect: D,
}

impl Default for ToSqlVisitor {
    fn default() -> Self {
        Self::new(GenericDialect::new())
    }
}

impl<D: Dialect> ToSqlVisitor<D> {
    /// Creates a renderer for `dialect`.
    #[must_use]
    pub const fn new(dialect: D) -> Self {
        Self { dialect }
    }

    /// Returns the dialect.
    #[must_use]
    pub const fn dialect(&self) -> &D {
        &self.dialect
    }

    /// Renders the tree rooted at `node`.
    #[must_use]
    pub fn accept<'a>(&self, node: impl Into<Node<'a>>) -> String {
        let node = node.into();
        let sql = self.visit(node);
        trace!(
            dialect = self.dialect.name(),
            quote_style = self.dialect.quote_style().as_str(),
            node = node.kind(),
            sql = %sql,
            "Rendered node"
        );
        sql
    }

    /// Dispatches on the node kind.
    #[must_use]
    pub fn visit(&self, node: Node<'_>) -> String {
        match node {
            Node::Literal(o) => self.visit_literal(o),
            Node::Reference(o) => self.visit_reference(o),
            Node::Attribute(o) => self.visit_attribute(o),
            Node::Expr(o) => self.visit_expr(o),
            Node::Comparison(o) => self.visit_comparison(o),
            Node::Predicate(o) => self.visit_predicate(o),
            Node::On(o) => self.visit_on(o),
            Node::InnerJoin(o) => self.visit_inner_join(o),
            Node::OuterJoin(o) => self.visit_outer_join(o),
            Node::Join(o) => self.visit_join(o),
            Node::JoinSource(o) => self.visit_join_source(o),
            Node::Source(o) => self.visit_source(o),
            Node::SelectCore(o) => self.visit_select_core(o),
            Node::Limit(o) => self.visit_limit(o),
            Node::Offset(o) => self.visit_offset(o),
            Node::SelectStatement(o) => self.visit_select_statement(o),
        }
    }

    /// Renders a literal.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn visit_literal(&self, o: &Literal) -> String {
        match o {
            Literal::Text(s) => literal::quote_text(s),
            Literal::Integer(n) => n.to_string(),
            Literal::Float(f) => literal::format_float(*f),
            Literal::Float32(f) => literal::format_float32(*f),
            Literal::Boolean(b) => literal::format_bool(*b),
        }
    }

    /// Renders a relation as its quoted alias, or its quoted name if unaliased.
    #[must_use]
    pub fn visit_reference(&self, o: &Reference) -> String {
        self.dialect.quote_table_name(o.alias().unwrap_or(o.name()))
    }

    /// Renders `<relation>.<column>`.
    #[must_use]
    pub fn visit_attribute(&self, o: &Attribute) -> String {
        format!(
            "{}.{}",
            self.visit_reference(o.relation()),
            self.dialect.quote_column_name(o.name())
        )
    }

    /// Renders an expression.
    #[must_use]
    pub fn visit_expr(&self, o: &Expr) -> String {
        match o {
            Expr::Literal(literal) => self.visit_literal(literal),
            Expr::Attribute(attribute) => self.visit_attribute(attribute),
            Expr::Predicate(predicate) => self.visit_predicate(predicate),
        }
    }

    /// Renders a comparison. Equality against NULL becomes `IS [NOT] NULL`.
    ///
    /// # Panics
    ///
    /// Panics if the NULL marker is paired with an operator other than `=` or
    /// `!=`. The [`Comparison`] constructors never produce such a node.
    #[must_use]
    pub fn visit_comparison(&self, o: &Comparison) -> String {
        let left = self.visit_expr(o.left());
        let op = o.op();
        match o.right() {
            Operand::Value(right) => format!("{left} {} {}", op.as_str(), self.visit_expr(right)),
            Operand::Null => {
                assert!(
                    op.accepts_null(),
                    "comparison `{}` has a NULL right operand",
                    op.as_str()
                );
                if op == ComparisonOp::NotEqual {
                    format!("{left} IS NOT NULL")
                } else {
                    format!("{left} IS NULL")
                }
            }
        }
    }

    /// Renders a predicate.
    #[must_use]
    pub fn visit_predicate(&self, o: &Predicate) -> String {
        match o {
            Predicate::Comparison(comparison) => self.visit_comparison(comparison),
            Predicate::And(left, right) => format!(
                "{} AND {}",
                self.visit_predicate(left),
                self.visit_predicate(right)
            ),
            Predicate::Or(left, right) => format!(
                "{} OR {}",
                self.visit_predicate(left),
                self.visit_predicate(right)
            ),
            Predicate::Not(inner) => format!("NOT ({})", self.visit_predicate(inner)),
            Predicate::Grouping(inner) => format!("({})", self.visit_predicate(inner)),
        }
    }

    /// Renders `ON <predicate>`.
    #[must_use]
    pub fn visit_on(&self, o: &On) -> String {
        format!("ON {}", self.visit_predicate(o.predicate()))
    }

    /// Renders `INNER JOIN <relation>`, followed by the `ON` clause if present.
    #[must_use]
    pub fn visit_inner_join(&self, o: &InnerJoin) -> String {
        let mut sql = String::from("INNER JOIN ");
        sql.push_str(&self.visit_reference(o.relation()));
        if let Some(on) = o.on_clause() {
            sql.push(' ');
            sql.push_str(&self.visit_on(on));
        }
        sql
    }

    /// Renders `LEFT OUTER JOIN <relation> ON ...`.
    #[must_use]
    pub fn visit_outer_join(&self, o: &OuterJoin) -> String {
        format!(
            "LEFT OUTER JOIN {} {}",
            self.visit_reference(o.relation()),
            self.visit_on(o.on_clause())
        )
    }

    /// Renders a join.
    #[must_use]
    pub fn visit_join(&self, o: &Join) -> String {
        match o {
            Join::Inner(join) => self.visit_inner_join(join),
            Join::Outer(join) => self.visit_outer_join(join),
        }
    }

    /// Renders the primary relation followed by its joins, space separated.
    #[must_use]
    pub fn visit_join_source(&self, o: &JoinSource) -> String {
        let mut sql = self.visit_reference(o.left());
        if !o.right().is_empty() {
            let joins: Vec<String> = o.right().iter().map(|j| self.visit_join(j)).collect();
            sql.push(' ');
            sql.push_str(&joins.join(" "));
        }
        String::from(sql.trim_matches(' '))
    }

    /// Renders a `FROM` source.
    #[must_use]
    pub fn visit_source(&self, o: &Source) -> String {
        match o {
            Source::Reference(reference) => self.visit_reference(reference),
            Source::Join(source) => self.visit_join_source(source),
        }
    }

    /// Renders `SELECT <projections> FROM <source> [WHERE <p1> AND <p2> ...]`.
    ///
    /// With no projections the select list is `<relation>.*`.
    #[must_use]
    pub fn visit_select_core(&self, o: &SelectCore) -> String {
        let mut sql = String::from(" SELECT ");

        if o.projections().is_empty() {
            sql.push_str(&self.visit_reference(o.relation()));
            sql.push_str(".*");
        } else {
            let projections: Vec<String> =
                o.projections().iter().map(|p| self.visit_expr(p)).collect();
            sql.push_str(&projections.join(", "));
        }

        sql.push_str(" FROM ");
        sql.push_str(&self.visit_source(o.source()));

        if !o.wheres().is_empty() {
            let wheres: Vec<String> = o.wheres().iter().map(|w| self.visit_predicate(w)).collect();
            sql.push_str(" WHERE ");
            sql.push_str(&wheres.join(" AND "));
        }

        String::from(sql.trim_matches(' '))
    }

    /// Renders ` LIMIT <expr>`, leading space included.
    #[must_use]
    pub fn visit_limit(&self, o: &Limit) -> String {
        format!(" LIMIT {}", self.visit_expr(o.expr()))
    }

    /// Renders ` OFFSET <expr>`, leading space included.
    #[must_use]
    pub fn visit_offset(&self, o: &Offset) -> String {
        format!(" OFFSET {}", self.visit_expr(o.expr()))
    }

    /// Renders the cores back to back, then the `LIMIT` and `OFFSET` clauses.
    #[must_use]
    pub fn visit_select_statement(&self, o: &SelectStatement) -> String {
        let mut sql: String = o.cores().iter().map(|c| self.visit_select_core(c)).collect();
        if let Some(limit) = o.limit() {
            sql.push_str(&self.visit_limit(limit));
        }
        if let Some(offset) = o.offset() {
            sql.push_str(&self.visit_offset(offset));
        }
        sql
    }
}
