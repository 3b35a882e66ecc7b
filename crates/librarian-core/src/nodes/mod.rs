//! The SQL node tree.
//!
//! Nodes are plain values composed bottom-up. Each node owns its children and
//! exposes no rendering logic; rendering lives in [`crate::visitor`].
//!
//! [`Node`] is a borrowed view over every node type. It is the single input
//! type of the renderer, so any node can be the root of a rendering call.

mod expression;
mod predicate;
mod statement;

use std::fmt;

pub use expression::{Attribute, Expr, Literal, Operand, Reference};
pub use predicate::{Comparison, ComparisonOp, Predicate};
pub use statement::{
    InnerJoin, Join, JoinSource, Limit, Offset, On, OuterJoin, SelectCore, SelectStatement, Source,
};

use crate::visitor::ToSqlVisitor;

/// A borrowed reference to any node in the tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    Literal(&'a Literal),
    Reference(&'a Reference),
    Attribute(&'a Attribute),
    Expr(&'a Expr),
    Comparison(&'a Comparison),
    Predicate(&'a Predicate),
    On(&'a On),
    InnerJoin(&'a InnerJoin),
    OuterJoin(&'a OuterJoin),
    Join(&'a Join),
    JoinSource(&'a JoinSource),
    Source(&'a Source),
    SelectCore(&'a SelectCore),
    Limit(&'a Limit),
    Offset(&'a Offset),
    SelectStatement(&'a SelectStatement),
}

impl Node<'_> {
    /// Name of the node kind, as used in log events.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Literal(_) => "literal",
            Self::Reference(_) => "reference",
            Self::Attribute(_) => "attribute",
            Self::Expr(_) => "expr",
            Self::Comparison(_) => "comparison",
            Self::Predicate(_) => "predicate",
            Self::On(_) => "on",
            Self::InnerJoin(_) => "inner_join",
            Self::OuterJoin(_) => "outer_join",
            Self::Join(_) => "join",
            Self::JoinSource(_) => "join_source",
            Self::Source(_) => "source",
            Self::SelectCore(_) => "select_core",
            Self::Limit(_) => "limit",
            Self::Offset(_) => "offset",
            Self::SelectStatement(_) => "select_statement",
        }
    }
}

// `From<&T> for Node` plus a `Display` that renders with the generic dialect.
macro_rules! node_impls {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a $ty> for Node<'a> {
                fn from(node: &'a $ty) -> Self {
                    Self::$ty(node)
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&ToSqlVisitor::default().accept(self))
                }
            }
        )*
    };
}

node_impls!(
    Literal,
    Reference,
    Attribute,
    Expr,
    Comparison,
    Predicate,
    On,
    InnerJoin,
    OuterJoin,
    Join,
    JoinSource,
    Source,
    SelectCore,
    Limit,
    Offset,
    SelectStatement,
);
