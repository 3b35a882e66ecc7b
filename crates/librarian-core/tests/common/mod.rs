#![allow(dead_code)]

use librarian_core::nodes::{Node, Reference};
use librarian_core::{Dialect, ToSqlVisitor};

pub fn render<'a>(node: impl Into<Node<'a>>) -> String {
    ToSqlVisitor::default().accept(node)
}

pub fn render_with<'a, D: Dialect>(dialect: D, node: impl Into<Node<'a>>) -> String {
    ToSqlVisitor::new(dialect).accept(node)
}

pub fn users() -> Reference {
    Reference::new("users")
}

pub fn orders() -> Reference {
    Reference::new("orders")
}

/// Renders `node` twice and checks both renderings are byte-identical.
pub fn render_stable<'a>(node: impl Into<Node<'a>>) -> String {
    let node = node.into();
    let first = render(node);
    let second = render(node);
    assert_eq!(
        first, second,
        "Rendering is not stable.\n  First:  {first}\n  Second: {second}"
    );
    first
}
