//! # librarian-core
//!
//! A typed SQL node tree and a deterministic renderer.
//!
//! This crate provides:
//! - A closed set of node types (literals, relations, attributes,
//!   comparisons, logical connectives, joins, select cores and statements)
//!   composed bottom-up into an owned tree
//! - A stateless [`ToSqlVisitor`] that renders any node to SQL text
//! - Identifier quoting per [`Dialect`], selectable from a [`RenderConfig`]
//!
//! Values are inlined as literals; there are no bound parameters.
//!
//! ## Building and rendering a query
//!
//! ```rust
//! use librarian_core::nodes::{InnerJoin, Reference, SelectCore, SelectStatement};
//! use librarian_core::ToSqlVisitor;
//!
//! let users = Reference::new("users");
//! let orders = Reference::new("orders");
//!
//! let core = SelectCore::new(users.clone())
//!     .join(
//!         InnerJoin::new(orders.clone())
//!             .on(orders.attribute("user_id").eq(users.attribute("id"))),
//!     )
//!     .where_clause(users.attribute("active").eq(true));
//!
//! let sql = ToSqlVisitor::default().accept(&SelectStatement::new(core).with_limit(10));
//! assert_eq!(
//!     sql,
//!     concat!(
//!         r#"SELECT "users".* FROM "users" "#,
//!         r#"INNER JOIN "orders" ON "orders"."user_id" = "users"."id" "#,
//!         r#"WHERE "users"."active" = 'true' LIMIT 10"#,
//!     )
//! );
//! ```
//!
//! ## NULL comparisons
//!
//! SQL `NULL` is not a literal. Compare against [`nodes::Operand::Null`] (or a
//! `None`) and equality renders as `IS NULL`:
//!
//! ```rust
//! use librarian_core::nodes::{Operand, Reference};
//!
//! let t = Reference::new("people").with_alias("t");
//! assert_eq!(t.attribute("name").not_eq(Operand::Null).to_string(), r#""t"."name" IS NOT NULL"#);
//! assert_eq!(t.attribute("name").eq(None::<&str>).to_string(), r#""t"."name" IS NULL"#);
//! ```

pub mod config;
pub mod dialect;
pub mod error;
pub mod nodes;
pub mod visitor;

pub use config::RenderConfig;
pub use dialect::{Dialect, GenericDialect, MySqlDialect, QuoteStyle};
pub use error::{ConfigError, NodeError};
pub use nodes::{Node, SelectCore, SelectStatement};
pub use visitor::ToSqlVisitor;
