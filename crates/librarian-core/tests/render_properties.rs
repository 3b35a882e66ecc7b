//! Whole-tree properties of the renderer: WHERE joining, the implicit
//! `<relation>.*` projection, stability, and quoting styles.

mod common;
use common::*;

use librarian_core::nodes::{Reference, SelectCore, SelectStatement};
use librarian_core::{MySqlDialect, QuoteStyle, RenderConfig, ToSqlVisitor};

fn core_with_wheres(n: usize) -> SelectCore {
    let users = users();
    (0..n).fold(SelectCore::new(users.clone()), |core, i| {
        core.where_clause(users.attribute(format!("c{i}")).eq(1))
    })
}

#[test]
fn where_predicates_joined_with_and() {
    for n in 0..6 {
        let sql = render(&core_with_wheres(n));
        assert_eq!(sql.matches(" AND ").count(), n.saturating_sub(1), "{sql}");
        assert_eq!(sql.contains("WHERE"), n > 0, "{sql}");
    }
}

#[test]
fn where_predicates_keep_order() {
    let sql = render(&core_with_wheres(3));
    assert_eq!(
        sql,
        concat!(
            r#"SELECT "users".* FROM "users" WHERE "users"."c0" = 1 "#,
            r#"AND "users"."c1" = 1 AND "users"."c2" = 1"#,
        )
    );
}

#[test]
fn empty_projection_selects_relation_star() {
    for relation in [
        Reference::new("users"),
        Reference::new("users").with_alias("u"),
        Reference::new("order items"),
    ] {
        let quoted = render(&relation);
        let sql = render(&SelectCore::new(relation));
        assert!(sql.starts_with(&format!("SELECT {quoted}.* FROM ")), "{sql}");
    }
}

#[test]
fn rendering_is_stable() {
    let users = users();
    let stmt = SelectStatement::new(
        SelectCore::new(users.clone())
            .project(users.attribute("id"))
            .where_clause(users.attribute("score").gt(1.25))
            .where_clause(
                users
                    .attribute("name")
                    .like("a%")
                    .or(users.attribute("name").eq(None::<&str>)),
            ),
    )
    .with_limit(50);
    let first = render_stable(&stmt);
    let visitor = ToSqlVisitor::default();
    assert_eq!(visitor.accept(&stmt), first);
    assert_eq!(visitor.accept(&stmt), visitor.accept(&stmt.clone()));
}

#[test]
fn no_trailing_terminator_or_padding() {
    let sql = render(&SelectStatement::new(core_with_wheres(2)).with_limit(1));
    assert!(!sql.ends_with(';'));
    assert_eq!(sql.trim(), sql);
}

#[test]
fn mysql_dialect_uses_backticks() {
    let users = users();
    let core = SelectCore::new(users.clone()).where_clause(users.attribute("id").eq(5));
    assert_eq!(
        render_with(MySqlDialect::new(), &core),
        "SELECT `users`.* FROM `users` WHERE `users`.`id` = 5"
    );
}

#[test]
fn configured_quote_style() {
    let config = RenderConfig::from_json(r#"{"quote_style": "bracket"}"#).unwrap();
    let users = users().with_alias("u");
    let core = SelectCore::new(users.clone()).project(users.attribute("id"));
    assert_eq!(render_with(config, &core), "SELECT [u].[id] FROM [u]");
}

#[test]
fn configured_default_matches_generic() {
    let core = core_with_wheres(2);
    assert_eq!(
        render_with(RenderConfig::new(QuoteStyle::Double), &core),
        render(&core)
    );
}
