//! Dialect divergence: placeholders, quoting, operator overrides.

use pretty_assertions::assert_eq;

use crate::ast::columns::{int_col, str_col};
use crate::ast::literals::int8;
use crate::ast::{ComparableExpression, Literal, Operator, StatementKind};
use crate::dialect::Dialect;
use crate::render::{RenderOptions, ToSql};

#[test]
fn test_anonymous_placeholders_and_backtick_quoting() {
    let cond = int_col("users.age").gt_eq(18i64);
    let out = cond.to_sql(&Dialect::mysql()).unwrap();
    assert_eq!(out.sql, "(`users`.`age` >= CAST(? AS SIGNED))");
    assert_eq!(out.params, vec![Literal::Int64(18)]);
}

#[test]
fn test_override_changes_one_operator_only() {
    let custom = Dialect::new(
        "custom",
        crate::dialect::PlaceholderStyle::Numbered,
        crate::dialect::QuoteStyle::Double,
    )
    .with_override(Operator::Eq, |ops| {
        Box::new(move |ctx, _opts| {
            let lhs = ops.lhs.as_ref().expect("lhs operand");
            let rhs = ops.rhs.as_ref().expect("rhs operand");
            ctx.render_expr(lhs, RenderOptions::default())?;
            ctx.write(" IS NOT DISTINCT FROM ");
            ctx.render_expr(rhs, RenderOptions::default())?;
            Ok(())
        })
    });

    let eq = int_col("a").eq(int_col("b"));
    let lt = int_col("a").lt(int_col("b"));

    // The overridden operator diverges...
    let out = eq.to_sql(&custom).unwrap();
    assert_eq!(out.sql, "(\"a\" IS NOT DISTINCT FROM \"b\")");
    // ...other operators keep the generic rendering...
    let out = lt.to_sql(&custom).unwrap();
    assert_eq!(out.sql, "(\"a\" < \"b\")");
    // ...and the same unmutated tree renders generically under another
    // dialect.
    let out = eq.to_sql(&Dialect::postgres()).unwrap();
    assert_eq!(out.sql, "(\"a\" = \"b\")");
}

#[test]
fn test_mysql_concat_override() {
    let full = str_col("first").concat(str_col("last"));
    let out = full.to_sql(&Dialect::mysql()).unwrap();
    assert_eq!(out.sql, "(CONCAT(`first`, `last`))");

    let out = full.to_sql(&Dialect::postgres()).unwrap();
    assert_eq!(out.sql, "(\"first\" || \"last\")");
}

#[test]
fn test_mysql_cast_keyword_remapping() {
    let out = int8(42).to_sql(&Dialect::mysql()).unwrap();
    assert_eq!(out.sql, "CAST(? AS SIGNED)");
    assert_eq!(out.params, vec![Literal::Int8(42)]);

    let out = crate::ast::literals::text("x").to_sql(&Dialect::mysql()).unwrap();
    assert_eq!(out.sql, "CAST(? AS CHAR)");
}

#[test]
fn test_distinctness_across_dialects() {
    let cond = int_col("a").is_distinct_from(int_col("b"));

    let out = cond.to_sql(&Dialect::postgres()).unwrap();
    assert_eq!(out.sql, "(\"a\" IS DISTINCT FROM \"b\")");

    let out = cond.to_sql(&Dialect::sqlite()).unwrap();
    assert_eq!(out.sql, "(\"a\" IS NOT \"b\")");

    let out = cond.to_sql(&Dialect::mysql()).unwrap();
    assert_eq!(out.sql, "(NOT(`a` <=> `b`))");
}

#[test]
fn test_statement_kind_is_exposed_to_overrides() {
    let spy = Dialect::new(
        "spy",
        crate::dialect::PlaceholderStyle::Numbered,
        crate::dialect::QuoteStyle::Double,
    )
    .with_override(Operator::Eq, |_ops| {
        Box::new(move |ctx, _opts| {
            let tag = match ctx.statement() {
                StatementKind::Update => "update-eq",
                _ => "other-eq",
            };
            ctx.write(tag);
            Ok(())
        })
    });

    let cond = int_col("a").eq(int_col("b"));
    let out = cond.to_sql_for(&spy, StatementKind::Update).unwrap();
    assert_eq!(out.sql, "(update-eq)");
    let out = cond.to_sql(&spy).unwrap();
    assert_eq!(out.sql, "(other-eq)");
}

#[test]
fn test_dialect_is_shared_across_threads() {
    let dialect = std::sync::Arc::new(Dialect::mysql());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let dialect = std::sync::Arc::clone(&dialect);
            std::thread::spawn(move || {
                let cond = int_col("n").eq(i as i64);
                cond.to_sql(&dialect).unwrap().sql
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "(`n` = CAST(? AS SIGNED))");
    }
}
