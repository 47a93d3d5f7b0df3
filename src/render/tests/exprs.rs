//! Generic node-rendering properties.

use pretty_assertions::assert_eq;

use crate::ast::columns::{bool_col, int_col, str_col};
use crate::ast::{and_all, or_all, ComparableExpression, Expr, Expression, Literal, Operator};
use crate::dialect::Dialect;
use crate::error::SqlexError;
use crate::render::ToSql;

#[test]
fn test_binary_wraps_in_parentheses() {
    let out = int_col("a").eq(int_col("b")).to_sql(&Dialect::postgres()).unwrap();
    assert_eq!(out.sql, "(\"a\" = \"b\")");
    assert!(out.params.is_empty());
}

#[test]
fn test_no_wrap_suppresses_parentheses() {
    use crate::clause::Projection;
    let out = Projection::of(int_col("a").eq(int_col("b")))
        .to_sql(&Dialect::postgres())
        .unwrap();
    assert_eq!(out.sql, "\"a\" = \"b\"");
}

#[test]
fn test_empty_conjunction_fails() {
    let err = and_all(Vec::new()).to_sql(&Dialect::postgres()).unwrap_err();
    assert_eq!(err, SqlexError::EmptyConjunction);
}

#[test]
fn test_single_operand_conjunction_renders_unwrapped() {
    let cond = int_col("a").eq(int_col("b"));
    let out = and_all([cond]).to_sql(&Dialect::postgres()).unwrap();
    // Identical to rendering the operand itself with wrapping suppressed.
    assert_eq!(out.sql, "\"a\" = \"b\"");
}

#[test]
fn test_two_operand_conjunction_wraps_and_joins() {
    let a = int_col("a").eq(int_col("b"));
    let b = int_col("c").eq(int_col("d"));
    let out = and_all([a, b]).to_sql(&Dialect::postgres()).unwrap();
    assert_eq!(out.sql, "((\"a\" = \"b\") AND (\"c\" = \"d\"))");

    let a = int_col("a").eq(int_col("b"));
    let b = int_col("c").eq(int_col("d"));
    let out = or_all([a, b]).to_sql(&Dialect::postgres()).unwrap();
    assert_eq!(out.sql, "((\"a\" = \"b\") OR (\"c\" = \"d\"))");
}

#[test]
fn test_nested_conjunctions_keep_their_nesting() {
    let a = bool_col("a");
    let b = bool_col("b");
    let c = bool_col("c");
    let out = a.and(b).and(c).to_sql(&Dialect::postgres()).unwrap();
    assert_eq!(out.sql, "((\"a\" AND \"b\") AND \"c\")");
}

#[test]
fn test_is_null_renders_postfix_without_parentheses() {
    let out = str_col("name").is_null().to_sql(&Dialect::postgres()).unwrap();
    assert_eq!(out.sql, "\"name\" IS NULL");

    let out = str_col("name")
        .is_not_null()
        .to_sql(&Dialect::postgres())
        .unwrap();
    assert_eq!(out.sql, "\"name\" IS NOT NULL");
}

#[test]
fn test_not_renders_prefix_parenthesized() {
    let out = bool_col("active").not().to_sql(&Dialect::postgres()).unwrap();
    assert_eq!(out.sql, "(NOT \"active\")");
}

#[test]
fn test_missing_operand_faults_either_side() {
    let rhs_only = Expr::Binary {
        lhs: None,
        rhs: Some(Expr::column("b").into()),
        op: Operator::Add,
        extra: None,
    };
    assert_eq!(
        rhs_only.to_sql(&Dialect::postgres()).unwrap_err(),
        SqlexError::MissingOperand(Operator::Add)
    );

    let lhs_only = Expr::Binary {
        lhs: Some(Expr::column("a").into()),
        rhs: None,
        op: Operator::Add,
        extra: None,
    };
    assert_eq!(
        lhs_only.to_sql(&Dialect::postgres()).unwrap_err(),
        SqlexError::MissingOperand(Operator::Add)
    );
}

#[test]
fn test_missing_prefix_operand_names_operator() {
    let node = Expr::Prefix {
        op: Operator::Not,
        operand: None,
    };
    let err = node.to_sql(&Dialect::postgres()).unwrap_err();
    assert_eq!(err, SqlexError::MissingOperand(Operator::Not));
    assert_eq!(err.to_string(), "missing operand for operator 'NOT'");
}

#[test]
fn test_between_renders_ternary() {
    let out = int_col("age")
        .between(18i64, 65i64)
        .to_sql(&Dialect::postgres())
        .unwrap();
    assert_eq!(
        out.sql,
        "(\"age\" BETWEEN CAST($1 AS BIGINT) AND CAST($2 AS BIGINT))"
    );
    assert_eq!(out.params, vec![Literal::Int64(18), Literal::Int64(65)]);
}

#[test]
fn test_in_list_renders_row() {
    let out = str_col("status")
        .in_list(["active", "pending"])
        .to_sql(&Dialect::postgres())
        .unwrap();
    assert_eq!(
        out.sql,
        "(\"status\" IN (CAST($1 AS TEXT), CAST($2 AS TEXT)))"
    );
    assert_eq!(
        out.params,
        vec![
            Literal::Str("active".to_string()),
            Literal::Str("pending".to_string())
        ]
    );
}

#[test]
fn test_parameter_order_matches_placeholder_numbering() {
    let cond = int_col("a")
        .eq(1i64)
        .and(int_col("b").eq(2i64))
        .and(int_col("c").eq(3i64));
    let out = cond.to_sql(&Dialect::postgres()).unwrap();
    assert_eq!(
        out.sql,
        "(((\"a\" = CAST($1 AS BIGINT)) AND (\"b\" = CAST($2 AS BIGINT))) AND (\"c\" = CAST($3 AS BIGINT)))"
    );
    assert_eq!(
        out.params,
        vec![Literal::Int64(1), Literal::Int64(2), Literal::Int64(3)]
    );
}

#[test]
fn test_empty_alias_faults() {
    let err = int_col("a").alias("").to_sql(&Dialect::postgres()).unwrap_err();
    assert_eq!(err, SqlexError::EmptyAlias);
}

#[test]
fn test_raw_fragment_renders_verbatim() {
    use crate::ast::columns::raw_timestamp;
    let out = raw_timestamp("now()").to_sql(&Dialect::postgres()).unwrap();
    assert_eq!(out.sql, "now()");
}

#[test]
fn test_shared_subtree_renders_under_both_parents() {
    let price = int_col("price");
    let cond = price.clone().gt(10i64).and(price.lt(99i64));
    let out = cond.to_sql(&Dialect::postgres()).unwrap();
    assert_eq!(
        out.sql,
        "((\"price\" > CAST($1 AS BIGINT)) AND (\"price\" < CAST($2 AS BIGINT)))"
    );
}
