//! Value-category wrappers over [`Expr`].
//!
//! Every expression carries one of nine categories (boolean, integer,
//! float, string, date, time, time-with-zone, timestamp,
//! timestamp-with-zone) fixed at construction. Operations are only
//! offered where the category makes them valid: `AND` wants booleans,
//! `LIKE` wants strings, arithmetic wants numerics. Comparisons always
//! produce a [`BoolExpr`] whatever their operand category.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::ast::literals;
use crate::ast::{Expr, LogicalOp, Operator, SortOrder};
use crate::clause::{GroupByTerm, OrderByTerm, Projection};

/// Capability contract shared by every typed expression wrapper.
///
/// The role-independent operations (`IS NULL`, `IN`, aliasing, ordering,
/// grouping) live here as default methods, so a wrapper only supplies the
/// three accessors. Combinators consume their receiver; wrappers are
/// cheap to clone (children are `Arc`-shared) when a subtree is reused.
pub trait Expression: Sized + Clone {
    /// Wrap a raw node in this category. The caller asserts the node
    /// really produces a value of this category.
    fn wrap(expr: Expr) -> Self;

    fn expr(&self) -> &Expr;

    fn into_expr(self) -> Expr;

    /// Test whether this expression is NULL.
    fn is_null(self) -> BoolExpr {
        BoolExpr::wrap(Expr::postfix(self.into_expr(), Operator::IsNull))
    }

    /// Test whether this expression is non-NULL.
    fn is_not_null(self) -> BoolExpr {
        BoolExpr::wrap(Expr::postfix(self.into_expr(), Operator::IsNotNull))
    }

    /// Membership in a list of same-category expressions.
    fn in_list<I>(self, items: I) -> BoolExpr
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        let row = Expr::row(items.into_iter().map(|item| item.into().into_expr()));
        BoolExpr::wrap(Expr::binary(self.into_expr(), Operator::In, row))
    }

    /// Non-membership in a list of same-category expressions.
    fn not_in<I>(self, items: I) -> BoolExpr
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        let row = Expr::row(items.into_iter().map(|item| item.into().into_expr()));
        BoolExpr::wrap(Expr::binary(self.into_expr(), Operator::NotIn, row))
    }

    /// Present this expression as a projection item under an alias.
    fn alias(self, name: impl Into<String>) -> Projection {
        Projection::new(Expr::alias(self.into_expr(), name))
    }

    /// Sort ascending on this expression.
    fn asc(self) -> OrderByTerm {
        OrderByTerm::new(self.into_expr(), SortOrder::Asc)
    }

    /// Sort descending on this expression.
    fn desc(self) -> OrderByTerm {
        OrderByTerm::new(self.into_expr(), SortOrder::Desc)
    }

    /// Sort on this expression with an explicit direction.
    fn order(self, order: SortOrder) -> OrderByTerm {
        OrderByTerm::new(self.into_expr(), order)
    }

    /// Present this expression as a GROUP BY term.
    fn group_term(self) -> GroupByTerm {
        GroupByTerm::new(self.into_expr())
    }
}

/// Same-category comparisons. Every comparison yields a boolean.
pub trait ComparableExpression: Expression {
    fn eq(self, rhs: impl Into<Self>) -> BoolExpr {
        self.compare(Operator::Eq, rhs)
    }

    fn not_eq(self, rhs: impl Into<Self>) -> BoolExpr {
        self.compare(Operator::NotEq, rhs)
    }

    fn lt(self, rhs: impl Into<Self>) -> BoolExpr {
        self.compare(Operator::Lt, rhs)
    }

    fn lt_eq(self, rhs: impl Into<Self>) -> BoolExpr {
        self.compare(Operator::LtEq, rhs)
    }

    fn gt(self, rhs: impl Into<Self>) -> BoolExpr {
        self.compare(Operator::Gt, rhs)
    }

    fn gt_eq(self, rhs: impl Into<Self>) -> BoolExpr {
        self.compare(Operator::GtEq, rhs)
    }

    /// NULL-safe inequality.
    fn is_distinct_from(self, rhs: impl Into<Self>) -> BoolExpr {
        self.compare(Operator::IsDistinctFrom, rhs)
    }

    /// NULL-safe equality.
    fn is_not_distinct_from(self, rhs: impl Into<Self>) -> BoolExpr {
        self.compare(Operator::IsNotDistinctFrom, rhs)
    }

    /// Range check, inclusive on both ends.
    fn between(self, low: impl Into<Self>, high: impl Into<Self>) -> BoolExpr {
        BoolExpr::wrap(Expr::ternary(
            self.into_expr(),
            Operator::Between,
            low.into().into_expr(),
            high.into().into_expr(),
        ))
    }

    fn not_between(self, low: impl Into<Self>, high: impl Into<Self>) -> BoolExpr {
        BoolExpr::wrap(Expr::ternary(
            self.into_expr(),
            Operator::NotBetween,
            low.into().into_expr(),
            high.into().into_expr(),
        ))
    }

    #[doc(hidden)]
    fn compare(self, op: Operator, rhs: impl Into<Self>) -> BoolExpr {
        BoolExpr::wrap(Expr::binary(self.into_expr(), op, rhs.into().into_expr()))
    }
}

/// Arithmetic over a numeric category; results stay in the category.
pub trait NumericExpression: ComparableExpression {
    fn add(self, rhs: impl Into<Self>) -> Self {
        self.arith(Operator::Add, rhs)
    }

    fn sub(self, rhs: impl Into<Self>) -> Self {
        self.arith(Operator::Sub, rhs)
    }

    fn mul(self, rhs: impl Into<Self>) -> Self {
        self.arith(Operator::Mul, rhs)
    }

    fn div(self, rhs: impl Into<Self>) -> Self {
        self.arith(Operator::Div, rhs)
    }

    fn rem(self, rhs: impl Into<Self>) -> Self {
        self.arith(Operator::Rem, rhs)
    }

    /// Unary negation.
    fn neg(self) -> Self {
        Self::wrap(Expr::prefix(Operator::Sub, self.into_expr()))
    }

    #[doc(hidden)]
    fn arith(self, op: Operator, rhs: impl Into<Self>) -> Self {
        Self::wrap(Expr::binary(self.into_expr(), op, rhs.into().into_expr()))
    }
}

macro_rules! expression_impl {
    ($name:ident) => {
        impl Expression for $name {
            fn wrap(expr: Expr) -> Self {
                Self(expr)
            }

            fn expr(&self) -> &Expr {
                &self.0
            }

            fn into_expr(self) -> Expr {
                self.0
            }
        }

        impl From<$name> for Expr {
            fn from(e: $name) -> Expr {
                e.0
            }
        }
    };
}

/// A boolean expression.
#[derive(Debug, Clone, PartialEq)]
pub struct BoolExpr(Expr);

expression_impl!(BoolExpr);
impl ComparableExpression for BoolExpr {}

impl BoolExpr {
    /// Conjunction with another boolean expression.
    ///
    /// Chained calls nest: `a.and(b).and(c)` stays `AND(AND(a,b),c)`.
    pub fn and(self, rhs: impl Into<BoolExpr>) -> BoolExpr {
        BoolExpr::wrap(Expr::conjunction(
            LogicalOp::And,
            [self.into_expr(), rhs.into().into_expr()],
        ))
    }

    /// Disjunction with another boolean expression.
    pub fn or(self, rhs: impl Into<BoolExpr>) -> BoolExpr {
        BoolExpr::wrap(Expr::conjunction(
            LogicalOp::Or,
            [self.into_expr(), rhs.into().into_expr()],
        ))
    }

    /// Logical negation.
    pub fn not(self) -> BoolExpr {
        BoolExpr::wrap(Expr::prefix(Operator::Not, self.into_expr()))
    }
}

impl From<bool> for BoolExpr {
    fn from(b: bool) -> Self {
        literals::boolean(b)
    }
}

/// An integer expression.
#[derive(Debug, Clone, PartialEq)]
pub struct IntExpr(Expr);

expression_impl!(IntExpr);
impl ComparableExpression for IntExpr {}
impl NumericExpression for IntExpr {}

impl From<i8> for IntExpr {
    fn from(n: i8) -> Self {
        literals::int8(n)
    }
}

impl From<i16> for IntExpr {
    fn from(n: i16) -> Self {
        literals::int16(n)
    }
}

impl From<i32> for IntExpr {
    fn from(n: i32) -> Self {
        literals::int32(n)
    }
}

impl From<i64> for IntExpr {
    fn from(n: i64) -> Self {
        literals::int64(n)
    }
}

impl From<u8> for IntExpr {
    fn from(n: u8) -> Self {
        literals::uint8(n)
    }
}

impl From<u16> for IntExpr {
    fn from(n: u16) -> Self {
        literals::uint16(n)
    }
}

impl From<u32> for IntExpr {
    fn from(n: u32) -> Self {
        literals::uint32(n)
    }
}

impl From<u64> for IntExpr {
    fn from(n: u64) -> Self {
        literals::uint64(n)
    }
}

/// A floating point / arbitrary-precision numeric expression.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatExpr(Expr);

expression_impl!(FloatExpr);
impl ComparableExpression for FloatExpr {}
impl NumericExpression for FloatExpr {}

impl From<f64> for FloatExpr {
    fn from(n: f64) -> Self {
        literals::float(n)
    }
}

impl From<Decimal> for FloatExpr {
    fn from(d: Decimal) -> Self {
        literals::decimal(d)
    }
}

/// A string expression.
#[derive(Debug, Clone, PartialEq)]
pub struct StrExpr(Expr);

expression_impl!(StrExpr);
impl ComparableExpression for StrExpr {}

impl StrExpr {
    /// Pattern match (LIKE).
    pub fn like(self, pattern: impl Into<StrExpr>) -> BoolExpr {
        self.compare(Operator::Like, pattern)
    }

    pub fn not_like(self, pattern: impl Into<StrExpr>) -> BoolExpr {
        self.compare(Operator::NotLike, pattern)
    }

    /// Regular-expression match.
    pub fn regexp(self, pattern: impl Into<StrExpr>) -> BoolExpr {
        self.compare(Operator::Regexp, pattern)
    }

    /// String concatenation; mysql renders this as CONCAT(a, b).
    pub fn concat(self, rhs: impl Into<StrExpr>) -> StrExpr {
        StrExpr::wrap(Expr::binary(
            self.into_expr(),
            Operator::Concat,
            rhs.into().into_expr(),
        ))
    }
}

impl From<&str> for StrExpr {
    fn from(s: &str) -> Self {
        literals::text(s)
    }
}

impl From<String> for StrExpr {
    fn from(s: String) -> Self {
        literals::text(s)
    }
}

impl From<Uuid> for StrExpr {
    fn from(u: Uuid) -> Self {
        literals::uuid(u)
    }
}

/// A calendar date expression.
#[derive(Debug, Clone, PartialEq)]
pub struct DateExpr(Expr);

expression_impl!(DateExpr);
impl ComparableExpression for DateExpr {}

impl From<NaiveDate> for DateExpr {
    fn from(d: NaiveDate) -> Self {
        literals::date(d)
    }
}

/// A time-of-day expression.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeExpr(Expr);

expression_impl!(TimeExpr);
impl ComparableExpression for TimeExpr {}

impl From<NaiveTime> for TimeExpr {
    fn from(t: NaiveTime) -> Self {
        literals::time(t)
    }
}

/// A time-of-day-with-zone expression.
#[derive(Debug, Clone, PartialEq)]
pub struct TimezExpr(Expr);

expression_impl!(TimezExpr);
impl ComparableExpression for TimezExpr {}

/// A timestamp expression without zone.
#[derive(Debug, Clone, PartialEq)]
pub struct TimestampExpr(Expr);

expression_impl!(TimestampExpr);
impl ComparableExpression for TimestampExpr {}

impl From<NaiveDateTime> for TimestampExpr {
    fn from(ts: NaiveDateTime) -> Self {
        literals::timestamp(ts)
    }
}

/// A timestamp-with-zone expression.
#[derive(Debug, Clone, PartialEq)]
pub struct TimestampzExpr(Expr);

expression_impl!(TimestampzExpr);
impl ComparableExpression for TimestampzExpr {}

impl From<DateTime<FixedOffset>> for TimestampzExpr {
    fn from(ts: DateTime<FixedOffset>) -> Self {
        literals::timestampz(ts)
    }
}

impl From<DateTime<Utc>> for TimestampzExpr {
    fn from(ts: DateTime<Utc>) -> Self {
        literals::timestampz(ts.fixed_offset())
    }
}

/// n-ary AND over any number of boolean expressions.
pub fn and_all(operands: impl IntoIterator<Item = BoolExpr>) -> BoolExpr {
    BoolExpr::wrap(Expr::conjunction(
        LogicalOp::And,
        operands.into_iter().map(Expression::into_expr),
    ))
}

/// n-ary OR over any number of boolean expressions.
pub fn or_all(operands: impl IntoIterator<Item = BoolExpr>) -> BoolExpr {
    BoolExpr::wrap(Expr::conjunction(
        LogicalOp::Or,
        operands.into_iter().map(Expression::into_expr),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::columns::{int_col, str_col};

    #[test]
    fn test_comparison_yields_bool_category() {
        let cond = int_col("age").gt_eq(18i64);
        match cond.expr() {
            Expr::Binary { op, .. } => assert_eq!(*op, Operator::GtEq),
            other => panic!("unexpected node: {:?}", other),
        }
    }

    #[test]
    fn test_and_preserves_nesting() {
        let a = int_col("a").eq(1i64);
        let b = int_col("b").eq(2i64);
        let c = int_col("c").eq(3i64);
        let nested = a.and(b).and(c);
        match nested.expr() {
            Expr::Conjunction { operands, .. } => {
                assert_eq!(operands.len(), 2);
                assert!(matches!(*operands[0], Expr::Conjunction { .. }));
            }
            other => panic!("unexpected node: {:?}", other),
        }
    }

    #[test]
    fn test_in_list_builds_row() {
        let cond = str_col("status").in_list(["active", "pending"]);
        match cond.expr() {
            Expr::Binary { op, rhs, .. } => {
                assert_eq!(*op, Operator::In);
                assert!(matches!(**rhs.as_ref().unwrap(), Expr::Row(_)));
            }
            other => panic!("unexpected node: {:?}", other),
        }
    }
}
