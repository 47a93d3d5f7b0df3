//! Typed SQL expression trees with dialect-aware rendering.
//!
//! Build expressions as immutable typed trees, render them per target
//! engine into SQL text plus an ordered bound-parameter list.
//!
//! ```ignore
//! use sqlex::prelude::*;
//!
//! let cond = int_col("age").gt_eq(18i64).and(str_col("status").eq("active"));
//! let out = cond.to_sql(&Dialect::postgres())?;
//! // out.sql:    (("age" >= CAST($1 AS BIGINT)) AND ("status" = CAST($2 AS TEXT)))
//! // out.params: [Int64(18), Str("active")]
//! ```

pub mod ast;
pub mod clause;
pub mod dialect;
pub mod error;
pub mod render;

pub use dialect::Dialect;
pub use render::{Rendered, ToSql};

pub mod prelude {
    pub use crate::ast::columns::*;
    pub use crate::ast::literals;
    pub use crate::ast::{
        and_all, or_all, BoolExpr, ComparableExpression, DateExpr, Expr, Expression, FloatExpr,
        IntExpr, Literal, LogicalOp, NumericExpression, Operator, SortOrder, SqlType,
        StatementKind, StrExpr, TimeExpr, TimestampExpr, TimestampzExpr, TimezExpr,
    };
    pub use crate::clause::{GroupByTerm, OrderByTerm, Projection};
    pub use crate::dialect::{
        Dialect, Operands, OperatorOverride, PlaceholderStyle, QuoteStyle, SerializeFn,
    };
    pub use crate::error::{SqlexError, SqlexResult};
    pub use crate::render::{RenderContext, RenderOptions, Rendered, ToSql};
}
