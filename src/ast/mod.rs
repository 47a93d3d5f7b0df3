//! Expression AST: nodes, operators, literal values, typed wrappers.

pub mod columns;
pub mod expr;
pub mod literals;
pub mod operators;
pub mod typed;
pub mod types;
pub mod values;

pub use expr::Expr;
pub use operators::{LogicalOp, Operator, SortOrder, StatementKind};
pub use typed::{
    and_all, or_all, BoolExpr, ComparableExpression, DateExpr, Expression, FloatExpr, IntExpr,
    NumericExpression, StrExpr, TimeExpr, TimestampExpr, TimestampzExpr, TimezExpr,
};
pub use types::SqlType;
pub use values::Literal;
