//! Column and raw-fragment constructors, one per value category.
//!
//! Column references are quoted by the dialect at render time; raw
//! fragments render verbatim and are the escape hatch for SQL this crate
//! does not model.

use crate::ast::typed::{
    BoolExpr, DateExpr, Expression, FloatExpr, IntExpr, StrExpr, TimeExpr, TimestampExpr,
    TimestampzExpr, TimezExpr,
};
use crate::ast::Expr;

macro_rules! category_constructors {
    ($col:ident, $raw:ident, $ty:ident, $doc:literal) => {
        #[doc = concat!("Reference a ", $doc, " column. Dotted names are quoted per segment.")]
        pub fn $col(name: impl Into<String>) -> $ty {
            $ty::wrap(Expr::column(name))
        }

        #[doc = concat!("A verbatim SQL fragment producing a ", $doc, " value.")]
        pub fn $raw(sql: impl Into<String>) -> $ty {
            $ty::wrap(Expr::raw(sql))
        }
    };
}

category_constructors!(bool_col, raw_bool, BoolExpr, "boolean");
category_constructors!(int_col, raw_int, IntExpr, "integer");
category_constructors!(float_col, raw_float, FloatExpr, "float");
category_constructors!(str_col, raw_str, StrExpr, "string");
category_constructors!(date_col, raw_date, DateExpr, "date");
category_constructors!(time_col, raw_time, TimeExpr, "time");
category_constructors!(timez_col, raw_timez, TimezExpr, "time-with-zone");
category_constructors!(timestamp_col, raw_timestamp, TimestampExpr, "timestamp");
category_constructors!(
    timestampz_col,
    raw_timestampz,
    TimestampzExpr,
    "timestamp-with-zone"
);
