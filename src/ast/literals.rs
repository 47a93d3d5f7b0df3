//! Typed literal constructors.
//!
//! Each host primitive gets one constructor that wraps the value in a
//! [`Literal`] node tagged with its source width, then casts it to the
//! canonical SQL type for that category. Prepared-statement binding is
//! ambiguous about narrow numeric literal types across backends, so the
//! target type is made explicit at construction instead of inferred.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::ast::typed::{
    BoolExpr, DateExpr, Expression, FloatExpr, IntExpr, StrExpr, TimeExpr, TimestampExpr,
    TimestampzExpr, TimezExpr,
};
use crate::ast::{Expr, Literal, SqlType};
use crate::error::{SqlexError, SqlexResult};

fn cast_literal(value: impl Into<Literal>, target: SqlType) -> Expr {
    Expr::cast(Expr::Literal(value.into()), target)
}

/// Boolean literal.
pub fn boolean(value: bool) -> BoolExpr {
    BoolExpr::wrap(cast_literal(value, SqlType::Boolean))
}

/// 8-bit signed integer literal.
pub fn int8(value: i8) -> IntExpr {
    IntExpr::wrap(cast_literal(value, SqlType::SmallInt))
}

/// 16-bit signed integer literal.
pub fn int16(value: i16) -> IntExpr {
    IntExpr::wrap(cast_literal(value, SqlType::SmallInt))
}

/// 32-bit signed integer literal.
pub fn int32(value: i32) -> IntExpr {
    IntExpr::wrap(cast_literal(value, SqlType::Integer))
}

/// 64-bit signed integer literal.
pub fn int64(value: i64) -> IntExpr {
    IntExpr::wrap(cast_literal(value, SqlType::BigInt))
}

/// 8-bit unsigned integer literal.
pub fn uint8(value: u8) -> IntExpr {
    IntExpr::wrap(cast_literal(value, SqlType::SmallInt))
}

/// 16-bit unsigned integer literal.
pub fn uint16(value: u16) -> IntExpr {
    IntExpr::wrap(cast_literal(value, SqlType::Integer))
}

/// 32-bit unsigned integer literal.
pub fn uint32(value: u32) -> IntExpr {
    IntExpr::wrap(cast_literal(value, SqlType::BigInt))
}

/// 64-bit unsigned integer literal.
pub fn uint64(value: u64) -> IntExpr {
    IntExpr::wrap(cast_literal(value, SqlType::BigInt))
}

/// Double-precision float literal.
pub fn float(value: f64) -> FloatExpr {
    FloatExpr::wrap(cast_literal(value, SqlType::DoublePrecision))
}

/// Arbitrary-precision decimal literal.
pub fn decimal(value: Decimal) -> FloatExpr {
    FloatExpr::wrap(cast_literal(value, SqlType::Numeric))
}

/// String literal.
pub fn text(value: impl Into<String>) -> StrExpr {
    StrExpr::wrap(cast_literal(value.into(), SqlType::Text))
}

/// UUID literal, rendered through its canonical string form.
pub fn uuid(value: Uuid) -> StrExpr {
    StrExpr::wrap(cast_literal(value, SqlType::Uuid))
}

/// Byte-sequence literal.
///
/// Accepts text or raw bytes only; any other literal kind is rejected
/// before a node is created. This is the one eager validation in the
/// constructor family.
pub fn bytea(value: impl Into<Literal>) -> SqlexResult<StrExpr> {
    let value = value.into();
    match value {
        Literal::Str(_) | Literal::Bytes(_) => {
            Ok(StrExpr::wrap(cast_literal(value, SqlType::Bytea)))
        }
        other => Err(SqlexError::InvalidLiteralType(other.kind_name().to_string())),
    }
}

/// Calendar date literal.
pub fn date(value: NaiveDate) -> DateExpr {
    DateExpr::wrap(cast_literal(value, SqlType::Date))
}

/// Time-of-day literal.
pub fn time(value: NaiveTime) -> TimeExpr {
    TimeExpr::wrap(cast_literal(value, SqlType::Time))
}

/// Time-of-day literal with a fixed UTC offset.
pub fn timez(value: NaiveTime, offset: FixedOffset) -> TimezExpr {
    let literal = Literal::Timez {
        time: value,
        offset_secs: offset.local_minus_utc(),
    };
    TimezExpr::wrap(Expr::cast(Expr::Literal(literal), SqlType::TimeWithZone))
}

/// Timestamp literal without zone.
pub fn timestamp(value: NaiveDateTime) -> TimestampExpr {
    TimestampExpr::wrap(cast_literal(value, SqlType::Timestamp))
}

/// Timestamp literal with zone.
pub fn timestampz(value: DateTime<FixedOffset>) -> TimestampzExpr {
    TimestampzExpr::wrap(cast_literal(value, SqlType::TimestampWithZone))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_int_casts_to_smallint() {
        let lit = int8(42);
        match lit.expr() {
            Expr::Cast { expr, target } => {
                assert_eq!(*target, SqlType::SmallInt);
                assert_eq!(**expr, Expr::Literal(Literal::Int8(42)));
            }
            other => panic!("unexpected node: {:?}", other),
        }
    }

    #[test]
    fn test_bytea_accepts_text_and_bytes() {
        assert!(bytea("payload").is_ok());
        assert!(bytea(vec![0u8, 1, 2]).is_ok());
    }

    #[test]
    fn test_bytea_rejects_other_kinds() {
        let err = bytea(42i64).unwrap_err();
        assert_eq!(err, SqlexError::InvalidLiteralType("Int64".to_string()));
    }
}
