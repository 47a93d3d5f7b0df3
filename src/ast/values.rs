use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bound literal value, tagged with its source host type.
///
/// The tag records the width/category the value was constructed from;
/// the canonical SQL type it is cast to lives in the surrounding
/// [`Cast`](crate::ast::Expr::Cast) node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float(f64),
    Decimal(Decimal),
    Str(String),
    /// Binary data (bytea)
    Bytes(Vec<u8>),
    Uuid(Uuid),
    Date(NaiveDate),
    Time(NaiveTime),
    /// Time of day with a fixed UTC offset, stored as seconds east.
    Timez { time: NaiveTime, offset_secs: i32 },
    Timestamp(NaiveDateTime),
    Timestampz(DateTime<FixedOffset>),
}

impl Literal {
    /// Host-type tag name, used in literal-type fault messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Literal::Bool(_) => "Bool",
            Literal::Int8(_) => "Int8",
            Literal::Int16(_) => "Int16",
            Literal::Int32(_) => "Int32",
            Literal::Int64(_) => "Int64",
            Literal::UInt8(_) => "UInt8",
            Literal::UInt16(_) => "UInt16",
            Literal::UInt32(_) => "UInt32",
            Literal::UInt64(_) => "UInt64",
            Literal::Float(_) => "Float",
            Literal::Decimal(_) => "Decimal",
            Literal::Str(_) => "Str",
            Literal::Bytes(_) => "Bytes",
            Literal::Uuid(_) => "Uuid",
            Literal::Date(_) => "Date",
            Literal::Time(_) => "Time",
            Literal::Timez { .. } => "Timez",
            Literal::Timestamp(_) => "Timestamp",
            Literal::Timestampz(_) => "Timestampz",
        }
    }
}

fn write_offset(f: &mut std::fmt::Formatter<'_>, offset_secs: i32) -> std::fmt::Result {
    let sign = if offset_secs < 0 { '-' } else { '+' };
    let abs = offset_secs.unsigned_abs();
    write!(f, "{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
}

/// Inline SQL encoding, used by debug rendering and round-trip tests.
/// Parameterized rendering never goes through here.
impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            Literal::Int8(n) => write!(f, "{}", n),
            Literal::Int16(n) => write!(f, "{}", n),
            Literal::Int32(n) => write!(f, "{}", n),
            Literal::Int64(n) => write!(f, "{}", n),
            Literal::UInt8(n) => write!(f, "{}", n),
            Literal::UInt16(n) => write!(f, "{}", n),
            Literal::UInt32(n) => write!(f, "{}", n),
            Literal::UInt64(n) => write!(f, "{}", n),
            Literal::Float(n) => write!(f, "{}", n),
            Literal::Decimal(d) => write!(f, "{}", d),
            Literal::Str(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Literal::Bytes(bytes) => {
                write!(f, "'\\x")?;
                for byte in bytes {
                    write!(f, "{:02x}", byte)?;
                }
                write!(f, "'")
            }
            Literal::Uuid(u) => write!(f, "'{}'", u),
            Literal::Date(d) => write!(f, "'{}'", d.format("%Y-%m-%d")),
            Literal::Time(t) => write!(f, "'{}'", t.format("%H:%M:%S%.f")),
            Literal::Timez { time, offset_secs } => {
                write!(f, "'{}", time.format("%H:%M:%S%.f"))?;
                write_offset(f, *offset_secs)?;
                write!(f, "'")
            }
            Literal::Timestamp(ts) => write!(f, "'{}'", ts.format("%Y-%m-%d %H:%M:%S%.f")),
            Literal::Timestampz(ts) => {
                write!(f, "'{}'", ts.format("%Y-%m-%d %H:%M:%S%.f%:z"))
            }
        }
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Bool(b)
    }
}

impl From<i8> for Literal {
    fn from(n: i8) -> Self {
        Literal::Int8(n)
    }
}

impl From<i16> for Literal {
    fn from(n: i16) -> Self {
        Literal::Int16(n)
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Literal::Int32(n)
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Int64(n)
    }
}

impl From<u8> for Literal {
    fn from(n: u8) -> Self {
        Literal::UInt8(n)
    }
}

impl From<u16> for Literal {
    fn from(n: u16) -> Self {
        Literal::UInt16(n)
    }
}

impl From<u32> for Literal {
    fn from(n: u32) -> Self {
        Literal::UInt32(n)
    }
}

impl From<u64> for Literal {
    fn from(n: u64) -> Self {
        Literal::UInt64(n)
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Float(n)
    }
}

impl From<Decimal> for Literal {
    fn from(d: Decimal) -> Self {
        Literal::Decimal(d)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::Str(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::Str(s)
    }
}

impl From<Vec<u8>> for Literal {
    fn from(bytes: Vec<u8>) -> Self {
        Literal::Bytes(bytes)
    }
}

impl From<&[u8]> for Literal {
    fn from(bytes: &[u8]) -> Self {
        Literal::Bytes(bytes.to_vec())
    }
}

impl From<Uuid> for Literal {
    fn from(u: Uuid) -> Self {
        Literal::Uuid(u)
    }
}

impl From<NaiveDate> for Literal {
    fn from(d: NaiveDate) -> Self {
        Literal::Date(d)
    }
}

impl From<NaiveTime> for Literal {
    fn from(t: NaiveTime) -> Self {
        Literal::Time(t)
    }
}

impl From<NaiveDateTime> for Literal {
    fn from(ts: NaiveDateTime) -> Self {
        Literal::Timestamp(ts)
    }
}

impl From<DateTime<FixedOffset>> for Literal {
    fn from(ts: DateTime<FixedOffset>) -> Self {
        Literal::Timestampz(ts)
    }
}

impl From<DateTime<Utc>> for Literal {
    fn from(ts: DateTime<Utc>) -> Self {
        Literal::Timestampz(ts.fixed_offset())
    }
}
