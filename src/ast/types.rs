use serde::{Deserialize, Serialize};

/// Canonical SQL types targeted by the literal constructors' explicit
/// casts.
///
/// Prepared-statement binding is ambiguous about narrow numeric literal
/// types across backends, so every literal is cast to one of these at
/// construction instead of relying on inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SqlType {
    Boolean,
    SmallInt,
    Integer,
    BigInt,
    DoublePrecision,
    Numeric,
    Text,
    Bytea,
    Uuid,
    Date,
    Time,
    TimeWithZone,
    Timestamp,
    TimestampWithZone,
}

impl SqlType {
    /// The type keyword as it appears inside `CAST(x AS ...)`.
    pub fn keyword(&self) -> &'static str {
        match self {
            SqlType::Boolean => "BOOLEAN",
            SqlType::SmallInt => "SMALLINT",
            SqlType::Integer => "INTEGER",
            SqlType::BigInt => "BIGINT",
            SqlType::DoublePrecision => "DOUBLE PRECISION",
            SqlType::Numeric => "NUMERIC",
            SqlType::Text => "TEXT",
            SqlType::Bytea => "BYTEA",
            SqlType::Uuid => "UUID",
            SqlType::Date => "DATE",
            SqlType::Time => "TIME",
            SqlType::TimeWithZone => "TIME WITH TIME ZONE",
            SqlType::Timestamp => "TIMESTAMP",
            SqlType::TimestampWithZone => "TIMESTAMP WITH TIME ZONE",
        }
    }
}

impl std::fmt::Display for SqlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
