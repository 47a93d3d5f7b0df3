//! Error types for sqlex.

use crate::ast::Operator;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SqlexError {
    /// A binary/prefix/postfix node reached render time with an absent
    /// required operand.
    #[error("missing operand for operator '{0}'")]
    MissingOperand(Operator),

    /// A conjunction node has zero operands at render time.
    #[error("empty conjunction")]
    EmptyConjunction,

    /// A literal constructor received a value outside its accepted
    /// host-type set.
    #[error("invalid literal type: {0}")]
    InvalidLiteralType(String),

    /// An alias wrapper carries an empty name.
    #[error("empty alias name")]
    EmptyAlias,
}

/// Result type alias for sqlex operations.
pub type SqlexResult<T> = Result<T, SqlexError>;
