use serde::{Deserialize, Serialize};

/// Closed set of operator identities.
///
/// Dialect override lookup is keyed on this enum, never on the SQL token
/// text, so a dialect table can be checked exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Concat,
    Add,
    Sub,
    Mul,
    Div,
    /// Modulo (%)
    Rem,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Like,
    NotLike,
    Regexp,
    In,
    NotIn,
    Between,
    NotBetween,
    IsDistinctFrom,
    IsNotDistinctFrom,
    IsNull,
    IsNotNull,
    Not,
    Cast,
}

impl Operator {
    /// The literal SQL token for this operator.
    ///
    /// This is the only place an operator identity turns into text; the
    /// renderer supplies surrounding whitespace.
    pub fn sql_token(&self) -> &'static str {
        match self {
            Operator::Concat => "||",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Rem => "%",
            Operator::Eq => "=",
            Operator::NotEq => "!=",
            Operator::Lt => "<",
            Operator::LtEq => "<=",
            Operator::Gt => ">",
            Operator::GtEq => ">=",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
            Operator::Regexp => "~",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
            Operator::Between => "BETWEEN",
            Operator::NotBetween => "NOT BETWEEN",
            Operator::IsDistinctFrom => "IS DISTINCT FROM",
            Operator::IsNotDistinctFrom => "IS NOT DISTINCT FROM",
            Operator::IsNull => "IS NULL",
            Operator::IsNotNull => "IS NOT NULL",
            Operator::Not => "NOT",
            Operator::Cast => "CAST",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sql_token())
    }
}

/// Logical connective for n-ary conjunctions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogicalOp {
    #[default]
    And,
    Or,
}

impl LogicalOp {
    pub fn sql_token(&self) -> &'static str {
        match self {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
        }
    }
}

/// ORDER BY direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    Desc,
    AscNullsFirst,
    AscNullsLast,
    DescNullsFirst,
    DescNullsLast,
}

impl SortOrder {
    pub fn sql_suffix(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
            SortOrder::AscNullsFirst => "ASC NULLS FIRST",
            SortOrder::AscNullsLast => "ASC NULLS LAST",
            SortOrder::DescNullsFirst => "DESC NULLS FIRST",
            SortOrder::DescNullsLast => "DESC NULLS LAST",
        }
    }
}

/// The statement a fragment is being rendered for.
///
/// Carried by the render context; core nodes never branch on it, but
/// dialect overrides may.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StatementKind {
    #[default]
    Select,
    Insert,
    Update,
    Delete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_tokens() {
        assert_eq!(Operator::Eq.sql_token(), "=");
        assert_eq!(Operator::IsDistinctFrom.sql_token(), "IS DISTINCT FROM");
        assert_eq!(Operator::Cast.to_string(), "CAST");
    }

    #[test]
    fn test_logical_op_tokens() {
        assert_eq!(LogicalOp::And.sql_token(), "AND");
        assert_eq!(LogicalOp::Or.sql_token(), "OR");
    }
}
