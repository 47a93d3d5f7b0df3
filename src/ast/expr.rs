use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ast::{Literal, LogicalOp, Operator, SqlType};

/// An SQL expression node.
///
/// Nodes are immutable once built; children are `Arc`-shared so one node
/// may sit under multiple parents or multiple statements, and concurrent
/// render calls may walk the same tree. A node's value category is fixed
/// at construction by the typed wrapper that produced it.
///
/// The factory surface always builds complete nodes. Operand slots are
/// still `Option` because completeness is checked when a tree is
/// rendered, not when it is assembled; a hand-built node with a missing
/// operand constructs fine and fails with
/// [`MissingOperand`](crate::error::SqlexError::MissingOperand) at render
/// time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// A bound literal value.
    Literal(Literal),
    /// A column reference, quoted per dialect. Dotted paths are quoted
    /// per segment.
    Column(String),
    /// A raw SQL fragment, rendered verbatim.
    Raw(String),
    /// A prefix operator (NOT x).
    Prefix {
        op: Operator,
        operand: Option<Arc<Expr>>,
    },
    /// A postfix operator (x IS NULL).
    Postfix {
        operand: Option<Arc<Expr>>,
        op: Operator,
    },
    /// A binary operator, with an optional third operand for ternary
    /// forms (BETWEEN low AND high).
    Binary {
        lhs: Option<Arc<Expr>>,
        rhs: Option<Arc<Expr>>,
        op: Operator,
        extra: Option<Arc<Expr>>,
    },
    /// An n-ary AND/OR over boolean operands.
    Conjunction {
        op: LogicalOp,
        operands: Vec<Arc<Expr>>,
    },
    /// An explicit cast to a canonical SQL type.
    Cast { expr: Arc<Expr>, target: SqlType },
    /// A parenthesized comma list, e.g. the right-hand side of IN.
    Row(Vec<Arc<Expr>>),
    /// An aliased expression (expr AS name); meaningful in projections.
    Alias { expr: Arc<Expr>, name: String },
}

impl Expr {
    pub fn column(name: impl Into<String>) -> Self {
        Expr::Column(name.into())
    }

    pub fn raw(sql: impl Into<String>) -> Self {
        Expr::Raw(sql.into())
    }

    pub fn literal(value: impl Into<Literal>) -> Self {
        Expr::Literal(value.into())
    }

    pub fn prefix(op: Operator, operand: Expr) -> Self {
        Expr::Prefix {
            op,
            operand: Some(Arc::new(operand)),
        }
    }

    pub fn postfix(operand: Expr, op: Operator) -> Self {
        Expr::Postfix {
            operand: Some(Arc::new(operand)),
            op,
        }
    }

    pub fn binary(lhs: Expr, op: Operator, rhs: Expr) -> Self {
        Expr::Binary {
            lhs: Some(Arc::new(lhs)),
            rhs: Some(Arc::new(rhs)),
            op,
            extra: None,
        }
    }

    pub fn ternary(lhs: Expr, op: Operator, rhs: Expr, extra: Expr) -> Self {
        Expr::Binary {
            lhs: Some(Arc::new(lhs)),
            rhs: Some(Arc::new(rhs)),
            op,
            extra: Some(Arc::new(extra)),
        }
    }

    pub fn conjunction(op: LogicalOp, operands: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Conjunction {
            op,
            operands: operands.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn cast(expr: Expr, target: SqlType) -> Self {
        Expr::Cast {
            expr: Arc::new(expr),
            target,
        }
    }

    pub fn row(elements: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Row(elements.into_iter().map(Arc::new).collect())
    }

    pub fn alias(expr: Expr, name: impl Into<String>) -> Self {
        Expr::Alias {
            expr: Arc::new(expr),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_subtree() {
        let shared = Expr::column("price");
        let a = Expr::binary(shared.clone(), Operator::Gt, Expr::literal(10i64));
        let b = Expr::binary(shared.clone(), Operator::Lt, Expr::literal(99i64));
        // Same node value under two parents; both trees stay independent.
        assert_ne!(a, b);
        match (&a, &b) {
            (Expr::Binary { lhs: Some(l1), .. }, Expr::Binary { lhs: Some(l2), .. }) => {
                assert_eq!(l1, l2);
            }
            _ => panic!("expected binary nodes"),
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let expr = Expr::binary(
            Expr::column("age"),
            Operator::GtEq,
            Expr::cast(Expr::literal(18i8), SqlType::SmallInt),
        );
        let json = serde_json::to_string(&expr).unwrap();
        let back: Expr = serde_json::from_str(&json).unwrap();
        assert_eq!(expr, back);
    }
}
