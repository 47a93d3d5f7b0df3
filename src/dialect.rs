//! Target-engine dialects.
//!
//! A [`Dialect`] is an immutable description of one SQL engine: how it
//! numbers placeholders, how it quotes identifiers, and which operators
//! it renders differently from the generic path. It is built once per
//! backend and may be shared (behind an `Arc` or a plain reference)
//! across any number of concurrent render calls.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ast::{Expr, Operator};
use crate::error::{SqlexError, SqlexResult};
use crate::render::{RenderContext, RenderOptions};

/// Placeholder convention for bound parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceholderStyle {
    /// `$1`, `$2`, ... (postgres)
    Numbered,
    /// `?` (mysql, sqlite)
    Anonymous,
}

/// Identifier quoting convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteStyle {
    /// `"name"` (postgres, sqlite)
    Double,
    /// `` `name` `` (mysql)
    Backtick,
}

/// Operands handed to an operator override, cloned out of the node so
/// the returned closure owns them.
#[derive(Debug, Clone, Default)]
pub struct Operands {
    pub lhs: Option<Expr>,
    pub rhs: Option<Expr>,
    pub extra: Option<Expr>,
}

/// The custom render closure an override produces for one node.
pub type SerializeFn = Box<dyn FnOnce(&mut RenderContext<'_>, RenderOptions) -> SqlexResult<()>>;

/// A dialect-supplied alternate rendering strategy for one operator
/// identity: given the operands, produce the render closure.
pub type OperatorOverride = Arc<dyn Fn(Operands) -> SerializeFn + Send + Sync>;

/// One target SQL engine's rendering quirks.
pub struct Dialect {
    name: &'static str,
    placeholder: PlaceholderStyle,
    quote: QuoteStyle,
    overrides: HashMap<Operator, OperatorOverride>,
}

impl std::fmt::Debug for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dialect")
            .field("name", &self.name)
            .field("placeholder", &self.placeholder)
            .field("quote", &self.quote)
            .field("overrides", &self.overrides.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Dialect {
    pub fn new(name: &'static str, placeholder: PlaceholderStyle, quote: QuoteStyle) -> Self {
        Self {
            name,
            placeholder,
            quote,
            overrides: HashMap::new(),
        }
    }

    /// PostgreSQL: numbered placeholders, no operator overrides.
    pub fn postgres() -> Self {
        Self::new("postgres", PlaceholderStyle::Numbered, QuoteStyle::Double)
    }

    /// MySQL: anonymous placeholders, backtick quoting, CONCAT-style
    /// string concatenation, `<=>` for distinctness, remapped cast
    /// keywords.
    pub fn mysql() -> Self {
        Self::new("mysql", PlaceholderStyle::Anonymous, QuoteStyle::Backtick)
            .with_override(Operator::Concat, |ops| {
                Box::new(move |ctx, _opts| {
                    ctx.write("CONCAT(");
                    ctx.render_expr(require(&ops.lhs, Operator::Concat)?, RenderOptions::default())?;
                    ctx.write(", ");
                    ctx.render_expr(require(&ops.rhs, Operator::Concat)?, RenderOptions::default())?;
                    ctx.write(")");
                    Ok(())
                })
            })
            .with_override(Operator::IsDistinctFrom, |ops| {
                Box::new(move |ctx, _opts| {
                    ctx.write("NOT(");
                    ctx.render_expr(
                        require(&ops.lhs, Operator::IsDistinctFrom)?,
                        RenderOptions::default(),
                    )?;
                    ctx.write(" <=> ");
                    ctx.render_expr(
                        require(&ops.rhs, Operator::IsDistinctFrom)?,
                        RenderOptions::default(),
                    )?;
                    ctx.write(")");
                    Ok(())
                })
            })
            .with_override(Operator::IsNotDistinctFrom, |ops| {
                Box::new(move |ctx, _opts| {
                    ctx.render_expr(
                        require(&ops.lhs, Operator::IsNotDistinctFrom)?,
                        RenderOptions::default(),
                    )?;
                    ctx.write(" <=> ");
                    ctx.render_expr(
                        require(&ops.rhs, Operator::IsNotDistinctFrom)?,
                        RenderOptions::default(),
                    )?;
                    Ok(())
                })
            })
            .with_override(Operator::Cast, |ops| {
                Box::new(move |ctx, _opts| {
                    ctx.write("CAST(");
                    ctx.render_expr(require(&ops.lhs, Operator::Cast)?, RenderOptions::NO_WRAP)?;
                    ctx.write(" AS ");
                    match &ops.rhs {
                        Some(Expr::Raw(keyword)) => ctx.write(mysql_cast_keyword(keyword)),
                        Some(other) => ctx.render_expr(other, RenderOptions::NO_WRAP)?,
                        None => return Err(SqlexError::MissingOperand(Operator::Cast)),
                    }
                    ctx.write(")");
                    Ok(())
                })
            })
    }

    /// SQLite: anonymous placeholders, `IS`/`IS NOT` for distinctness.
    pub fn sqlite() -> Self {
        Self::new("sqlite", PlaceholderStyle::Anonymous, QuoteStyle::Double)
            .with_override(Operator::IsDistinctFrom, |ops| {
                Box::new(move |ctx, _opts| {
                    ctx.render_expr(
                        require(&ops.lhs, Operator::IsDistinctFrom)?,
                        RenderOptions::default(),
                    )?;
                    ctx.write(" IS NOT ");
                    ctx.render_expr(
                        require(&ops.rhs, Operator::IsDistinctFrom)?,
                        RenderOptions::default(),
                    )?;
                    Ok(())
                })
            })
            .with_override(Operator::IsNotDistinctFrom, |ops| {
                Box::new(move |ctx, _opts| {
                    ctx.render_expr(
                        require(&ops.lhs, Operator::IsNotDistinctFrom)?,
                        RenderOptions::default(),
                    )?;
                    ctx.write(" IS ");
                    ctx.render_expr(
                        require(&ops.rhs, Operator::IsNotDistinctFrom)?,
                        RenderOptions::default(),
                    )?;
                    Ok(())
                })
            })
    }

    /// Register an override for one operator identity, replacing any
    /// previous registration for it.
    pub fn with_override(
        mut self,
        op: Operator,
        f: impl Fn(Operands) -> SerializeFn + Send + Sync + 'static,
    ) -> Self {
        self.overrides.insert(op, Arc::new(f));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Look up the override for an operator identity, if any. Absence is
    /// the common case and falls through to generic rendering.
    pub fn operator_override(&self, op: Operator) -> Option<&OperatorOverride> {
        self.overrides.get(&op)
    }

    /// The placeholder for a 1-based parameter index.
    pub fn placeholder(&self, index: usize) -> String {
        match self.placeholder {
            PlaceholderStyle::Numbered => format!("${}", index),
            PlaceholderStyle::Anonymous => "?".to_string(),
        }
    }

    /// Quote an identifier; dotted paths are quoted per segment.
    pub fn quote_identifier(&self, name: &str) -> String {
        name.split('.')
            .map(|part| self.quote_part(part))
            .collect::<Vec<_>>()
            .join(".")
    }

    fn quote_part(&self, part: &str) -> String {
        match self.quote {
            QuoteStyle::Double => format!("\"{}\"", part.replace('"', "\"\"")),
            QuoteStyle::Backtick => format!("`{}`", part.replace('`', "``")),
        }
    }
}

fn require(slot: &Option<Expr>, op: Operator) -> SqlexResult<&Expr> {
    slot.as_ref().ok_or(SqlexError::MissingOperand(op))
}

fn mysql_cast_keyword(keyword: &str) -> &str {
    match keyword {
        "SMALLINT" | "INTEGER" | "BIGINT" => "SIGNED",
        "TEXT" => "CHAR",
        "BYTEA" => "BINARY",
        "TIMESTAMP" | "TIMESTAMP WITH TIME ZONE" => "DATETIME",
        "DOUBLE PRECISION" => "DOUBLE",
        other => other,
    }
}
