//! Tree-to-SQL rendering.
//!
//! One [`RenderContext`] lives for exactly one render call: it owns the
//! output buffer and the ordered parameter list, borrows the dialect,
//! and is threaded by mutable reference through the recursive descent.
//! Rendering is a bounded synchronous walk, linear in tree size, with no
//! suspension points; it either completes with well-formed output or
//! aborts the whole call with the first structural fault.

use crate::ast::{Expr, Literal, Operator, StatementKind};
use crate::dialect::{Dialect, Operands};
use crate::error::{SqlexError, SqlexResult};

#[cfg(test)]
mod tests;

/// Per-call rendering modifiers, passed by value down the descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Suppress the wrapping parentheses a binary node would normally
    /// emit. Used when the expression is already the sole content of its
    /// syntactic slot (projection item, GROUP BY term, ORDER BY term).
    pub no_wrap: bool,
}

impl RenderOptions {
    pub const NO_WRAP: RenderOptions = RenderOptions { no_wrap: true };
}

/// Finished output of a render call: SQL text with placeholders, plus
/// the bound values in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub sql: String,
    pub params: Vec<Literal>,
}

/// Mutable per-invocation render state. Never shared across renders;
/// discarded after use.
pub struct RenderContext<'a> {
    sql: String,
    dialect: &'a Dialect,
    statement: StatementKind,
    params: Vec<Literal>,
    inline_literals: bool,
}

impl<'a> RenderContext<'a> {
    pub fn new(dialect: &'a Dialect, statement: StatementKind) -> Self {
        Self {
            sql: String::new(),
            dialect,
            statement,
            params: Vec::new(),
            inline_literals: false,
        }
    }

    /// A context that writes literal values into the SQL text instead of
    /// binding placeholders. Debug/logging use only.
    pub fn new_inline(dialect: &'a Dialect, statement: StatementKind) -> Self {
        Self {
            inline_literals: true,
            ..Self::new(dialect, statement)
        }
    }

    pub fn dialect(&self) -> &'a Dialect {
        self.dialect
    }

    pub fn statement(&self) -> StatementKind {
        self.statement
    }

    /// Append raw text to the output buffer.
    pub fn write(&mut self, text: &str) {
        self.sql.push_str(text);
    }

    /// Bind a literal value: emits the dialect placeholder for the next
    /// 1-based index and records the value, or writes the inline SQL
    /// encoding in inline mode.
    pub fn push_param(&mut self, value: Literal) {
        if self.inline_literals {
            self.sql.push_str(&value.to_string());
        } else {
            self.params.push(value);
            let placeholder = self.dialect.placeholder(self.params.len());
            self.sql.push_str(&placeholder);
        }
    }

    pub fn finish(self) -> Rendered {
        Rendered {
            sql: self.sql,
            params: self.params,
        }
    }

    /// Render one node into the buffer.
    ///
    /// Operand completeness is checked here, not at construction; an
    /// incomplete node aborts the call with
    /// [`MissingOperand`](SqlexError::MissingOperand).
    pub fn render_expr(&mut self, expr: &Expr, opts: RenderOptions) -> SqlexResult<()> {
        match expr {
            Expr::Literal(value) => {
                self.push_param(value.clone());
                Ok(())
            }
            Expr::Column(name) => {
                let quoted = self.dialect.quote_identifier(name);
                self.write(&quoted);
                Ok(())
            }
            Expr::Raw(sql) => {
                self.write(sql);
                Ok(())
            }
            Expr::Prefix { op, operand } => {
                let operand = operand.as_deref().ok_or(SqlexError::MissingOperand(*op))?;
                self.write("(");
                self.write(op.sql_token());
                self.write(" ");
                self.render_expr(operand, RenderOptions::default())?;
                self.write(")");
                Ok(())
            }
            Expr::Postfix { operand, op } => {
                let operand = operand.as_deref().ok_or(SqlexError::MissingOperand(*op))?;
                self.render_expr(operand, RenderOptions::default())?;
                self.write(" ");
                self.write(op.sql_token());
                Ok(())
            }
            Expr::Binary {
                lhs,
                rhs,
                op,
                extra,
            } => {
                let lhs = lhs.as_deref().ok_or(SqlexError::MissingOperand(*op))?;
                let rhs = rhs.as_deref().ok_or(SqlexError::MissingOperand(*op))?;
                let wrap = !opts.no_wrap;
                if wrap {
                    self.write("(");
                }
                let dialect = self.dialect;
                if let Some(strategy) = dialect.operator_override(*op) {
                    let serialize = strategy(Operands {
                        lhs: Some(lhs.clone()),
                        rhs: Some(rhs.clone()),
                        extra: extra.as_deref().cloned(),
                    });
                    serialize(self, opts)?;
                } else {
                    self.render_expr(lhs, RenderOptions::default())?;
                    self.write(" ");
                    self.write(op.sql_token());
                    self.write(" ");
                    self.render_expr(rhs, RenderOptions::default())?;
                    if let Some(extra) = extra.as_deref() {
                        // Ternary tail (BETWEEN low AND high).
                        self.write(" AND ");
                        self.render_expr(extra, RenderOptions::default())?;
                    }
                }
                if wrap {
                    self.write(")");
                }
                Ok(())
            }
            Expr::Conjunction { op, operands } => match operands.as_slice() {
                [] => Err(SqlexError::EmptyConjunction),
                [single] => self.render_expr(single, RenderOptions::NO_WRAP),
                many => {
                    self.write("(");
                    for (i, operand) in many.iter().enumerate() {
                        if i > 0 {
                            self.write(" ");
                            self.write(op.sql_token());
                            self.write(" ");
                        }
                        self.render_expr(operand, RenderOptions::default())?;
                    }
                    self.write(")");
                    Ok(())
                }
            },
            Expr::Cast { expr, target } => {
                let dialect = self.dialect;
                if let Some(strategy) = dialect.operator_override(Operator::Cast) {
                    let serialize = strategy(Operands {
                        lhs: Some((**expr).clone()),
                        rhs: Some(Expr::Raw(target.keyword().to_string())),
                        extra: None,
                    });
                    serialize(self, opts)?;
                } else {
                    self.write("CAST(");
                    self.render_expr(expr, RenderOptions::NO_WRAP)?;
                    self.write(" AS ");
                    self.write(target.keyword());
                    self.write(")");
                }
                Ok(())
            }
            Expr::Row(elements) => {
                self.write("(");
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.render_expr(element, RenderOptions::default())?;
                }
                self.write(")");
                Ok(())
            }
            Expr::Alias { expr, name } => {
                if name.is_empty() {
                    return Err(SqlexError::EmptyAlias);
                }
                self.render_expr(expr, RenderOptions::NO_WRAP)?;
                self.write(" AS ");
                let quoted = self.dialect.quote_identifier(name);
                self.write(&quoted);
                Ok(())
            }
        }
    }
}

/// Entry point for turning a tree into SQL text plus bound parameters.
pub trait ToSql {
    /// Write this value into an already-open render context.
    fn render_into(&self, ctx: &mut RenderContext<'_>) -> SqlexResult<()>;

    /// Render for a SELECT statement position.
    fn to_sql(&self, dialect: &Dialect) -> SqlexResult<Rendered> {
        self.to_sql_for(dialect, StatementKind::Select)
    }

    /// Render for an explicit statement kind.
    fn to_sql_for(&self, dialect: &Dialect, statement: StatementKind) -> SqlexResult<Rendered> {
        let mut ctx = RenderContext::new(dialect, statement);
        self.render_into(&mut ctx)?;
        Ok(ctx.finish())
    }

    /// Render with literals inlined instead of bound. Debug/logging use
    /// only; the output is not meant to be executed.
    fn to_debug_sql(&self, dialect: &Dialect) -> SqlexResult<String> {
        let mut ctx = RenderContext::new_inline(dialect, StatementKind::Select);
        self.render_into(&mut ctx)?;
        Ok(ctx.finish().sql)
    }
}

impl ToSql for Expr {
    fn render_into(&self, ctx: &mut RenderContext<'_>) -> SqlexResult<()> {
        ctx.render_expr(self, RenderOptions::default())
    }
}

impl<T: crate::ast::Expression> ToSql for T {
    fn render_into(&self, ctx: &mut RenderContext<'_>) -> SqlexResult<()> {
        ctx.render_expr(self.expr(), RenderOptions::default())
    }
}
