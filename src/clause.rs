//! Clause-role adapters.
//!
//! The same expression node can sit in four syntactically distinct
//! positions: a bare value context, a projection item (with optional
//! alias), a GROUP BY term, or an ORDER BY term with a direction. These
//! adapters are thin delegations; no node knows which role it is
//! rendered in. Projection, GROUP BY and ORDER BY positions are the sole
//! content of their slot, so all three render with wrapping suppressed.

use crate::ast::{Expr, Expression, SortOrder};
use crate::error::SqlexResult;
use crate::render::{RenderContext, RenderOptions, ToSql};

/// A SELECT-list item, optionally aliased.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    expr: Expr,
}

impl Projection {
    pub fn new(expr: Expr) -> Self {
        Self { expr }
    }

    /// Present any typed expression as a projection item.
    pub fn of(expr: impl Expression) -> Self {
        Self::new(expr.into_expr())
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }
}

impl ToSql for Projection {
    fn render_into(&self, ctx: &mut RenderContext<'_>) -> SqlexResult<()> {
        ctx.render_expr(&self.expr, RenderOptions::NO_WRAP)
    }
}

/// A GROUP BY term.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupByTerm {
    expr: Expr,
}

impl GroupByTerm {
    pub fn new(expr: Expr) -> Self {
        Self { expr }
    }

    pub fn of(expr: impl Expression) -> Self {
        Self::new(expr.into_expr())
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }
}

impl ToSql for GroupByTerm {
    fn render_into(&self, ctx: &mut RenderContext<'_>) -> SqlexResult<()> {
        ctx.render_expr(&self.expr, RenderOptions::NO_WRAP)
    }
}

/// An ORDER BY term: expression plus direction.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByTerm {
    expr: Expr,
    order: SortOrder,
}

impl OrderByTerm {
    pub fn new(expr: Expr, order: SortOrder) -> Self {
        Self { expr, order }
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Keep the direction, sort NULLs first.
    pub fn nulls_first(self) -> Self {
        let order = match self.order {
            SortOrder::Asc | SortOrder::AscNullsFirst | SortOrder::AscNullsLast => {
                SortOrder::AscNullsFirst
            }
            SortOrder::Desc | SortOrder::DescNullsFirst | SortOrder::DescNullsLast => {
                SortOrder::DescNullsFirst
            }
        };
        Self { order, ..self }
    }

    /// Keep the direction, sort NULLs last.
    pub fn nulls_last(self) -> Self {
        let order = match self.order {
            SortOrder::Asc | SortOrder::AscNullsFirst | SortOrder::AscNullsLast => {
                SortOrder::AscNullsLast
            }
            SortOrder::Desc | SortOrder::DescNullsFirst | SortOrder::DescNullsLast => {
                SortOrder::DescNullsLast
            }
        };
        Self { order, ..self }
    }
}

impl ToSql for OrderByTerm {
    fn render_into(&self, ctx: &mut RenderContext<'_>) -> SqlexResult<()> {
        ctx.render_expr(&self.expr, RenderOptions::NO_WRAP)?;
        ctx.write(" ");
        ctx.write(self.order.sql_suffix());
        Ok(())
    }
}
