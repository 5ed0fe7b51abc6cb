//! Seam to the host's expression grammar.
//!
//! Parsing arbitrary source text is the host's capability; the toolkit only
//! needs to turn small escape-marker snippets back into tree fragments. The
//! host hands in whatever real parser it drives the rest of the pipeline
//! with.

use crate::ast::Expr;
use crate::errors::ExprParseError;

/// Parses a text snippet into an expression-tree fragment.
///
/// Implementations must fail (rather than guess) when `text` is not a valid
/// standalone expression; the failure aborts the transform for the current
/// call site.
pub trait ExpressionParser {
    fn parse_expression(&self, text: &str) -> Result<Expr, ExprParseError>;
}
