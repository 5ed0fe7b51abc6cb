//! Shared test harness.
//!
//! The toolkit treats expression parsing as an external capability behind
//! [`ExpressionParser`]; tests drive it with a deliberately small parser that
//! understands numeric literals and dotted identifier chains (`rest`,
//! `props.color`), which is all the escape-marker fixtures use.

use graft::ast::{builder, Expr};
use graft::errors::ExprParseError;
use graft::syntax::ExpressionParser;

pub struct PathParser;

impl ExpressionParser for PathParser {
    fn parse_expression(&self, text: &str) -> Result<Expr, ExprParseError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ExprParseError::new(text, "empty expression"));
        }
        if let Ok(n) = text.parse::<f64>() {
            return Ok(builder::num(n));
        }

        let mut parts = text.split('.');
        let head = parts.next().unwrap_or_default();
        let mut expr = builder::ident(validate_ident(text, head)?);
        for part in parts {
            expr = builder::member(expr, validate_ident(text, part)?);
        }
        Ok(expr)
    }
}

fn validate_ident<'a>(text: &str, part: &'a str) -> Result<&'a str, ExprParseError> {
    let mut chars = part.chars();
    let starts_ok = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$');
    if starts_ok && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
        Ok(part)
    } else {
        Err(ExprParseError::new(
            text,
            format!("`{part}` is not an identifier"),
        ))
    }
}
