//! Error types for the transformation toolkit.
//!
//! Only genuine failures are errors: an unsupported tagged-template tag shape
//! is a non-match (`Ok(None)`), and duplicate imports are a documented caller
//! obligation, never raised. Errors are recovered by the host at call-site
//! granularity; one malformed call site must not block the others.

use miette::Diagnostic;
use thiserror::Error;

use crate::ast::Span;

/// Failure to parse a text snippet as a standalone expression, reported by
/// the host's [`crate::syntax::ExpressionParser`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("failed to parse expression `{text}`: {message}")]
#[diagnostic(code(graft::syntax::expr_parse))]
pub struct ExprParseError {
    /// The offending snippet, verbatim.
    pub text: String,
    pub message: String,
}

impl ExprParseError {
    pub fn new(text: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            message: message.into(),
        }
    }
}

/// A failed tree transform. Aborts the current call site only.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum TransformError {
    /// The tagged template's value could not be determined statically.
    #[error("cannot statically determine template value")]
    #[diagnostic(
        code(graft::rewrite::non_constant_template),
        help("every interpolation in the template must be a compile-time constant")
    )]
    NonConstantTemplate { span: Span },

    /// The text behind a `spread:`/`computed:` escape marker is not a valid
    /// expression. No partial literal is emitted.
    #[error("malformed escape expression `{}`", .source.text)]
    #[diagnostic(
        code(graft::literal::malformed_escape),
        help("the text after a `spread:`/`computed:` marker must parse as a standalone expression")
    )]
    MalformedEscape {
        #[source]
        source: ExprParseError,
    },
}

pub type TransformResult<T> = Result<T, TransformError>;
