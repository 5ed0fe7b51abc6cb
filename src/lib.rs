//! Graft: a compile-time source-tree transformation toolkit for macro
//! expansion hosts.
//!
//! The toolkit does two related jobs on one shared, mutable tree:
//!
//! - [`literal::astify`] compiles a runtime-shaped [`ast::Value`] into an
//!   equivalent literal expression tree (with [`literal::assignify`] folding
//!   object spreads into `Object.assign` merge calls), and
//! - [`rewrite::parse_tte`] detects tagged-template call sites and rewrites
//!   them into ordinary calls carrying a placeholder argument, preserving
//!   source locations for diagnostics.
//!
//! [`imports`] manages the top-level import declarations the rewrite may
//! require. Everything about how the host discovers call sites, parses whole
//! modules, or emits text again lives with the host; the only inbound seam is
//! [`syntax::ExpressionParser`].

pub use crate::errors::{ExprParseError, TransformError, TransformResult};

pub mod ast;
pub mod errors;
pub mod imports;
pub mod literal;
pub mod rewrite;
pub mod syntax;
