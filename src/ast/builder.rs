//! Span-default node constructors.
//!
//! Synthesized nodes always start with a zeroed span; callers that replace an
//! existing node go through [`crate::rewrite::replace_with_location`] so the
//! original span survives the rewrite.

use crate::ast::{Expr, ImportDecl, ImportSpecifier, ObjectItem, Span, UnaryOp};

pub fn null() -> Expr {
    Expr::Null(Span::default())
}

pub fn num(value: f64) -> Expr {
    Expr::Num(value, Span::default())
}

pub fn bool_lit(value: bool) -> Expr {
    Expr::Bool(value, Span::default())
}

pub fn str_lit(value: impl Into<String>) -> Expr {
    Expr::Str(value.into(), Span::default())
}

pub fn ident(name: impl Into<String>) -> Expr {
    Expr::Ident(name.into(), Span::default())
}

pub fn member(object: Expr, property: impl Into<String>) -> Expr {
    Expr::Member {
        object: Box::new(object),
        property: property.into(),
        span: Span::default(),
    }
}

pub fn call(callee: Expr, arguments: Vec<Expr>) -> Expr {
    Expr::Call {
        callee: Box::new(callee),
        arguments,
        span: Span::default(),
    }
}

pub fn array(elements: Vec<Expr>) -> Expr {
    Expr::Array(elements, Span::default())
}

pub fn object(items: Vec<ObjectItem>) -> Expr {
    Expr::Object(items, Span::default())
}

pub fn property(key: Expr, value: Expr, computed: bool) -> ObjectItem {
    ObjectItem::Property {
        key: Box::new(key),
        value: Box::new(value),
        computed,
        span: Span::default(),
    }
}

/// The canonical side-effect-free `undefined`: `void 0`.
pub fn void_zero() -> Expr {
    Expr::Unary {
        op: UnaryOp::Void,
        argument: Box::new(num(0.0)),
        span: Span::default(),
    }
}

/// `import <local> from "<source>"`
pub fn import_default(local: impl Into<String>, source: impl Into<String>) -> ImportDecl {
    ImportDecl {
        specifiers: vec![ImportSpecifier::Default {
            local: local.into(),
            span: Span::default(),
        }],
        source: source.into(),
        span: Span::default(),
    }
}

/// `import { <imported> as <local> } from "<source>"`
pub fn import_named(
    imported: impl Into<String>,
    local: impl Into<String>,
    source: impl Into<String>,
) -> ImportDecl {
    ImportDecl {
        specifiers: vec![ImportSpecifier::Named {
            imported: imported.into(),
            local: local.into(),
            span: Span::default(),
        }],
        source: source.into(),
        span: Span::default(),
    }
}
