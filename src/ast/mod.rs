//! Core tree types for the transformation toolkit.
//!
//! Every node carries a `Span` for source tracking; rewrites preserve spans so
//! that diagnostics keep pointing at the author's original text even after a
//! call site has been restructured.

use serde::{Deserialize, Serialize};

pub mod builder;
pub mod path;
pub mod value;

pub use path::{NodePath, PathStep};
pub use value::Value;

/// A line/column position in the original source text (1-based in real
/// source, zeroed for synthesized nodes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pos {
    pub line: usize,
    pub column: usize,
}

/// Represents a span in the source code.
///
/// All tree nodes carry a span; nodes synthesized during rewriting start with
/// a default span until [`crate::rewrite::replace_with_location`] stamps the
/// span of the node they replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    /// True for the zeroed span carried by synthesized nodes.
    pub fn is_synthetic(&self) -> bool {
        *self == Span::default()
    }
}

/// The closed set of unary operators the grammar subset needs. `void 0` is
/// the canonical spelling of `undefined`, which has no literal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    Void,
}

/// An expression node in the target grammar subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Null(Span),
    Num(f64, Span),
    Bool(bool, Span),
    Str(String, Span),
    Ident(String, Span),
    Member {
        object: Box<Expr>,
        property: String,
        span: Span,
    },
    Call {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
        span: Span,
    },
    Array(Vec<Expr>, Span),
    Object(Vec<ObjectItem>, Span),
    Unary {
        op: UnaryOp,
        argument: Box<Expr>,
        span: Span,
    },
    Template(TemplateLit),
    TaggedTemplate {
        tag: Box<Expr>,
        quasi: TemplateLit,
        span: Span,
    },
}

/// A member of an object literal: either a keyed property or a spread of
/// another expression's properties.
///
/// There is exactly one spread representation; the grammar-variant ambiguity
/// some hosts carry is resolved here once, at the type level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectItem {
    Property {
        key: Box<Expr>,
        value: Box<Expr>,
        computed: bool,
        span: Span,
    },
    Spread(Expr),
}

impl Expr {
    /// Returns the span of this expression.
    pub fn span(&self) -> Span {
        match self {
            Expr::Null(span) => *span,
            Expr::Num(_, span) => *span,
            Expr::Bool(_, span) => *span,
            Expr::Str(_, span) => *span,
            Expr::Ident(_, span) => *span,
            Expr::Member { span, .. } => *span,
            Expr::Call { span, .. } => *span,
            Expr::Array(_, span) => *span,
            Expr::Object(_, span) => *span,
            Expr::Unary { span, .. } => *span,
            Expr::Template(template) => template.span,
            Expr::TaggedTemplate { span, .. } => *span,
        }
    }

    /// Overwrites the span of this node (children are untouched).
    pub fn set_span(&mut self, new: Span) {
        match self {
            Expr::Null(span) => *span = new,
            Expr::Num(_, span) => *span = new,
            Expr::Bool(_, span) => *span = new,
            Expr::Str(_, span) => *span = new,
            Expr::Ident(_, span) => *span = new,
            Expr::Member { span, .. } => *span = new,
            Expr::Call { span, .. } => *span = new,
            Expr::Array(_, span) => *span = new,
            Expr::Object(_, span) => *span = new,
            Expr::Unary { span, .. } => *span = new,
            Expr::Template(template) => template.span = new,
            Expr::TaggedTemplate { span, .. } => *span = new,
        }
    }

    /// Depth-first pre-order walk over this expression and all nested
    /// expressions, including object-property keys/values and template
    /// interpolations.
    pub fn walk(&self, visit: &mut impl FnMut(&Expr)) {
        visit(self);
        match self {
            Expr::Null(_)
            | Expr::Num(..)
            | Expr::Bool(..)
            | Expr::Str(..)
            | Expr::Ident(..) => {}
            Expr::Member { object, .. } => object.walk(visit),
            Expr::Call {
                callee, arguments, ..
            } => {
                callee.walk(visit);
                for argument in arguments {
                    argument.walk(visit);
                }
            }
            Expr::Array(elements, _) => {
                for element in elements {
                    element.walk(visit);
                }
            }
            Expr::Object(items, _) => {
                for item in items {
                    match item {
                        ObjectItem::Property { key, value, .. } => {
                            key.walk(visit);
                            value.walk(visit);
                        }
                        ObjectItem::Spread(argument) => argument.walk(visit),
                    }
                }
            }
            Expr::Unary { argument, .. } => argument.walk(visit),
            Expr::Template(template) => {
                for expr in &template.exprs {
                    expr.walk(visit);
                }
            }
            Expr::TaggedTemplate { tag, quasi, .. } => {
                tag.walk(visit);
                for expr in &quasi.exprs {
                    expr.walk(visit);
                }
            }
        }
    }
}

/// A template literal: `quasis` are the raw text runs, `exprs` the
/// interpolations between them. Invariant: `quasis.len() == exprs.len() + 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateLit {
    pub quasis: Vec<String>,
    pub exprs: Vec<Expr>,
    pub span: Span,
}

impl TemplateLit {
    /// A template with no interpolations.
    pub fn constant(text: impl Into<String>, span: Span) -> Self {
        Self {
            quasis: vec![text.into()],
            exprs: Vec::new(),
            span,
        }
    }

    /// Statically folds the template to its string value.
    ///
    /// Succeeds only when every interpolation is itself a constant literal
    /// (string, number, or boolean); returns `None` otherwise.
    pub fn evaluate(&self) -> Option<String> {
        let mut out = String::new();
        for (i, quasi) in self.quasis.iter().enumerate() {
            out.push_str(quasi);
            if let Some(expr) = self.exprs.get(i) {
                match expr {
                    Expr::Str(s, _) => out.push_str(s),
                    Expr::Num(n, _) => out.push_str(&n.to_string()),
                    Expr::Bool(b, _) => out.push_str(&b.to_string()),
                    _ => return None,
                }
            }
        }
        Some(out)
    }
}

/// A top-level statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    Import(ImportDecl),
    Expr(Expr),
}

/// A top-level import declaration: `import <specifiers> from "<source>"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportDecl {
    pub specifiers: Vec<ImportSpecifier>,
    pub source: String,
    pub span: Span,
}

/// One binding introduced by an import declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ImportSpecifier {
    /// `import local from "..."`
    Default { local: String, span: Span },
    /// `import { imported as local } from "..."`
    Named {
        imported: String,
        local: String,
        span: Span,
    },
}

/// The root container for a module: an ordered sequence of top-level
/// statements.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Program {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl Program {
    pub fn new(body: Vec<Stmt>) -> Self {
        Self {
            body,
            span: Span::default(),
        }
    }

    /// Inserts a statement at the front of the program body.
    pub fn prepend(&mut self, stmt: Stmt) {
        self.body.insert(0, stmt);
    }

    /// Iterates the program's top-level import declarations, in order.
    /// Nested scopes are never considered.
    pub fn imports(&self) -> impl Iterator<Item = &ImportDecl> {
        self.body.iter().filter_map(|stmt| match stmt {
            Stmt::Import(decl) => Some(decl),
            Stmt::Expr(_) => None,
        })
    }

    /// Depth-first walk over every expression in the program body.
    pub fn walk_exprs(&self, visit: &mut impl FnMut(&Expr)) {
        for stmt in &self.body {
            if let Stmt::Expr(expr) = stmt {
                expr.walk(visit);
            }
        }
    }
}
