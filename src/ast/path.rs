//! Positions into an expression tree.
//!
//! A [`NodePath`] is a recorded sequence of child steps that can be resolved
//! against a mutable root to reach a specific node. The tagged-template
//! rewriter returns one so downstream stages have a uniform placeholder
//! position to substitute, independent of the original call-site shape.

use serde::{Deserialize, Serialize};

use crate::ast::Expr;

/// One navigation step from a node to a named child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathStep {
    /// The callee of a call expression.
    Callee,
    /// The n-th argument of a call expression.
    Argument(usize),
    /// The tag of a tagged-template expression.
    Tag,
    /// The object of a member expression.
    Object,
    /// The n-th element of an array literal.
    Element(usize),
}

/// A path from some root expression down to a descendant node.
///
/// The empty path refers to the root itself.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodePath(Vec<PathStep>);

impl NodePath {
    /// The path that refers to the root node itself.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn child(mut self, step: PathStep) -> Self {
        self.0.push(step);
        self
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolves the path against `root`, returning the referenced node, or
    /// `None` when a step does not match the shape of the node it is applied
    /// to.
    pub fn resolve<'a>(&self, root: &'a Expr) -> Option<&'a Expr> {
        let mut node = root;
        for step in &self.0 {
            node = match (step, node) {
                (PathStep::Callee, Expr::Call { callee, .. }) => callee,
                (PathStep::Argument(i), Expr::Call { arguments, .. }) => arguments.get(*i)?,
                (PathStep::Tag, Expr::TaggedTemplate { tag, .. }) => tag,
                (PathStep::Object, Expr::Member { object, .. }) => object,
                (PathStep::Element(i), Expr::Array(elements, _)) => elements.get(*i)?,
                _ => return None,
            };
        }
        Some(node)
    }

    /// Mutable counterpart of [`NodePath::resolve`], used for structural
    /// replacement at the referenced position.
    pub fn resolve_mut<'a>(&self, root: &'a mut Expr) -> Option<&'a mut Expr> {
        let mut node = root;
        for step in &self.0 {
            node = match (step, node) {
                (PathStep::Callee, Expr::Call { callee, .. }) => callee,
                (PathStep::Argument(i), Expr::Call { arguments, .. }) => arguments.get_mut(*i)?,
                (PathStep::Tag, Expr::TaggedTemplate { tag, .. }) => tag,
                (PathStep::Object, Expr::Member { object, .. }) => object,
                (PathStep::Element(i), Expr::Array(elements, _)) => elements.get_mut(*i)?,
                _ => return None,
            };
        }
        Some(node)
    }
}
