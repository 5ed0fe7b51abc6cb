//! Tagged-template call-site rewriting.
//!
//! [`parse_tte`] recognizes the three supported tag shapes — `tag`...``,
//! `ns.tag`...``, `tag(opts)`...`` — and rewrites the call site into an
//! ordinary call carrying a single placeholder argument, so later stages have
//! one uniform position to substitute real content into. Source locations are
//! preserved throughout: the final placeholder position is stamped with the
//! original template's span so diagnostics keep pointing at the author's
//! text.

use serde::{Deserialize, Serialize};

use crate::ast::{builder, Expr, NodePath, PathStep};
use crate::errors::{TransformError, TransformResult};

/// Name of the synthetic identifier the rewriter inserts as the sole argument
/// of a wrapped call site.
pub const PLACEHOLDER: &str = "__graft_placeholder__";

/// Per-pass flags the rewriter reports back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RewriteState {
    /// Set when the styled helper identifier was installed into the tree and
    /// the host must ensure it is imported.
    pub should_import_styled: bool,
}

/// A successful tagged-template rewrite.
#[derive(Debug, Clone, PartialEq)]
pub struct TteRewrite {
    /// The template's statically-evaluated string value.
    pub string: String,
    /// Position of the placeholder to substitute, relative to the call-site
    /// node handed to [`parse_tte`]. For bare-identifier tags this is the
    /// call site itself.
    pub placeholder: NodePath,
}

/// Replaces `slot` with `replacement`, stamping the replaced node's span onto
/// the replacement so rewrites never lose location metadata.
pub fn replace_with_location(slot: &mut Expr, mut replacement: Expr) {
    replacement.set_span(slot.span());
    *slot = replacement;
}

/// Detects and rewrites a tagged-template call site.
///
/// Returns `Ok(None)` without touching the tree when `site` is not a tagged
/// template or its tag is not an identifier, member access, or call. For
/// member and call tags the styled helper replaces the tag's object/callee
/// (location-preserving) and the whole site is wrapped into
/// `mutated_tag(PLACEHOLDER)`; `state.should_import_styled` is set so the
/// host imports the helper. Bare-identifier tags get no wrapper and the
/// returned position is the call site itself.
///
/// Fails with [`TransformError::NonConstantTemplate`] when the template's
/// value cannot be determined statically.
pub fn parse_tte(
    site: &mut Expr,
    styled: &Expr,
    state: &mut RewriteState,
) -> TransformResult<Option<TteRewrite>> {
    let Expr::TaggedTemplate { tag, quasi, .. } = site else {
        return Ok(None);
    };

    if !matches!(
        tag.as_ref(),
        Expr::Ident(..) | Expr::Member { .. } | Expr::Call { .. }
    ) {
        return Ok(None);
    }

    let Some(string) = quasi.evaluate() else {
        return Err(TransformError::NonConstantTemplate { span: quasi.span });
    };
    let template_span = quasi.span;

    let wrap = match tag.as_mut() {
        Expr::Call { callee, .. } => {
            replace_with_location(callee, styled.clone());
            state.should_import_styled = true;
            true
        }
        Expr::Member { object, .. } => {
            replace_with_location(object, styled.clone());
            state.should_import_styled = true;
            true
        }
        _ => false,
    };

    // Call and member tags get one extra indirection: the (mutated) tag
    // becomes the callee of a fresh call whose sole argument is the
    // placeholder. Bare identifiers keep the original shape.
    let placeholder = if wrap {
        if let Expr::TaggedTemplate { tag, .. } = site {
            let tag_expr = std::mem::replace(tag.as_mut(), builder::null());
            let wrapper = builder::call(tag_expr, vec![builder::ident(PLACEHOLDER)]);
            replace_with_location(site, wrapper);
        }
        NodePath::root().child(PathStep::Argument(0))
    } else {
        NodePath::root()
    };

    if let Some(node) = placeholder.resolve_mut(site) {
        node.set_span(template_span);
    }

    Ok(Some(TteRewrite {
        string,
        placeholder,
    }))
}
