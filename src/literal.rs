//! Literal compiler and object merge flattener.
//!
//! [`astify`] serializes a runtime-shaped [`Value`] into an equivalent
//! literal expression tree, honoring the escape-marker protocol for raw
//! expression injection and spreads. [`assignify`] post-processes object
//! literals that contain spread elements into `Object.assign` merge calls so
//! hosts targeting grammars without object spread still get override
//! semantics in original property order.
//!
//! Compilation is bottom-up: nested values are fully compiled before their
//! container is finalized, which the flattener's chunk-splitting relies on.

use crate::ast::{builder, Expr, ObjectItem, Span, Value};
use crate::errors::{ExprParseError, TransformError, TransformResult};
use crate::syntax::ExpressionParser;

/// Key prefix requesting spread semantics: the entry's *value* text is parsed
/// as an expression and spliced in as a spread element.
pub const SPREAD_MARKER: &str = "spread:";

/// Prefix requesting raw expression injection. On a key it makes the property
/// key a parsed (computed) expression; on a string value it makes the value a
/// parsed expression instead of a string literal.
pub const COMPUTED_MARKER: &str = "computed:";

/// Compiles a runtime value into a tree node that, evaluated, reconstructs an
/// equivalent value.
///
/// `undefined` and functions have no literal form and compile to `void 0`.
/// Strings prefixed with [`COMPUTED_MARKER`] are parsed as raw expressions
/// (marker stripped); all other strings are emitted verbatim.
pub fn astify(value: &Value, parser: &dyn ExpressionParser) -> TransformResult<Expr> {
    match value {
        Value::Null => Ok(builder::null()),
        Value::Undefined | Value::Function => Ok(builder::void_zero()),
        Value::Num(n) => Ok(builder::num(*n)),
        Value::Bool(b) => Ok(builder::bool_lit(*b)),
        Value::Str(s) => match s.strip_prefix(COMPUTED_MARKER) {
            Some(raw) => parse_escape(raw, parser),
            None => Ok(builder::str_lit(s.clone())),
        },
        Value::Array(items) => {
            let elements = items
                .iter()
                .map(|item| astify(item, parser))
                .collect::<TransformResult<Vec<_>>>()?;
            Ok(builder::array(elements))
        }
        Value::Object(entries) => Ok(builder::object(object_expression_properties(
            entries, parser,
        )?)),
    }
}

/// Compiles an object's entries into object-literal members, in insertion
/// order.
///
/// Entries whose value is `undefined` are omitted entirely. A
/// [`SPREAD_MARKER`]-prefixed key turns the entry into a spread element over
/// its parsed value text; a [`COMPUTED_MARKER`]-prefixed key gets its key
/// text parsed as the property's key expression, with the computed flag set.
pub fn object_expression_properties(
    entries: &[(String, Value)],
    parser: &dyn ExpressionParser,
) -> TransformResult<Vec<ObjectItem>> {
    let mut items = Vec::new();
    for (key, value) in entries {
        if value.is_undefined() {
            continue;
        }

        if key.strip_prefix(SPREAD_MARKER).is_some() {
            let text = match value {
                Value::Str(s) => s.as_str(),
                other => {
                    return Err(TransformError::MalformedEscape {
                        source: ExprParseError::new(
                            other.type_name(),
                            "a spread entry's value must be expression text",
                        ),
                    })
                }
            };
            items.push(ObjectItem::Spread(parse_escape(text, parser)?));
            continue;
        }

        let (key_expr, computed) = match key.strip_prefix(COMPUTED_MARKER) {
            Some(raw) => (parse_escape(raw, parser)?, true),
            None => (builder::str_lit(key.clone()), false),
        };
        items.push(builder::property(key_expr, astify(value, parser)?, computed));
    }
    Ok(items)
}

fn parse_escape(text: &str, parser: &dyn ExpressionParser) -> TransformResult<Expr> {
    parser
        .parse_expression(text)
        .map_err(|source| TransformError::MalformedEscape { source })
}

/// Flattens an object literal containing spread elements into an
/// `Object.assign` call over ordered chunks.
///
/// Consecutive plain properties form one object chunk; every spread element
/// becomes its own chunk. Chunk order matches the original member order, so
/// later chunks override earlier ones exactly as the mixed literal would.
/// Nested property values are flattened first. Inputs without spreads (and
/// non-objects) pass through unchanged.
pub fn assignify(expr: Expr) -> Expr {
    let Expr::Object(items, span) = expr else {
        return expr;
    };

    let mut chunks: Vec<Expr> = Vec::new();
    let mut run: Vec<ObjectItem> = Vec::new();
    let mut saw_spread = false;

    for item in items {
        match item {
            ObjectItem::Spread(argument) => {
                saw_spread = true;
                if !run.is_empty() {
                    chunks.push(Expr::Object(std::mem::take(&mut run), Span::default()));
                }
                chunks.push(argument);
            }
            ObjectItem::Property {
                key,
                value,
                computed,
                span,
            } => {
                run.push(ObjectItem::Property {
                    key,
                    value: Box::new(assignify(*value)),
                    computed,
                    span,
                });
            }
        }
    }

    if !saw_spread {
        return Expr::Object(run, span);
    }

    if !run.is_empty() {
        chunks.push(Expr::Object(run, Span::default()));
    }

    builder::call(
        builder::member(builder::ident("Object"), "assign"),
        chunks,
    )
}
