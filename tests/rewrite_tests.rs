//! Tagged-template rewriter contract tests.

use graft::ast::{builder, Expr, Pos, Span, TemplateLit};
use graft::errors::TransformError;
use graft::rewrite::{parse_tte, replace_with_location, RewriteState, PLACEHOLDER};

fn span(line: usize, width: usize) -> Span {
    Span::new(
        Pos { line, column: 1 },
        Pos {
            line,
            column: 1 + width,
        },
    )
}

fn tagged(tag: Expr, text: &str, template_span: Span, site_span: Span) -> Expr {
    Expr::TaggedTemplate {
        tag: Box::new(tag),
        quasi: TemplateLit::constant(text, template_span),
        span: site_span,
    }
}

#[test]
fn bare_identifier_tag_matches_without_a_wrapper() {
    let template_span = span(2, 7);
    let mut site = tagged(builder::ident("tw"), "hello", template_span, span(2, 12));
    let mut state = RewriteState::default();

    let rewrite = parse_tte(&mut site, &builder::ident("_styled"), &mut state)
        .unwrap()
        .expect("identifier tags are a supported shape");

    assert_eq!(rewrite.string, "hello");
    assert!(rewrite.placeholder.is_root());
    assert!(!state.should_import_styled);
    // The site keeps its original shape; only its span moves to the template.
    assert!(matches!(site, Expr::TaggedTemplate { .. }));
    assert_eq!(site.span(), template_span);
}

#[test]
fn member_tag_is_rewritten_and_wrapped() {
    let template_span = span(4, 5);
    let object_span = span(4, 2);
    let site_span = span(4, 14);
    let tag = Expr::Member {
        object: Box::new(Expr::Ident("tw".to_string(), object_span)),
        property: "div".to_string(),
        span: span(4, 6),
    };
    let mut site = tagged(tag, "hello", template_span, site_span);
    let mut state = RewriteState::default();

    let rewrite = parse_tte(&mut site, &builder::ident("_styled"), &mut state)
        .unwrap()
        .expect("member tags are a supported shape");

    assert_eq!(rewrite.string, "hello");
    assert!(state.should_import_styled);

    let Expr::Call {
        callee, arguments, ..
    } = &site
    else {
        panic!("expected the site to become a call, got {site:?}");
    };
    // Wrapper call inherits the original site's span.
    assert_eq!(site.span(), site_span);
    // The tag's object is now the styled helper, keeping the object's span.
    let Expr::Member { object, property, .. } = callee.as_ref() else {
        panic!("expected the callee to stay a member access");
    };
    assert_eq!(**object, Expr::Ident("_styled".to_string(), object_span));
    assert_eq!(property, "div");
    // Single placeholder argument, stamped with the template's span.
    assert_eq!(arguments.len(), 1);
    assert_eq!(
        arguments[0],
        Expr::Ident(PLACEHOLDER.to_string(), template_span)
    );
    // The returned position reaches that argument.
    assert_eq!(rewrite.placeholder.resolve(&site), Some(&arguments[0]));
}

#[test]
fn call_tag_gets_its_callee_replaced_and_is_wrapped() {
    let template_span = span(7, 5);
    let callee_span = span(7, 2);
    let tag = Expr::Call {
        callee: Box::new(Expr::Ident("tw".to_string(), callee_span)),
        arguments: vec![builder::ident("opts")],
        span: span(7, 8),
    };
    let mut site = tagged(tag, "hello", template_span, span(7, 16));
    let mut state = RewriteState::default();

    let rewrite = parse_tte(&mut site, &builder::ident("_styled"), &mut state)
        .unwrap()
        .expect("call tags are a supported shape");

    assert_eq!(rewrite.string, "hello");
    assert!(state.should_import_styled);

    let Expr::Call {
        callee, arguments, ..
    } = &site
    else {
        panic!("expected the site to become a call");
    };
    let Expr::Call {
        callee: inner_callee,
        arguments: inner_args,
        ..
    } = callee.as_ref()
    else {
        panic!("expected the original call tag to survive as the callee");
    };
    assert_eq!(
        **inner_callee,
        Expr::Ident("_styled".to_string(), callee_span)
    );
    assert_eq!(inner_args, &vec![builder::ident("opts")]);
    assert_eq!(
        arguments[0],
        Expr::Ident(PLACEHOLDER.to_string(), template_span)
    );
}

#[test]
fn unsupported_tag_shapes_are_a_non_match() {
    let original = tagged(builder::num(1.0), "hello", span(1, 5), span(1, 10));
    let mut site = original.clone();
    let mut state = RewriteState::default();

    let result = parse_tte(&mut site, &builder::ident("_styled"), &mut state).unwrap();
    assert!(result.is_none());
    assert_eq!(site, original, "a non-match must not mutate the tree");
    assert!(!state.should_import_styled);
}

#[test]
fn non_template_sites_are_a_non_match() {
    let mut site = builder::call(builder::ident("f"), vec![]);
    let mut state = RewriteState::default();
    let result = parse_tte(&mut site, &builder::ident("_styled"), &mut state).unwrap();
    assert!(result.is_none());
}

#[test]
fn non_constant_templates_abort_the_call_site() {
    let template_span = span(9, 10);
    let quasi = TemplateLit {
        quasis: vec!["w-".to_string(), String::new()],
        exprs: vec![builder::ident("width")],
        span: template_span,
    };
    let mut site = Expr::TaggedTemplate {
        tag: Box::new(builder::ident("tw")),
        quasi,
        span: span(9, 14),
    };
    let mut state = RewriteState::default();

    let err = parse_tte(&mut site, &builder::ident("_styled"), &mut state).unwrap_err();
    assert_eq!(
        err,
        TransformError::NonConstantTemplate {
            span: template_span
        }
    );
}

#[test]
fn replace_with_location_stamps_the_replaced_nodes_span() {
    let original_span = span(3, 4);
    let mut slot = Expr::Ident("old".to_string(), original_span);
    replace_with_location(&mut slot, builder::ident("new"));
    assert_eq!(slot, Expr::Ident("new".to_string(), original_span));
}

#[test]
fn placeholder_path_round_trips_through_resolve_mut() {
    let mut site = tagged(
        Expr::Member {
            object: Box::new(builder::ident("tw")),
            property: "div".to_string(),
            span: span(5, 6),
        },
        "flex",
        span(5, 4),
        span(5, 12),
    );
    let mut state = RewriteState::default();
    let rewrite = parse_tte(&mut site, &builder::ident("_styled"), &mut state)
        .unwrap()
        .unwrap();

    // Substitute real content at the placeholder, as the host would.
    let slot = rewrite
        .placeholder
        .resolve_mut(&mut site)
        .expect("placeholder path must resolve");
    replace_with_location(slot, builder::str_lit("flex"));

    assert!(!rewrite.placeholder.is_root());
    let Expr::Call { arguments, .. } = &site else {
        panic!("expected a call");
    };
    assert_eq!(arguments[0], Expr::Str("flex".to_string(), span(5, 4)));
}
