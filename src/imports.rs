//! Top-level import management.
//!
//! Finds an existing local binding for a module export, or prepends a new
//! import declaration. Lookup never descends into nested scopes; only the
//! program's top-level import declarations are considered.

use crate::ast::{builder, ImportSpecifier, Program, Stmt};

/// Export name that selects the default-import specifier form.
pub const DEFAULT_EXPORT: &str = "default";

/// Returns the local binding of the first top-level import of
/// `export` from `module`, or `None` when no such import exists.
///
/// A default specifier matches when `export == "default"`; a named specifier
/// matches on its imported (exported) name, so `import { foo as bar }`
/// resolves `foo` to the local binding `bar`.
pub fn find_identifier<'a>(program: &'a Program, module: &str, export: &str) -> Option<&'a str> {
    for decl in program.imports() {
        if decl.source != module {
            continue;
        }
        for specifier in &decl.specifiers {
            match specifier {
                ImportSpecifier::Default { local, .. } if export == DEFAULT_EXPORT => {
                    return Some(local)
                }
                ImportSpecifier::Named {
                    imported, local, ..
                } if imported == export => return Some(local),
                _ => {}
            }
        }
    }
    None
}

/// Prepends an import of `export` from `module`, bound locally to `local`.
///
/// `export == "default"` produces a default-import specifier, anything else a
/// named specifier. No de-duplication is performed: callers must check
/// [`find_identifier`] first and only add on a miss, or they will get
/// duplicate declarations of the same binding name.
pub fn add_import(program: &mut Program, module: &str, export: &str, local: &str) {
    let decl = if export == DEFAULT_EXPORT {
        builder::import_default(local, module)
    } else {
        builder::import_named(export, local, module)
    };
    program.prepend(Stmt::Import(decl));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{builder, ImportSpecifier, Program, Stmt};

    fn program_with(imports: Vec<crate::ast::ImportDecl>) -> Program {
        Program::new(imports.into_iter().map(Stmt::Import).collect())
    }

    #[test]
    fn finds_aliased_named_import_by_exported_name() {
        let program = program_with(vec![builder::import_named("foo", "bar", "mod")]);
        assert_eq!(find_identifier(&program, "mod", "foo"), Some("bar"));
        assert_eq!(find_identifier(&program, "other", "foo"), None);
    }

    #[test]
    fn default_specifier_only_matches_default_export() {
        let program = program_with(vec![builder::import_default("styled", "styled-components")]);
        assert_eq!(
            find_identifier(&program, "styled-components", "default"),
            Some("styled")
        );
        assert_eq!(find_identifier(&program, "styled-components", "css"), None);
    }

    #[test]
    fn add_import_prepends_a_named_declaration() {
        let mut program = program_with(vec![builder::import_default("React", "react")]);
        add_import(&mut program, "styled-components", "css", "css");
        let first = program.imports().next().unwrap();
        assert_eq!(first.source, "styled-components");
        assert_eq!(
            first.specifiers,
            vec![ImportSpecifier::Named {
                imported: "css".to_string(),
                local: "css".to_string(),
                span: crate::ast::Span::default(),
            }]
        );
    }

    #[test]
    fn add_import_does_not_deduplicate() {
        let mut program = Program::default();
        add_import(&mut program, "mod", "default", "m");
        add_import(&mut program, "mod", "default", "m");
        assert_eq!(program.imports().count(), 2);
    }
}
