//! The fixed catalog of built-in native types.
//!
//! These are appended to every run's definition list, independent of what
//! the input files declare. User input can add definitions but never
//! remove or replace the builtins.

use crate::definition::Definition;
use crate::namespace::Namespace;
use crate::source::{SourceFile, SourceLocation};

/// The built-in definitions, identical across runs.
///
/// `string` and `wstring` live inside a synthetic `std` namespace; every
/// entry declares the `pod` binding model.
pub fn builtin_definitions() -> Vec<Definition> {
    let file = SourceFile::builtin();
    let loc = || SourceLocation::builtin(file.clone());
    vec![
        Definition::native("void", "void", loc()),
        Definition::native("int", "int", loc()),
        Definition::native("unsigned int", "int", loc()),
        Definition::native("size_t", "int", loc()),
        Definition::native("bool", "bool", loc()),
        Definition::native("float", "float", loc()),
        Definition::native("Variant", "variant", loc()),
        std_namespace(),
    ]
}

fn std_namespace() -> Definition {
    let file = SourceFile::builtin_std();
    let loc = || SourceLocation::builtin(file.clone());
    let definitions = vec![
        Definition::native("string", "string", loc()),
        Definition::native("wstring", "wstring", loc()),
    ];
    Definition::namespace(Namespace::new("std", Some(loc()), definitions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::DefinitionKind;

    #[test]
    fn test_catalog_is_stable() {
        let names: Vec<String> = builtin_definitions()
            .iter()
            .map(|d| d.name.clone())
            .collect();
        assert_eq!(
            names,
            ["void", "int", "unsigned int", "size_t", "bool", "float", "Variant", "std"]
        );
    }

    #[test]
    fn test_std_contains_strings() {
        let root = Namespace::root(builtin_definitions());
        assert!(root.lookup("std::string").is_some());
        assert!(root.lookup("std::wstring").is_some());
    }

    #[test]
    fn test_all_builtins_declare_pod() {
        for def in builtin_definitions() {
            match def.kind {
                DefinitionKind::Namespace => {
                    for inner in &def.nested.as_ref().unwrap().definitions {
                        assert_eq!(inner.declared_model(), Some("pod"), "{}", inner.name);
                    }
                }
                _ => assert_eq!(def.declared_model(), Some("pod"), "{}", def.name),
            }
        }
    }

    #[test]
    fn test_builtins_are_types() {
        let defs = builtin_definitions();
        assert!(defs.iter().filter(|d| d.is_type).count() >= 7);
    }
}
