//! Header rendering.

use std::fmt::Write;
use std::path::Path;

use nacre_syntax::{Definition, DefinitionKind, ParsedFile, Storage};

/// Render the full header for one parsed file.
pub fn render_header(header_path: &Path, pair: &ParsedFile) -> String {
    let guard = include_guard(header_path);
    let mut out = String::new();
    let _ = writeln!(out, "// Generated from {}. Do not edit.", pair.file);
    let _ = writeln!(out, "#ifndef {guard}");
    let _ = writeln!(out, "#define {guard}");
    out.push('\n');
    render_definitions(&pair.definitions, 0, &mut out);
    out.push('\n');
    let _ = writeln!(out, "#endif  // {guard}");
    out
}

/// `surface.h` becomes `SURFACE_H_`.
fn include_guard(header_path: &Path) -> String {
    let name = header_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut guard: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    guard.push('_');
    guard
}

fn render_definitions(definitions: &[Definition], depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    for def in definitions {
        match def.kind {
            DefinitionKind::Namespace => {
                let _ = writeln!(out, "{indent}namespace {} {{", def.name);
                if let Some(ns) = &def.nested {
                    render_definitions(&ns.definitions, depth + 1, out);
                }
                let _ = writeln!(out, "{indent}}}  // namespace {}", def.name);
            }
            // natives are declared by the runtime, not by generated headers
            DefinitionKind::Native => {}
            _ => {
                if let Some(line) = declaration(def) {
                    let _ = writeln!(out, "{indent}{line}");
                }
            }
        }
    }
}

/// One declaration line, shaped by the resolved binding model.
fn declaration(def: &Definition) -> Option<String> {
    let model = def.resolved_model().unwrap_or("unresolved");
    let keyword = match def.kind {
        DefinitionKind::Enum => "enum",
        DefinitionKind::Struct => "struct",
        _ => "class",
    };
    let note = match def.representation().map(|r| r.storage) {
        Some(Storage::Pointer) => "held by pointer",
        Some(Storage::Array) => "pointer + element count",
        _ => "held by value",
    };
    Some(format!("{keyword} {};  // binding: {model}, {note}", def.name))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use nacre_codegen::bindings::builtin_bindings;
    use nacre_syntax::{SourceFile, finalize, parse_source};

    use super::*;

    fn parsed(content: &str) -> ParsedFile {
        let file = Arc::new(SourceFile::from_input("surface.idl"));
        let definitions = parse_source(content, file.clone()).unwrap();
        let mut root = nacre_syntax::Namespace::root(definitions);
        finalize(&mut root, &builtin_bindings()).unwrap();
        ParsedFile {
            file,
            definitions: root.definitions,
        }
    }

    #[test]
    fn test_include_guard() {
        assert_eq!(include_guard(&PathBuf::from("surface.h")), "SURFACE_H_");
        assert_eq!(include_guard(&PathBuf::from("a-b.h")), "A_B_H_");
    }

    #[test]
    fn test_header_shape() {
        let pair = parsed("[binding_model=by_pointer] class Surface;\nenum Format;\n");
        let header = render_header(Path::new("surface.h"), &pair);

        assert!(header.starts_with("// Generated from surface.idl."));
        assert!(header.contains("#ifndef SURFACE_H_"));
        assert!(header.contains("#define SURFACE_H_"));
        assert!(header.contains("class Surface;  // binding: by_pointer, held by pointer"));
        assert!(header.contains("enum Format;  // binding: enum, held by value"));
        assert!(header.trim_end().ends_with("#endif  // SURFACE_H_"));
    }

    #[test]
    fn test_namespaces_nest() {
        let pair = parsed("namespace media {\n  struct Frame;\n}\n");
        let header = render_header(Path::new("surface.h"), &pair);

        assert!(header.contains("namespace media {"));
        assert!(header.contains("  struct Frame;  // binding: by_value, held by value"));
        assert!(header.contains("}  // namespace media"));
    }
}
