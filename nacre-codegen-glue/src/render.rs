//! Glue rendering.
//!
//! For every bound definition the glue pair declares and implements two
//! conversions against the script runtime's `ScriptValue`: one into script
//! space, one back out. The spellings on both sides come from the
//! definition's resolved representation, so a by_pointer class crosses as
//! `Surface*` while a by_value struct crosses as `const Point&`.

use std::fmt::Write;
use std::path::Path;

use nacre_syntax::{Definition, DefinitionKind, ParsedFile, PassBy, Representation, Storage};

/// Render the glue declaration header for one parsed file.
pub fn render_glue_header(glue_path: &Path, pair: &ParsedFile) -> String {
    let guard = include_guard(glue_path);
    let mut out = String::new();
    let _ = writeln!(out, "// Generated from {}. Do not edit.", pair.file);
    let _ = writeln!(out, "#ifndef {guard}");
    let _ = writeln!(out, "#define {guard}");
    out.push('\n');
    if let Some(header) = pair.file.header() {
        let _ = writeln!(out, "#include \"{}\"", header.display());
    }
    let _ = writeln!(out, "#include \"common.h\"");
    out.push('\n');
    let _ = writeln!(out, "namespace glue {{");
    out.push('\n');
    render_conversions(&pair.definitions, "", true, &mut out);
    let _ = writeln!(out, "}}  // namespace glue");
    out.push('\n');
    let _ = writeln!(out, "#endif  // {guard}");
    out
}

/// Render the glue implementation for one parsed file.
pub fn render_glue_impl(glue_header: &Path, pair: &ParsedFile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "// Generated from {}. Do not edit.", pair.file);
    let _ = writeln!(out, "#include \"{}\"", glue_header.display());
    out.push('\n');
    let _ = writeln!(out, "namespace glue {{");
    out.push('\n');
    render_conversions(&pair.definitions, "", false, &mut out);
    let _ = writeln!(out, "}}  // namespace glue");
    out
}

/// `surface_glue.h` becomes `SURFACE_GLUE_H_`.
fn include_guard(path: &Path) -> String {
    let name = path
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

fn render_conversions(definitions: &[Definition], prefix: &str, declare: bool, out: &mut String) {
    for def in definitions {
        match def.kind {
            DefinitionKind::Namespace => {
                if let Some(ns) = &def.nested {
                    let nested = format!("{prefix}{}::", def.name);
                    render_conversions(&ns.definitions, &nested, declare, out);
                }
            }
            // natives are converted by the runtime itself
            DefinitionKind::Native => {}
            _ => {
                let Some(repr) = def.representation() else {
                    continue;
                };
                let ty = format!("{prefix}{}", def.name);
                let model = def.resolved_model().unwrap_or("unresolved");
                let _ = writeln!(out, "// {ty}: {model}");
                if declare {
                    let _ = writeln!(out, "ScriptValue ToScript({});", param_spelling(&ty, repr));
                    let _ = writeln!(
                        out,
                        "bool FromScript(const ScriptValue& value, {});",
                        out_spelling(&ty, repr)
                    );
                } else {
                    let _ = writeln!(out, "ScriptValue ToScript({}) {{", param_spelling(&ty, repr));
                    let _ = writeln!(out, "  {}", to_script_body(repr));
                    let _ = writeln!(out, "}}");
                    out.push('\n');
                    let _ = writeln!(
                        out,
                        "bool FromScript(const ScriptValue& value, {}) {{",
                        out_spelling(&ty, repr)
                    );
                    let _ = writeln!(out, "  {}", from_script_body(repr));
                    let _ = writeln!(out, "}}");
                }
                out.push('\n');
            }
        }
    }
}

/// The C++ spelling of the into-script parameter.
fn param_spelling(ty: &str, repr: Representation) -> String {
    if repr.storage == Storage::Array {
        return format!("const {ty}* values, size_t count");
    }
    match repr.param_by {
        PassBy::Value => format!("{ty} value"),
        PassBy::ConstReference => format!("const {ty}& value"),
        PassBy::Pointer => format!("{ty}* value"),
    }
}

/// The C++ spelling of the out-of-script out parameter.
fn out_spelling(ty: &str, repr: Representation) -> String {
    if repr.storage == Storage::Array {
        return format!("{ty}** out, size_t* out_count");
    }
    match repr.return_by {
        PassBy::Pointer => format!("{ty}** out"),
        _ => format!("{ty}* out"),
    }
}

fn to_script_body(repr: Representation) -> &'static str {
    if repr.storage == Storage::Array {
        return "return ScriptValue::WrapArray(values, count);";
    }
    match repr.param_by {
        PassBy::Pointer => "return ScriptValue::Wrap(value);",
        _ => "return ScriptValue::Box(value);",
    }
}

fn from_script_body(repr: Representation) -> &'static str {
    if repr.storage == Storage::Array {
        return "return value.UnwrapArray(out, out_count);";
    }
    match repr.return_by {
        PassBy::Pointer => "return value.Unwrap(out);",
        _ => "return value.Unbox(out);",
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use nacre_codegen::bindings::builtin_bindings;
    use nacre_syntax::{Namespace, SourceFile, finalize, parse_source};

    use super::*;

    fn parsed(content: &str) -> ParsedFile {
        let file = Arc::new(SourceFile::from_input("surface.idl"));
        let definitions = parse_source(content, file.clone()).unwrap();
        let mut root = Namespace::root(definitions);
        finalize(&mut root, &builtin_bindings()).unwrap();
        ParsedFile {
            file,
            definitions: root.definitions,
        }
    }

    #[test]
    fn test_include_guard() {
        assert_eq!(
            include_guard(&PathBuf::from("surface_glue.h")),
            "SURFACE_GLUE_H_"
        );
    }

    #[test]
    fn test_glue_header_shape() {
        let pair = parsed("[binding_model=by_pointer] class Surface;\n");
        let header = render_glue_header(Path::new("surface_glue.h"), &pair);

        assert!(header.starts_with("// Generated from surface.idl."));
        assert!(header.contains("#ifndef SURFACE_GLUE_H_"));
        assert!(header.contains("#include \"surface.h\""));
        assert!(header.contains("#include \"common.h\""));
        assert!(header.contains("// Surface: by_pointer"));
        assert!(header.contains("ScriptValue ToScript(Surface* value);"));
        assert!(header.contains("bool FromScript(const ScriptValue& value, Surface** out);"));
        assert!(header.trim_end().ends_with("#endif  // SURFACE_GLUE_H_"));
    }

    #[test]
    fn test_spellings_follow_representation() {
        let pair = parsed("struct Point;\n[binding_model=unsized_array] struct Samples;\n");
        let header = render_glue_header(Path::new("surface_glue.h"), &pair);

        // by_value: const ref in, value out
        assert!(header.contains("ScriptValue ToScript(const Point& value);"));
        assert!(header.contains("bool FromScript(const ScriptValue& value, Point* out);"));
        // unsized_array: pointer + count on both sides
        assert!(header.contains("ScriptValue ToScript(const Samples* values, size_t count);"));
        assert!(header.contains("bool FromScript(const ScriptValue& value, Samples** out, size_t* out_count);"));
    }

    #[test]
    fn test_nested_names_are_qualified() {
        let pair = parsed("namespace media {\n  enum Format;\n}\n");
        let header = render_glue_header(Path::new("surface_glue.h"), &pair);
        assert!(header.contains("ScriptValue ToScript(media::Format value);"));
    }

    #[test]
    fn test_impl_bodies() {
        let pair = parsed("struct Point;\n[binding_model=by_pointer] class Surface;\n");
        let body = render_glue_impl(Path::new("surface_glue.h"), &pair);

        assert!(body.starts_with("// Generated from surface.idl."));
        assert!(body.contains("#include \"surface_glue.h\""));
        assert!(body.contains("ScriptValue ToScript(const Point& value) {"));
        assert!(body.contains("  return ScriptValue::Box(value);"));
        assert!(body.contains("ScriptValue ToScript(Surface* value) {"));
        assert!(body.contains("  return ScriptValue::Wrap(value);"));
        assert!(body.contains("  return value.Unwrap(out);"));
        assert!(body.contains("  return value.Unbox(out);"));
    }
}
