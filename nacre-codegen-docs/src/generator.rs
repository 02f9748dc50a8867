use std::fmt::Write;
use std::path::Path;

use eyre::Result;
use nacre_codegen::Generator;
use nacre_core::OutputFile;
use nacre_syntax::{Definition, DefinitionKind, Namespace, ParsedFile, PassBy};

/// The built-in `docs` generator.
pub struct DocsGenerator;

impl Generator for DocsGenerator {
    fn name(&self) -> &str {
        "docs"
    }

    fn process(
        &self,
        _output_dir: &Path,
        pairs: &[ParsedFile],
        root: &Namespace,
    ) -> Result<Vec<OutputFile>> {
        let mut files = Vec::new();
        for pair in pairs {
            let stem = pair
                .file
                .path()
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "interface".to_string());
            files.push(OutputFile::new(
                format!("{stem}.md"),
                render_page(pair, &stem),
            ));
        }
        files.push(OutputFile::new("index.md", render_index(pairs, root)));
        Ok(files)
    }
}

fn render_page(pair: &ParsedFile, stem: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {stem}");
    out.push('\n');
    let _ = writeln!(out, "Definitions from `{}`.", pair.file);
    out.push('\n');
    render_entries(&pair.definitions, "", &mut out);
    out
}

fn render_entries(definitions: &[Definition], prefix: &str, out: &mut String) {
    for def in definitions {
        if def.kind == DefinitionKind::Namespace {
            if let Some(ns) = &def.nested {
                let nested = format!("{prefix}{}::", def.name);
                render_entries(&ns.definitions, &nested, out);
            }
            continue;
        }
        let model = def.resolved_model().unwrap_or("unresolved");
        let _ = writeln!(
            out,
            "- **{prefix}{}** ({}) — `{model}`, {}",
            def.name,
            kind_label(def.kind),
            passing(def)
        );
    }
}

fn render_index(pairs: &[ParsedFile], root: &Namespace) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Interface index");
    out.push('\n');
    for pair in pairs {
        let _ = writeln!(out, "- `{}`: {} definitions", pair.file, pair.definitions.len());
    }
    let _ = writeln!(
        out,
        "\n{} definitions in the global namespace (built-ins included).",
        count_definitions(root)
    );
    out
}

fn count_definitions(root: &Namespace) -> usize {
    fn count(defs: &[Definition]) -> usize {
        defs.iter()
            .map(|d| match &d.nested {
                Some(ns) => 1 + count(&ns.definitions),
                None => 1,
            })
            .sum()
    }
    count(&root.definitions)
}

fn kind_label(kind: DefinitionKind) -> &'static str {
    match kind {
        DefinitionKind::Native => "native type",
        DefinitionKind::Struct => "struct",
        DefinitionKind::Class => "class",
        DefinitionKind::Enum => "enum",
        DefinitionKind::Callback => "callback",
        DefinitionKind::Namespace => "namespace",
    }
}

fn passing(def: &Definition) -> String {
    match def.representation().map(|r| r.param_by) {
        Some(PassBy::Value) => "passed by value".to_string(),
        Some(PassBy::ConstReference) => "passed by const reference".to_string(),
        Some(PassBy::Pointer) => "passed by pointer".to_string(),
        None => "passing unknown".to_string(),
    }
}
