//! Declaration parsing for nacre IDL files.
//!
//! The grammar is line-oriented: one declaration per line, optional
//! bracketed attribute list, optional brace-delimited body. Bodies of
//! structs, classes, enums, and callbacks are skipped — only namespaces
//! are descended into, since only they contribute symbol-table entries.
//!
//! ```text
//! // comment
//! [binding_model=by_pointer] class Surface { ... };
//! enum Format;
//! namespace media {
//!   struct Frame;
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;
use miette::SourceSpan;

use crate::definition::{Definition, DefinitionKind};
use crate::error::{Error, Result};
use crate::namespace::Namespace;
use crate::source::{SourceFile, SourceLocation};

/// One input file and the definitions parsed out of it.
#[derive(Debug, Clone)]
pub struct ParsedFile {
    pub file: Arc<SourceFile>,
    pub definitions: Vec<Definition>,
}

/// Parse one input file. Pure function of the file's content.
pub fn parse_file(path: &Path) -> Result<ParsedFile> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let file = Arc::new(SourceFile::from_input(path));
    let definitions = parse_source(&content, file.clone())?;
    Ok(ParsedFile { file, definitions })
}

/// Parse IDL source text against a source-file identity.
pub fn parse_source(content: &str, file: Arc<SourceFile>) -> Result<Vec<Definition>> {
    Parser::new(content, file).parse_declarations(false)
}

struct Line<'a> {
    number: usize,
    offset: usize,
    text: &'a str,
}

struct Parser<'a> {
    file: Arc<SourceFile>,
    content: &'a str,
    lines: Vec<Line<'a>>,
    index: usize,
}

impl<'a> Parser<'a> {
    fn new(content: &'a str, file: Arc<SourceFile>) -> Self {
        let mut lines = Vec::new();
        let mut offset = 0;
        for (i, raw) in content.split('\n').enumerate() {
            lines.push(Line {
                number: i + 1,
                offset,
                text: raw,
            });
            offset += raw.len() + 1;
        }
        Self {
            file,
            content,
            lines,
            index: 0,
        }
    }

    fn parse_declarations(&mut self, nested: bool) -> Result<Vec<Definition>> {
        let mut definitions = Vec::new();
        while let Some(at) = self.next_meaningful() {
            let text = meaningful(self.lines[at].text);
            self.index = at + 1;
            if text == "}" || text == "};" {
                if nested {
                    return Ok(definitions);
                }
                return Err(self.error("unmatched '}'", at, text));
            }
            definitions.push(self.parse_declaration(at)?);
        }
        if nested {
            let last = self.lines.len().saturating_sub(1);
            return Err(self.error("missing '}' before end of file", last, ""));
        }
        Ok(definitions)
    }

    fn parse_declaration(&mut self, at: usize) -> Result<Definition> {
        let line_number = self.lines[at].number;
        let text = meaningful(self.lines[at].text);

        let (attributes, rest) = if let Some(after_open) = text.strip_prefix('[') {
            match after_open.find(']') {
                Some(close) => (
                    self.parse_attributes(&after_open[..close], at)?,
                    after_open[close + 1..].trim_start(),
                ),
                None => return Err(self.error("unterminated attribute list", at, text)),
            }
        } else {
            (IndexMap::new(), text)
        };

        let mut tokens = rest.split_whitespace();
        let keyword = tokens
            .next()
            .ok_or_else(|| self.error("expected a declaration after attributes", at, text))?;
        let kind = match keyword {
            "struct" => Some(DefinitionKind::Struct),
            "class" => Some(DefinitionKind::Class),
            "enum" => Some(DefinitionKind::Enum),
            "callback" => Some(DefinitionKind::Callback),
            "namespace" => None,
            _ => {
                return Err(self.error(
                    format!("expected 'struct', 'class', 'enum', 'callback', or 'namespace', found '{keyword}'"),
                    at,
                    keyword,
                ));
            }
        };

        let raw_name = tokens
            .next()
            .ok_or_else(|| self.error(format!("expected a name after '{keyword}'"), at, keyword))?;
        let name = raw_name.trim_end_matches([';', '{']);
        if !is_identifier(name) {
            return Err(self.error(format!("invalid {keyword} name '{name}'"), at, raw_name));
        }

        let location = SourceLocation::new(self.file.clone(), line_number);
        let opens_block = rest.contains('{');
        let terminated = rest.ends_with(';');

        match kind {
            None => {
                if !rest.ends_with('{') {
                    return Err(self.error("expected '{' at end of namespace declaration", at, rest));
                }
                let children = self.parse_declarations(true)?;
                let namespace = Namespace::new(name, Some(location), children);
                Ok(Definition::namespace(namespace).with_attributes(attributes))
            }
            Some(kind) => {
                if opens_block {
                    self.skip_block(at)?;
                } else if !terminated {
                    return Err(self.error("expected ';' or '{' at end of declaration", at, rest));
                }
                Ok(Definition::new(name, kind, location).with_attributes(attributes))
            }
        }
    }

    /// Skip a brace-delimited body whose opening line is `at`.
    fn skip_block(&mut self, at: usize) -> Result<()> {
        let mut depth = brace_depth(meaningful(self.lines[at].text));
        while depth > 0 {
            let Some(line) = self.lines.get(self.index) else {
                return Err(self.error("unterminated block", at, meaningful(self.lines[at].text)));
            };
            depth += brace_depth(meaningful(line.text));
            self.index += 1;
        }
        Ok(())
    }

    fn parse_attributes(&self, list: &str, at: usize) -> Result<IndexMap<String, String>> {
        let mut attributes = IndexMap::new();
        for entry in list.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                return Err(self.error("empty attribute entry", at, list));
            }
            match entry.split_once('=') {
                Some((key, value)) => {
                    attributes.insert(key.trim().to_string(), value.trim().to_string());
                }
                None => {
                    attributes.insert(entry.to_string(), String::new());
                }
            }
        }
        Ok(attributes)
    }

    /// Index of the next non-empty, non-comment line, without consuming it.
    fn next_meaningful(&self) -> Option<usize> {
        (self.index..self.lines.len()).find(|&i| !meaningful(self.lines[i].text).is_empty())
    }

    fn error(&self, message: impl Into<String>, at: usize, fragment: &str) -> Box<Error> {
        let line = &self.lines[at];
        let span = span_of(line, fragment);
        Error::parse(
            message,
            self.content,
            &self.file.path().display().to_string(),
            Some(span),
        )
    }
}

/// The line with its trailing comment stripped and whitespace trimmed.
fn meaningful(raw: &str) -> &str {
    let code = match raw.split_once("//") {
        Some((code, _)) => code,
        None => raw,
    };
    code.trim()
}

fn brace_depth(text: &str) -> i32 {
    let opens = text.matches('{').count() as i32;
    let closes = text.matches('}').count() as i32;
    opens - closes
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn span_of(line: &Line<'_>, fragment: &str) -> SourceSpan {
    let (start, len) = match fragment.is_empty() {
        true => (line.offset, line.text.len().max(1)),
        false => match line.text.find(fragment) {
            Some(col) => (line.offset + col, fragment.len()),
            None => (line.offset, line.text.len().max(1)),
        },
    };
    (start, len).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<Vec<Definition>> {
        parse_source(content, Arc::new(SourceFile::from_input("test.idl")))
    }

    #[test]
    fn test_simple_declarations() {
        let defs = parse("struct Point;\nenum Color;\ncallback OnReady;\n").unwrap();
        assert_eq!(defs.len(), 3);
        assert_eq!(defs[0].name, "Point");
        assert_eq!(defs[0].kind, DefinitionKind::Struct);
        assert_eq!(defs[1].kind, DefinitionKind::Enum);
        assert_eq!(defs[2].kind, DefinitionKind::Callback);
        assert!(defs.iter().all(|d| d.is_type));
    }

    #[test]
    fn test_attributes() {
        let defs = parse("[binding_model=by_pointer, scriptable] class Surface;\n").unwrap();
        assert_eq!(defs.len(), 1);
        assert_eq!(
            defs[0].attributes.get("binding_model").map(String::as_str),
            Some("by_pointer")
        );
        assert!(defs[0].attributes.contains_key("scriptable"));
        assert_eq!(defs[0].declared_model(), Some("by_pointer"));
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let defs = parse("// leading comment\n\nstruct Point; // trailing\n").unwrap();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].location.as_ref().unwrap().line, 3);
    }

    #[test]
    fn test_body_is_skipped() {
        let src = "class Surface {\n  int width;\n  int height;\n};\nenum Format;\n";
        let defs = parse(src).unwrap();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[1].name, "Format");
    }

    #[test]
    fn test_single_line_body() {
        let defs = parse("struct Size { int w; int h; };\nenum Format;\n").unwrap();
        assert_eq!(defs.len(), 2);
    }

    #[test]
    fn test_nested_namespace() {
        let src = "namespace media {\n  struct Frame;\n  namespace raw {\n    class Buffer;\n  }\n}\n";
        let defs = parse(src).unwrap();
        assert_eq!(defs.len(), 1);
        let root = Namespace::root(defs);
        assert!(root.lookup("media::Frame").is_some());
        assert!(root.lookup("media::raw::Buffer").is_some());
    }

    #[test]
    fn test_unknown_keyword_is_an_error() {
        let err = parse("interface Foo;\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
        assert!(err.to_string().contains("interface"));
    }

    #[test]
    fn test_unterminated_block() {
        assert!(parse("class Surface {\n  int width;\n").is_err());
    }

    #[test]
    fn test_unterminated_namespace() {
        assert!(parse("namespace media {\n  struct Frame;\n").is_err());
    }

    #[test]
    fn test_unmatched_close() {
        assert!(parse("}\n").is_err());
    }

    #[test]
    fn test_invalid_name() {
        assert!(parse("struct 9lives;\n").is_err());
    }

    #[test]
    fn test_missing_terminator() {
        assert!(parse("struct Point\n").is_err());
    }

    #[test]
    fn test_parse_file_missing_path() {
        let err = parse_file(Path::new("/nonexistent/input.idl")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_parse_file_reads_content() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("shapes.idl");
        std::fs::write(&path, "struct Circle;\n").unwrap();

        let parsed = parse_file(&path).unwrap();
        assert_eq!(parsed.definitions.len(), 1);
        assert_eq!(
            parsed.file.header(),
            Some(Path::new("shapes.h")),
            "output hints derive from the input stem"
        );
    }
}
