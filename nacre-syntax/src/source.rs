use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One input artifact, plus the output-path hints generators derive from it.
///
/// Hints are relative to the output directory. Built-in definitions use
/// synthetic `<builtin>` files with no input path on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    header: Option<PathBuf>,
    binding_header: Option<PathBuf>,
    binding_impl: Option<PathBuf>,
}

impl SourceFile {
    /// A source file for an input path, with output hints derived from its stem.
    ///
    /// `foo/bar.idl` gets `bar.h`, `bar_glue.h`, and `bar_glue.cc`.
    pub fn from_input(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "out".to_string());
        Self {
            header: Some(PathBuf::from(format!("{stem}.h"))),
            binding_header: Some(PathBuf::from(format!("{stem}_glue.h"))),
            binding_impl: Some(PathBuf::from(format!("{stem}_glue.cc"))),
            path,
        }
    }

    /// The synthetic file behind built-in native types.
    pub fn builtin() -> Arc<Self> {
        Arc::new(Self {
            path: PathBuf::from("<builtin>"),
            header: None,
            binding_header: None,
            binding_impl: None,
        })
    }

    /// The synthetic file behind the built-in `std` namespace.
    ///
    /// Its contents are declared by the common runtime header.
    pub fn builtin_std() -> Arc<Self> {
        Arc::new(Self {
            path: PathBuf::from("<builtin>"),
            header: Some(PathBuf::from("common.h")),
            binding_header: None,
            binding_impl: None,
        })
    }

    /// The input path (or `<builtin>` for synthetic files).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Output hint: generated header path, if this file produces one.
    pub fn header(&self) -> Option<&Path> {
        self.header.as_deref()
    }

    /// Output hint: script-binding header path.
    pub fn binding_header(&self) -> Option<&Path> {
        self.binding_header.as_deref()
    }

    /// Output hint: script-binding implementation path.
    pub fn binding_impl(&self) -> Option<&Path> {
        self.binding_impl.as_deref()
    }
}

impl fmt::Display for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// A position inside a source file, for diagnostics.
#[derive(Debug, Clone)]
pub struct SourceLocation {
    pub file: Arc<SourceFile>,
    /// 1-based line number; 0 for synthetic locations.
    pub line: usize,
}

impl SourceLocation {
    pub fn new(file: Arc<SourceFile>, line: usize) -> Self {
        Self { file, line }
    }

    /// A location inside a synthetic built-in file.
    pub fn builtin(file: Arc<SourceFile>) -> Self {
        Self { file, line: 0 }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
