use std::io;
use std::path::{Path, PathBuf};

/// A deferred unit of output work.
///
/// Generators return these instead of writing files themselves. The path is
/// relative to the output directory; nothing touches the filesystem until
/// [`OutputFile::write`] runs.
#[derive(Debug, Clone)]
pub struct OutputFile {
    path: PathBuf,
    content: String,
    overwrite: Overwrite,
}

impl OutputFile {
    /// Create an output file that always overwrites its destination.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: Overwrite::Always,
        }
    }

    /// Use the given overwrite rule instead of the default.
    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// The destination path, relative to the output directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The rendered content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The overwrite rule this file will be committed with.
    pub fn overwrite(&self) -> Overwrite {
        self.overwrite
    }

    /// Commit this file under `base`, creating parent directories as needed.
    pub fn write(&self, base: &Path) -> io::Result<WriteResult> {
        let dest = base.join(&self.path);
        match self.overwrite {
            Overwrite::Always => {
                write_file(&dest, &self.content)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if dest.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&dest, &self.content)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}

/// Result of committing one output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written.
    Written,
    /// File was left untouched (already exists).
    Skipped,
}

/// How to handle an existing file at the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code).
    Always,
    /// Only create if the file doesn't exist yet.
    IfMissing,
}
