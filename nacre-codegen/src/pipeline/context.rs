//! Context threaded through the pipeline stages.

use nacre_core::OutputFile;
use nacre_syntax::{Namespace, ParsedFile};

use super::diagnostic::{Diagnostic, Severity};

/// State accumulated by one run.
///
/// Built fresh per invocation and never reused across runs.
#[derive(Default)]
pub struct GenerationContext {
    /// One entry per input file, in argument order.
    pub pairs: Vec<ParsedFile>,
    /// The merged, finalized global namespace (populated after finalize).
    pub root: Option<Namespace>,
    /// Deferred writers collected across all generators, in dispatch order.
    pub writers: Vec<OutputFile>,
    /// Non-fatal observations.
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_warning(&mut self, stage: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(stage, message));
    }

    pub fn add_info(&mut self, stage: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(stage, message));
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// The finalized root namespace.
    ///
    /// # Panics
    ///
    /// Panics if the merge stage hasn't run.
    pub fn root(&self) -> &Namespace {
        self.root
            .as_ref()
            .expect("root namespace not set - did the merge stage run?")
    }
}
