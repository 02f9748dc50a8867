use std::path::Path;
use std::sync::Arc;

use eyre::Result;
use indexmap::IndexMap;
use nacre_core::OutputFile;
use nacre_syntax::{Namespace, ParsedFile};

/// A pluggable output-artifact producer.
///
/// Generators are black boxes to the pipeline: given the parsed pairs and
/// the finalized global namespace, they return deferred [`OutputFile`]s.
/// Nothing they return touches the filesystem until every requested
/// generator has succeeded.
pub trait Generator: Send + Sync {
    /// The name this generator describes itself as (registry keys are
    /// what dispatch actually uses).
    fn name(&self) -> &str;

    /// Produce the deferred outputs for one run.
    ///
    /// `output_dir` is informational (generators may derive content from
    /// it); returned paths are relative to it.
    ///
    /// # Errors
    ///
    /// A failing generator aborts the run before any writer executes.
    fn process(
        &self,
        output_dir: &Path,
        pairs: &[ParsedFile],
        root: &Namespace,
    ) -> Result<Vec<OutputFile>>;
}

/// Name-keyed generators, in registration order.
pub type GeneratorMap = IndexMap<String, Arc<dyn Generator>>;
