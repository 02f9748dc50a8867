//! Pipeline orchestrator.

use std::path::PathBuf;

use nacre_core::WriteResult;
use nacre_syntax::{Namespace, builtin_definitions, finalize, parse_file};

use super::context::GenerationContext;
use super::diagnostic::Diagnostic;
use crate::error::{Error, Result};
use crate::fingerprint::{Fingerprint, persist_digest, should_skip};
use crate::registry::Registry;

/// The active option values for one invocation.
///
/// Constructed once at process entry and passed through the pipeline; the
/// core keeps no ambient global state.
#[derive(Debug, Clone)]
pub struct Options {
    /// Input file paths, in argument order.
    pub inputs: Vec<PathBuf>,
    /// Generator names to run, in the requested order.
    pub generate: Vec<String>,
    /// `name:path` binding-model plugin modules.
    pub binding_modules: Vec<String>,
    /// `name:path` generator plugin modules.
    pub generator_modules: Vec<String>,
    /// Destination root, created recursively if absent.
    pub output_dir: PathBuf,
    /// Bypass the fingerprint skip check.
    pub force: bool,
    /// Files embodying the tool's own implementation, folded into the
    /// fingerprint (the CLI passes its own executable).
    pub tool_files: Vec<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            generate: Vec::new(),
            binding_modules: Vec::new(),
            generator_modules: Vec::new(),
            output_dir: PathBuf::from("."),
            force: false,
            tool_files: Vec::new(),
        }
    }
}

impl Options {
    /// The option strings covered by the fingerprint, in a fixed order.
    fn option_strings(&self) -> impl Iterator<Item = &str> {
        self.generator_modules
            .iter()
            .chain(self.binding_modules.iter())
            .chain(self.generate.iter())
            .map(String::as_str)
            .chain(std::iter::once(self.output_dir.to_str().unwrap_or("")))
    }
}

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    /// Nothing relevant changed; no writes were performed.
    Skipped,
    /// The full pipeline ran and outputs were committed.
    Generated {
        /// Writers that actually wrote (others hit an if-missing rule).
        written: usize,
        /// The digest persisted for the next run.
        digest: String,
        diagnostics: Vec<Diagnostic>,
    },
}

/// The generation pipeline: fingerprint gate, parse, merge, finalize,
/// dispatch, commit.
pub struct Pipeline {
    registry: Registry,
    options: Options,
}

impl Pipeline {
    pub fn new(registry: Registry, options: Options) -> Self {
        Self { registry, options }
    }

    /// Run the pipeline to completion.
    ///
    /// # Errors
    ///
    /// Any fatal error aborts before a single writer executes; the
    /// persisted fingerprint is only updated after full success, so a
    /// failed run retries instead of wrongly skipping.
    pub fn run(mut self) -> Result<Outcome> {
        // Fingerprint inputs, the tool itself, and the active options.
        let mut fingerprint = Fingerprint::new();
        for path in &self.options.inputs {
            fingerprint.add_file(path).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
        }
        for path in &self.options.tool_files {
            fingerprint.add_file(path).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
        }
        for value in self.options.option_strings() {
            fingerprint.add_str(value);
        }

        // Plugin modules are hashed and loaded in one sequenced pass.
        self.registry
            .load_generator_modules(&self.options.generator_modules, &mut fingerprint)?;
        self.registry
            .load_binding_modules(&self.options.binding_modules, &mut fingerprint)?;

        std::fs::create_dir_all(&self.options.output_dir).map_err(|source| Error::Io {
            path: self.options.output_dir.clone(),
            source,
        })?;

        let digest = fingerprint.hex();
        if should_skip(&digest, &self.options.output_dir, self.options.force) {
            return Ok(Outcome::Skipped);
        }

        let mut ctx = GenerationContext::new();

        // Parse every input file, in argument order.
        for path in &self.options.inputs {
            let parsed = parse_file(path)?;
            if parsed.definitions.is_empty() {
                ctx.add_warning("parse", format!("'{}' declares nothing", path.display()));
            }
            ctx.pairs.push(parsed);
        }

        // Merge all per-file lists plus the native types into one root
        // namespace, then finalize it. The per-file lists are mirrored
        // from the finalized root so generators see resolved models on
        // both views.
        let mut definitions: Vec<_> = ctx
            .pairs
            .iter()
            .flat_map(|pair| pair.definitions.iter().cloned())
            .collect();
        definitions.extend(builtin_definitions());
        let mut root = Namespace::root(definitions);
        finalize(&mut root, self.registry.bindings())?;
        let mut offset = 0;
        for pair in &mut ctx.pairs {
            let count = pair.definitions.len();
            pair.definitions = root.definitions[offset..offset + count].to_vec();
            offset += count;
        }
        ctx.root = Some(root);

        // Dispatch every requested generator, collecting writers; nothing
        // is written until all of them succeed.
        for name in &self.options.generate {
            let generator = self
                .registry
                .generator(name)
                .ok_or_else(|| Error::UnknownGenerator { name: name.clone() })?;
            let files = generator
                .process(&self.options.output_dir, &ctx.pairs, ctx.root())
                .map_err(|source| Error::Generate {
                    name: name.clone(),
                    source: source.into(),
                })?;
            ctx.add_info("generate", format!("{name}: {} files", files.len()));
            ctx.writers.extend(files);
        }

        // Commit in accumulation order, then persist the fingerprint.
        let mut written = 0;
        for writer in &ctx.writers {
            let result = writer
                .write(&self.options.output_dir)
                .map_err(|source| Error::Write {
                    path: writer.path().to_path_buf(),
                    source,
                })?;
            if result == WriteResult::Written {
                written += 1;
            }
        }
        persist_digest(&digest, &self.options.output_dir).map_err(|source| Error::Io {
            path: self.options.output_dir.join(crate::fingerprint::HASH_FILE_NAME),
            source,
        })?;

        Ok(Outcome::Generated {
            written,
            digest,
            diagnostics: ctx.diagnostics,
        })
    }
}
