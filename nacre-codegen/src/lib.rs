//! Orchestration pipeline for the nacre IDL code generator.
//!
//! This crate is the build-tool half of nacre: the plugin registry, the
//! content-hash incremental gate, and the parse → merge → finalize →
//! generate → commit pipeline with its error and ordering contracts.
//!
//! ```text
//! fingerprint gate → parse (all files) → merge + natives → finalize
//!                  → dispatch generators → commit writers → persist hash
//! ```
//!
//! Concrete generators live in their own crates and plug in through the
//! [`Generator`] trait; binding models plug in through
//! [`nacre_syntax::BindingModel`]. Both can be replaced at invocation
//! time by `name:path` plugin modules.

pub mod bindings;
mod error;
mod fingerprint;
mod generator;
pub mod pipeline;
mod plugin;
mod registry;

pub use error::{Error, Result};
pub use fingerprint::{Fingerprint, HASH_FILE_NAME, cached_digest, persist_digest, should_skip};
pub use generator::{Generator, GeneratorMap};
pub use pipeline::{Diagnostic, GenerationContext, Options, Outcome, Pipeline, Severity};
pub use registry::Registry;
