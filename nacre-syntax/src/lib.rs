//! Definition tree and parsing for the nacre IDL code generator.
//!
//! This crate owns the symbol-table side of the tool:
//!
//! - [`Definition`] and [`Namespace`] — the tree produced by parsing,
//!   merged across input files into one root namespace;
//! - [`SourceFile`] / [`SourceLocation`] — provenance plus per-file
//!   output-path hints consumed by generators;
//! - the built-in native-type catalog ([`builtin_definitions`]);
//! - the [`BindingModel`] trait, the seam between the tree and the
//!   pluggable representation strategies;
//! - [`finalize`] — the one pass allowed to reject a run, resolving
//!   every definition's binding model against the registered map.

mod binding;
mod definition;
mod error;
mod finalize;
mod native;
mod namespace;
mod parse;
mod source;

pub use binding::{BindingMap, BindingModel, PassBy, Representation, Storage};
pub use definition::{BINDING_MODEL_ATTR, Definition, DefinitionKind};
pub use error::{Error, Result};
pub use finalize::finalize;
pub use native::builtin_definitions;
pub use namespace::Namespace;
pub use parse::{ParsedFile, parse_file, parse_source};
pub use source::{SourceFile, SourceLocation};
