//! Script-binding glue generator for nacre.
//!
//! Emits a `{stem}_glue.h` / `{stem}_glue.cc` pair per input file: one
//! script-value conversion pair per definition, with parameter and
//! out-parameter spellings shaped by the definition's resolved binding
//! representation.

mod generator;
mod render;

pub use generator::GlueGenerator;
