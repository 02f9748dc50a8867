//! Markdown documentation generator for nacre.
//!
//! Emits one Markdown page per input file describing its definitions and
//! how each one is bound, plus an `index.md` covering the whole run.

mod generator;

pub use generator::DocsGenerator;
