//! Core utilities for the nacre IDL code generator.
//!
//! This crate holds the pieces shared by every generator: the deferred
//! output-file type and its write rules. Generators build [`OutputFile`]
//! values instead of touching the filesystem so the pipeline can commit
//! all outputs in one pass, after every generator has succeeded.

mod file;

pub use file::{OutputFile, Overwrite, WriteResult};
