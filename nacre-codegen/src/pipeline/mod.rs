//! The generation pipeline.
//!
//! Stages run strictly in order within one invocation:
//! fingerprint gate, parse, merge, finalize, dispatch, commit. A run
//! either completes fully (outputs committed, fingerprint persisted) or
//! aborts before any output is committed.

mod context;
mod diagnostic;
mod runner;

pub use context::GenerationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use runner::{Options, Outcome, Pipeline};
