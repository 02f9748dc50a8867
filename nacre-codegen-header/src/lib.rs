//! C++ header generator for nacre.
//!
//! Emits one header per input file that carries a header output hint:
//! an include guard, nested namespace blocks, and one declaration per
//! definition, shaped by the definition's resolved binding model.

mod generator;
mod render;

pub use generator::HeaderGenerator;
