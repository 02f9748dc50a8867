use std::sync::Arc;

use indexmap::IndexMap;

use crate::definition::Definition;

/// How a bound value is stored in generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    /// Stored inline, by value.
    Value,
    /// Stored behind a pointer.
    Pointer,
    /// Stored as a pointer-and-size pair.
    Array,
}

/// How a bound value crosses a call boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassBy {
    Value,
    ConstReference,
    Pointer,
}

/// How a definition maps to target-language representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Representation {
    pub storage: Storage,
    pub param_by: PassBy,
    pub return_by: PassBy,
}

/// A pluggable strategy describing how definitions bound to it are
/// represented. Concrete models are registered by name; the finalize pass
/// only checks that each definition's declared model exists.
pub trait BindingModel: Send + Sync {
    /// The name this model describes itself as (registry keys are what
    /// resolution actually uses).
    fn name(&self) -> &str;

    /// The representation for a definition bound to this model.
    fn representation(&self, definition: &Definition) -> Representation;
}

/// Name-keyed binding models, in registration order.
pub type BindingMap = IndexMap<String, Arc<dyn BindingModel>>;
