//! The finalize pass: binding-model resolution over the merged tree.
//!
//! Runs exactly once per run, after the root namespace is built and before
//! any generator. This is the one step allowed to reject the whole run.

use crate::binding::BindingMap;
use crate::definition::{Definition, DefinitionKind};
use crate::error::{Error, Result};
use crate::namespace::Namespace;

/// Resolve the binding model of every definition reachable from `root`.
///
/// Resolution is total: every non-namespace definition ends up with a
/// resolved model, or the run aborts with the offending definition and
/// model name.
pub fn finalize(root: &mut Namespace, models: &BindingMap) -> Result<()> {
    for definition in &mut root.definitions {
        finalize_definition(definition, models)?;
    }
    Ok(())
}

fn finalize_definition(definition: &mut Definition, models: &BindingMap) -> Result<()> {
    if definition.kind == DefinitionKind::Namespace {
        if let Some(namespace) = definition.nested.as_mut() {
            for child in &mut namespace.definitions {
                finalize_definition(child, models)?;
            }
        }
        return Ok(());
    }

    // declared_model is Some for every non-namespace kind
    let model = definition
        .declared_model()
        .expect("non-namespace definition without a binding model")
        .to_string();
    let Some(binding) = models.get(&model) else {
        let location = definition.location.as_ref().map(|l| l.to_string());
        return Err(Error::unknown_binding_model(&definition.name, model, location));
    };
    let repr = binding.representation(definition);
    definition.set_resolved(model, repr);
    Ok(())
}
