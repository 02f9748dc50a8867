use nacre_syntax::{BindingModel, Definition, PassBy, Representation, Storage};

/// By-value binding: stored inline, passed by const reference, returned
/// by value.
pub struct ByValueBinding;

impl BindingModel for ByValueBinding {
    fn name(&self) -> &str {
        "by_value"
    }

    fn representation(&self, _definition: &Definition) -> Representation {
        Representation {
            storage: Storage::Value,
            param_by: PassBy::ConstReference,
            return_by: PassBy::Value,
        }
    }
}
