use nacre_syntax::{BindingModel, Definition, PassBy, Representation, Storage};

/// Unsized-array binding: a pointer-and-count pair; the element count is
/// only known at runtime.
pub struct UnsizedArrayBinding;

impl BindingModel for UnsizedArrayBinding {
    fn name(&self) -> &str {
        "unsized_array"
    }

    fn representation(&self, _definition: &Definition) -> Representation {
        Representation {
            storage: Storage::Array,
            param_by: PassBy::Pointer,
            return_by: PassBy::Pointer,
        }
    }
}
