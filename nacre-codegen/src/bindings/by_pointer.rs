use nacre_syntax::{BindingModel, Definition, PassBy, Representation, Storage};

/// By-pointer binding: the object lives behind a pointer for its whole
/// lifetime; ownership never crosses the boundary.
pub struct ByPointerBinding;

impl BindingModel for ByPointerBinding {
    fn name(&self) -> &str {
        "by_pointer"
    }

    fn representation(&self, _definition: &Definition) -> Representation {
        Representation {
            storage: Storage::Pointer,
            param_by: PassBy::Pointer,
            return_by: PassBy::Pointer,
        }
    }
}
