use nacre_syntax::{BindingModel, Definition, PassBy, Representation, Storage};

/// Callback binding: an owned closure object held and handed around
/// behind a pointer.
pub struct CallbackBinding;

impl BindingModel for CallbackBinding {
    fn name(&self) -> &str {
        "callback"
    }

    fn representation(&self, _definition: &Definition) -> Representation {
        Representation {
            storage: Storage::Pointer,
            param_by: PassBy::Pointer,
            return_by: PassBy::Pointer,
        }
    }
}
