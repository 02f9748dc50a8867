use nacre_syntax::{BindingModel, Definition, PassBy, Representation, Storage};

/// Enumeration binding: an integral value, copied everywhere.
pub struct EnumBinding;

impl BindingModel for EnumBinding {
    fn name(&self) -> &str {
        "enum"
    }

    fn representation(&self, _definition: &Definition) -> Representation {
        Representation {
            storage: Storage::Value,
            param_by: PassBy::Value,
            return_by: PassBy::Value,
        }
    }
}
