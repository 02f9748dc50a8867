//! The built-in binding models.
//!
//! Each model is a small strategy mapping a definition to a
//! [`Representation`](nacre_syntax::Representation). The registry seeds
//! all six by name; invocation-time plugin modules may replace any of
//! them.

mod by_pointer;
mod by_value;
mod callback;
mod enums;
mod pod;
mod unsized_array;

use std::sync::Arc;

use nacre_syntax::BindingMap;

pub use by_pointer::ByPointerBinding;
pub use by_value::ByValueBinding;
pub use callback::CallbackBinding;
pub use enums::EnumBinding;
pub use pod::PodBinding;
pub use unsized_array::UnsizedArrayBinding;

/// The default binding models, in registration order.
pub fn builtin_bindings() -> BindingMap {
    let mut map = BindingMap::new();
    map.insert("pod".to_string(), Arc::new(PodBinding) as _);
    map.insert("enum".to_string(), Arc::new(EnumBinding) as _);
    map.insert("callback".to_string(), Arc::new(CallbackBinding) as _);
    map.insert("by_value".to_string(), Arc::new(ByValueBinding) as _);
    map.insert("by_pointer".to_string(), Arc::new(ByPointerBinding) as _);
    map.insert(
        "unsized_array".to_string(),
        Arc::new(UnsizedArrayBinding) as _,
    );
    map
}
