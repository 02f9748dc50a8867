use nacre_syntax::{BindingModel, Definition, PassBy, Representation, Storage};

/// Plain-old-data binding: stored inline, passed by value.
///
/// String podtypes cross call boundaries by const reference; everything
/// else is cheap enough to copy.
pub struct PodBinding;

impl BindingModel for PodBinding {
    fn name(&self) -> &str {
        "pod"
    }

    fn representation(&self, definition: &Definition) -> Representation {
        let by_ref = matches!(
            definition.podtype.as_deref(),
            Some("string" | "wstring" | "variant")
        );
        Representation {
            storage: Storage::Value,
            param_by: if by_ref {
                PassBy::ConstReference
            } else {
                PassBy::Value
            },
            return_by: PassBy::Value,
        }
    }
}
