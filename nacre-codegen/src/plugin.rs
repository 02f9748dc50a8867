//! Invocation-time plugin modules.
//!
//! A plugin module is a TOML descriptor loaded from a `name:path` flag.
//! It names a built-in implementation to extend and the aspects it
//! overrides, so user modules can specialize or replace built-ins without
//! recompiling the tool:
//!
//! ```toml
//! kind = "binding"
//! extends = "by_pointer"
//! param_by = "const_reference"
//! ```
//!
//! ```toml
//! kind = "generator"
//! extends = "header"
//! banner = "// generated by nacre, do not edit"
//! ```

use std::path::Path;
use std::sync::Arc;

use eyre::Result;
use nacre_core::OutputFile;
use nacre_syntax::{BindingModel, Definition, Namespace, ParsedFile, PassBy, Representation, Storage};
use serde::Deserialize;

use crate::generator::Generator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum DescriptorKind {
    Binding,
    Generator,
}

impl DescriptorKind {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            DescriptorKind::Binding => "binding",
            DescriptorKind::Generator => "generator",
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum StorageSpec {
    Value,
    Pointer,
    Array,
}

impl From<StorageSpec> for Storage {
    fn from(spec: StorageSpec) -> Self {
        match spec {
            StorageSpec::Value => Storage::Value,
            StorageSpec::Pointer => Storage::Pointer,
            StorageSpec::Array => Storage::Array,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum PassBySpec {
    Value,
    ConstReference,
    Pointer,
}

impl From<PassBySpec> for PassBy {
    fn from(spec: PassBySpec) -> Self {
        match spec {
            PassBySpec::Value => PassBy::Value,
            PassBySpec::ConstReference => PassBy::ConstReference,
            PassBySpec::Pointer => PassBy::Pointer,
        }
    }
}

/// The parsed form of a plugin module file.
#[derive(Debug, Deserialize)]
pub(crate) struct PluginDescriptor {
    pub(crate) kind: DescriptorKind,
    pub(crate) extends: String,
    #[serde(default)]
    storage: Option<StorageSpec>,
    #[serde(default)]
    param_by: Option<PassBySpec>,
    #[serde(default)]
    return_by: Option<PassBySpec>,
    #[serde(default)]
    banner: Option<String>,
}

impl PluginDescriptor {
    /// Build the binding model this descriptor describes, delegating to
    /// `base` for anything not overridden.
    pub(crate) fn into_binding(
        self,
        name: String,
        base: Arc<dyn BindingModel>,
    ) -> Arc<dyn BindingModel> {
        Arc::new(DescribedBinding {
            name,
            base,
            storage: self.storage.map(Into::into),
            param_by: self.param_by.map(Into::into),
            return_by: self.return_by.map(Into::into),
        })
    }

    /// Build the generator this descriptor describes.
    pub(crate) fn into_generator(self, name: String, base: Arc<dyn Generator>) -> Arc<dyn Generator> {
        Arc::new(DescribedGenerator {
            name,
            base,
            banner: self.banner,
        })
    }
}

/// A binding model assembled from a plugin descriptor.
struct DescribedBinding {
    name: String,
    base: Arc<dyn BindingModel>,
    storage: Option<Storage>,
    param_by: Option<PassBy>,
    return_by: Option<PassBy>,
}

impl BindingModel for DescribedBinding {
    fn name(&self) -> &str {
        &self.name
    }

    fn representation(&self, definition: &Definition) -> Representation {
        let base = self.base.representation(definition);
        Representation {
            storage: self.storage.unwrap_or(base.storage),
            param_by: self.param_by.unwrap_or(base.param_by),
            return_by: self.return_by.unwrap_or(base.return_by),
        }
    }
}

/// A generator assembled from a plugin descriptor.
struct DescribedGenerator {
    name: String,
    base: Arc<dyn Generator>,
    banner: Option<String>,
}

impl Generator for DescribedGenerator {
    fn name(&self) -> &str {
        &self.name
    }

    fn process(
        &self,
        output_dir: &Path,
        pairs: &[ParsedFile],
        root: &Namespace,
    ) -> Result<Vec<OutputFile>> {
        let files = self.base.process(output_dir, pairs, root)?;
        let Some(banner) = &self.banner else {
            return Ok(files);
        };
        Ok(files
            .into_iter()
            .map(|file| {
                let content = format!("{banner}\n{}", file.content());
                OutputFile::new(file.path(), content).with_overwrite(file.overwrite())
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BaseModel;

    impl BindingModel for BaseModel {
        fn name(&self) -> &str {
            "base"
        }

        fn representation(&self, _definition: &Definition) -> Representation {
            Representation {
                storage: Storage::Value,
                param_by: PassBy::Value,
                return_by: PassBy::Value,
            }
        }
    }

    fn definition() -> Definition {
        use nacre_syntax::{DefinitionKind, SourceFile, SourceLocation};
        Definition::new(
            "Point",
            DefinitionKind::Struct,
            SourceLocation::builtin(SourceFile::builtin()),
        )
    }

    #[test]
    fn test_descriptor_parses() {
        let descriptor: PluginDescriptor =
            toml::from_str("kind = \"binding\"\nextends = \"pod\"\nparam_by = \"pointer\"\n")
                .unwrap();
        assert_eq!(descriptor.kind, DescriptorKind::Binding);
        assert_eq!(descriptor.extends, "pod");
    }

    #[test]
    fn test_descriptor_rejects_unknown_kind() {
        let parsed: std::result::Result<PluginDescriptor, _> =
            toml::from_str("kind = \"linker\"\nextends = \"pod\"\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_described_binding_overrides_selected_aspects() {
        let descriptor: PluginDescriptor =
            toml::from_str("kind = \"binding\"\nextends = \"base\"\nparam_by = \"pointer\"\n")
                .unwrap();
        let model = descriptor.into_binding("custom".to_string(), Arc::new(BaseModel));

        let repr = model.representation(&definition());
        assert_eq!(repr.param_by, PassBy::Pointer, "overridden");
        assert_eq!(repr.storage, Storage::Value, "inherited from base");
        assert_eq!(model.name(), "custom");
    }
}
