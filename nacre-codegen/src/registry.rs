//! The plugin registry: name → implementation for binding models and
//! generators.
//!
//! Populated once at startup: built-in defaults first, then any
//! invocation-supplied `name:path` modules, which overwrite by name —
//! last registered wins, so a user module can replace a built-in by
//! choosing the same name.

use std::path::PathBuf;
use std::sync::Arc;

use nacre_syntax::{BindingMap, BindingModel};

use crate::bindings::builtin_bindings;
use crate::error::{Error, Result};
use crate::fingerprint::Fingerprint;
use crate::generator::{Generator, GeneratorMap};
use crate::plugin::{DescriptorKind, PluginDescriptor};

pub struct Registry {
    bindings: BindingMap,
    generators: GeneratorMap,
}

impl Registry {
    /// An empty registry. Most callers want [`Registry::with_builtin_bindings`].
    pub fn new() -> Self {
        Self {
            bindings: BindingMap::new(),
            generators: GeneratorMap::new(),
        }
    }

    /// A registry seeded with the six built-in binding models. Built-in
    /// generators are registered by the caller, which owns them.
    pub fn with_builtin_bindings() -> Self {
        Self {
            bindings: builtin_bindings(),
            generators: GeneratorMap::new(),
        }
    }

    /// Register a binding model, overwriting any existing entry of that name.
    pub fn register_binding(&mut self, name: impl Into<String>, model: Arc<dyn BindingModel>) {
        self.bindings.insert(name.into(), model);
    }

    /// Register a generator, overwriting any existing entry of that name.
    pub fn register_generator(&mut self, name: impl Into<String>, generator: Arc<dyn Generator>) {
        self.generators.insert(name.into(), generator);
    }

    pub fn binding(&self, name: &str) -> Option<Arc<dyn BindingModel>> {
        self.bindings.get(name).cloned()
    }

    pub fn generator(&self, name: &str) -> Option<Arc<dyn Generator>> {
        self.generators.get(name).cloned()
    }

    /// The binding-model map handed to the finalize pass.
    pub fn bindings(&self) -> &BindingMap {
        &self.bindings
    }

    /// Load binding-model plugin modules from `name:path` flags.
    ///
    /// Each module's raw bytes are folded into `fingerprint` as part of
    /// loading — fingerprinting and loading are one sequenced pass. An
    /// unreadable path or invalid descriptor is fatal.
    pub fn load_binding_modules(
        &mut self,
        flags: &[String],
        fingerprint: &mut Fingerprint,
    ) -> Result<()> {
        for flag in flags {
            let (name, path) = split_module_flag(flag)?;
            let descriptor = read_descriptor(&name, &path, DescriptorKind::Binding, fingerprint)?;
            let base = self
                .binding(&descriptor.extends)
                .ok_or_else(|| Error::UnknownPluginBase {
                    name: name.clone(),
                    base: descriptor.extends.clone(),
                })?;
            let model = descriptor.into_binding(name.clone(), base);
            self.register_binding(name, model);
        }
        Ok(())
    }

    /// Load generator plugin modules from `name:path` flags. Same
    /// sequencing contract as [`Registry::load_binding_modules`].
    pub fn load_generator_modules(
        &mut self,
        flags: &[String],
        fingerprint: &mut Fingerprint,
    ) -> Result<()> {
        for flag in flags {
            let (name, path) = split_module_flag(flag)?;
            let descriptor = read_descriptor(&name, &path, DescriptorKind::Generator, fingerprint)?;
            let base = self
                .generator(&descriptor.extends)
                .ok_or_else(|| Error::UnknownPluginBase {
                    name: name.clone(),
                    base: descriptor.extends.clone(),
                })?;
            let generator = descriptor.into_generator(name.clone(), base);
            self.register_generator(name, generator);
        }
        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

fn split_module_flag(flag: &str) -> Result<(String, PathBuf)> {
    match flag.split_once(':') {
        Some((name, path)) if !name.is_empty() && !path.is_empty() => {
            Ok((name.to_string(), PathBuf::from(path)))
        }
        _ => Err(Error::InvalidModuleFlag {
            value: flag.to_string(),
        }),
    }
}

fn read_descriptor(
    name: &str,
    path: &PathBuf,
    expected: DescriptorKind,
    fingerprint: &mut Fingerprint,
) -> Result<PluginDescriptor> {
    let bytes = std::fs::read(path).map_err(|source| Error::PluginLoad {
        name: name.to_string(),
        path: path.clone(),
        source,
    })?;
    // hash the module before anything can reject it, so the fingerprint
    // always covers every loaded module
    fingerprint.add_bytes(&bytes);

    let text = String::from_utf8_lossy(&bytes);
    let descriptor: PluginDescriptor =
        toml::from_str(&text).map_err(|source| Error::PluginDescriptor {
            name: name.to_string(),
            path: path.clone(),
            source,
        })?;
    if descriptor.kind != expected {
        return Err(Error::PluginKindMismatch {
            name: name.to_string(),
            expected: expected.as_str(),
            found: descriptor.kind.as_str(),
        });
    }
    Ok(descriptor)
}
