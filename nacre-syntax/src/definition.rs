use indexmap::IndexMap;

use crate::binding::Representation;
use crate::namespace::Namespace;
use crate::source::SourceLocation;

/// Attribute key that names an explicit binding model.
pub const BINDING_MODEL_ATTR: &str = "binding_model";

/// The kind of a definition.
///
/// Kinds beyond `Native` come from the parser and are opaque to the
/// orchestration core; generators and binding models give them meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionKind {
    /// Built-in primitive, always bound as `pod`.
    Native,
    Struct,
    Class,
    Enum,
    Callback,
    /// A nested namespace; carries children, never a binding model.
    Namespace,
}

impl DefinitionKind {
    /// The binding model used when no `binding_model` attribute is given.
    pub fn default_binding_model(self) -> Option<&'static str> {
        match self {
            DefinitionKind::Native => Some("pod"),
            DefinitionKind::Struct => Some("by_value"),
            DefinitionKind::Class => Some("by_pointer"),
            DefinitionKind::Enum => Some("enum"),
            DefinitionKind::Callback => Some("callback"),
            DefinitionKind::Namespace => None,
        }
    }
}

/// One entry in the symbol table.
///
/// Immutable once finalized: the finalize pass is the only writer of
/// `resolved_model`, and it runs exactly once per run.
#[derive(Debug, Clone)]
pub struct Definition {
    pub name: String,
    pub location: Option<SourceLocation>,
    pub attributes: IndexMap<String, String>,
    pub kind: DefinitionKind,
    /// Whether this definition names a type.
    pub is_type: bool,
    /// Children, for `Namespace` definitions.
    pub nested: Option<Namespace>,
    /// Underlying primitive representation, for `Native` definitions.
    pub podtype: Option<String>,
    resolved_model: Option<String>,
    resolved_repr: Option<Representation>,
}

impl Definition {
    pub fn new(name: impl Into<String>, kind: DefinitionKind, location: SourceLocation) -> Self {
        Self {
            name: name.into(),
            location: Some(location),
            attributes: IndexMap::new(),
            kind,
            is_type: kind != DefinitionKind::Namespace,
            nested: None,
            podtype: None,
            resolved_model: None,
            resolved_repr: None,
        }
    }

    /// A built-in native type. Always binds as `pod`, whatever its attributes say.
    pub fn native(
        name: impl Into<String>,
        podtype: impl Into<String>,
        location: SourceLocation,
    ) -> Self {
        let mut attributes = IndexMap::new();
        attributes.insert(BINDING_MODEL_ATTR.to_string(), "pod".to_string());
        Self {
            name: name.into(),
            location: Some(location),
            attributes,
            kind: DefinitionKind::Native,
            is_type: true,
            nested: None,
            podtype: Some(podtype.into()),
            resolved_model: None,
            resolved_repr: None,
        }
    }

    /// Wrap a namespace as a definition so it can sit in a definition list.
    pub fn namespace(namespace: Namespace) -> Self {
        Self {
            name: namespace.name.clone(),
            location: namespace.location.clone(),
            attributes: IndexMap::new(),
            kind: DefinitionKind::Namespace,
            is_type: false,
            nested: Some(namespace),
            podtype: None,
            resolved_model: None,
            resolved_repr: None,
        }
    }

    /// Replace the attribute map (builder style).
    pub fn with_attributes(mut self, attributes: IndexMap<String, String>) -> Self {
        self.attributes = attributes;
        self
    }

    /// The binding-model name this definition asks for.
    ///
    /// Native types always answer `pod`; everything else consults the
    /// `binding_model` attribute, then the kind default.
    pub fn declared_model(&self) -> Option<&str> {
        if self.kind == DefinitionKind::Native {
            return Some("pod");
        }
        self.attributes
            .get(BINDING_MODEL_ATTR)
            .map(String::as_str)
            .or_else(|| self.kind.default_binding_model())
    }

    /// The binding model resolved by the finalize pass, if it has run.
    pub fn resolved_model(&self) -> Option<&str> {
        self.resolved_model.as_deref()
    }

    /// The representation computed by the finalize pass, if it has run.
    pub fn representation(&self) -> Option<Representation> {
        self.resolved_repr
    }

    pub(crate) fn set_resolved(&mut self, model: String, repr: Representation) {
        self.resolved_model = Some(model);
        self.resolved_repr = Some(repr);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::source::SourceFile;

    fn loc() -> SourceLocation {
        SourceLocation::new(Arc::new(SourceFile::from_input("a.idl")), 1)
    }

    #[test]
    fn test_native_always_declares_pod() {
        let mut def = Definition::native("int", "int", loc());
        // even a contradictory attribute doesn't change the answer
        def.attributes
            .insert(BINDING_MODEL_ATTR.to_string(), "by_pointer".to_string());
        assert_eq!(def.declared_model(), Some("pod"));
    }

    #[test]
    fn test_attribute_overrides_kind_default() {
        let mut attrs = IndexMap::new();
        attrs.insert(BINDING_MODEL_ATTR.to_string(), "by_pointer".to_string());
        let def = Definition::new("Buffer", DefinitionKind::Struct, loc()).with_attributes(attrs);
        assert_eq!(def.declared_model(), Some("by_pointer"));
    }

    #[test]
    fn test_kind_defaults() {
        assert_eq!(
            Definition::new("Color", DefinitionKind::Enum, loc()).declared_model(),
            Some("enum")
        );
        assert_eq!(
            Definition::new("OnReady", DefinitionKind::Callback, loc()).declared_model(),
            Some("callback")
        );
        assert_eq!(
            Definition::new("Point", DefinitionKind::Struct, loc()).declared_model(),
            Some("by_value")
        );
    }

    #[test]
    fn test_namespace_has_no_model() {
        let ns = Namespace::new("math", None, Vec::new());
        let def = Definition::namespace(ns);
        assert!(!def.is_type);
        assert_eq!(def.declared_model(), None);
    }
}
