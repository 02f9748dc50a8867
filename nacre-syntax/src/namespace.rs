use crate::definition::Definition;
use crate::source::SourceLocation;

/// An ordered container of definitions.
///
/// The root namespace has the empty name and no location; it is the single
/// merge point of every parsed file plus the built-in native types.
#[derive(Debug, Clone)]
pub struct Namespace {
    pub name: String,
    pub location: Option<SourceLocation>,
    pub definitions: Vec<Definition>,
}

impl Namespace {
    pub fn new(
        name: impl Into<String>,
        location: Option<SourceLocation>,
        definitions: Vec<Definition>,
    ) -> Self {
        Self {
            name: name.into(),
            location,
            definitions,
        }
    }

    /// The unnamed root namespace wrapping all merged definitions.
    pub fn root(definitions: Vec<Definition>) -> Self {
        Self::new("", None, definitions)
    }

    /// Look up a definition by `::`-separated path, e.g. `std::string`.
    ///
    /// Returns the first match in declaration order; duplicate names are
    /// not resolved here.
    pub fn lookup(&self, path: &str) -> Option<&Definition> {
        let (head, rest) = match path.split_once("::") {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };
        let def = self.definitions.iter().find(|d| d.name == head)?;
        match rest {
            None => Some(def),
            Some(rest) => def.nested.as_ref()?.lookup(rest),
        }
    }

    /// Iterate over the direct children.
    pub fn iter(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
