use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for nacre-syntax operations (boxed to reduce size on stack).
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(nacre::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("unknown binding model '{model}' for '{definition}'")]
    #[diagnostic(
        code(nacre::unknown_binding_model),
        help("register the model with --binding-module {model}:<path>, or fix the binding_model attribute")
    )]
    UnknownBindingModel {
        definition: String,
        model: String,
        location: Option<String>,
    },
}

impl Error {
    /// Create an io error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a parse error with source context and an optional span.
    pub fn parse(
        message: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: message.into(),
        })
    }

    /// Create an unknown-binding-model error for a definition.
    pub fn unknown_binding_model(
        definition: impl Into<String>,
        model: impl Into<String>,
        location: Option<String>,
    ) -> Box<Self> {
        Box::new(Error::UnknownBindingModel {
            definition: definition.into(),
            model: model.into(),
            location,
        })
    }
}
