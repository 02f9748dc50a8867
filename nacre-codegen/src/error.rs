use std::path::PathBuf;

use thiserror::Error;

/// Result type for nacre-codegen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal pipeline errors.
///
/// Every variant aborts the whole run: no writer executes and the
/// persisted fingerprint is left untouched.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not load module '{name}' from '{path}'")]
    PluginLoad {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid plugin descriptor '{path}' for module '{name}'")]
    PluginDescriptor {
        name: String,
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("plugin module '{name}' extends unknown built-in '{base}'")]
    UnknownPluginBase { name: String, base: String },

    #[error("plugin module '{name}' is a {found} descriptor, expected a {expected}")]
    PluginKindMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid module flag '{value}', expected 'name:path'")]
    InvalidModuleFlag { value: String },

    #[error("unknown generator '{name}'")]
    UnknownGenerator { name: String },

    #[error(transparent)]
    Syntax(#[from] Box<nacre_syntax::Error>),

    #[error("generator '{name}' failed")]
    Generate {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to write '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
