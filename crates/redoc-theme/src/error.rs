//! Error types.
//!
//! Theme resolution itself cannot fail. Errors only come from reading
//! configuration and from per-page props that name no spec, or two.

use std::path::PathBuf;

/// Errors raised at the configuration boundary.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// Configuration content could not be parsed.
    #[error("Failed to parse {}: {message}", describe_source(path))]
    Parse {
        /// Source file, if the content came from disk.
        path: Option<PathBuf>,
        /// Parser message.
        message: String,
    },

    /// Configuration file could not be read.
    #[error("Failed to load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A page supplied neither `spec` nor `specUrl`.
    #[error("Redoc needs a spec: set either `spec` or `specUrl`")]
    MissingSpecSource,

    /// A page supplied both `spec` and `specUrl`.
    #[error("`spec` and `specUrl` are mutually exclusive; set only one")]
    ConflictingSpecSource,
}

fn describe_source(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => p.display().to_string(),
        None => "theme config".to_string(),
    }
}

impl ThemeError {
    pub(crate) fn parse(path: Option<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path,
            message: message.into(),
        }
    }
}
