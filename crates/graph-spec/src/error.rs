// File: crates/graph-spec/src/error.rs
// Summary: Error taxonomy for loading graph descriptions (I/O, JSON, schema, style).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A key is missing or a value has the wrong shape. `path` is a JSON
    /// path such as `[1].series[0].label`.
    #[error("schema error at {path}: {message}")]
    Schema { path: String, message: String },

    #[error("invalid style string {style:?}: {message}")]
    Style { style: String, message: String },
}

impl SpecError {
    pub(crate) fn schema(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Schema { path: path.into(), message: message.into() }
    }

    pub(crate) fn style(style: &str, message: impl Into<String>) -> Self {
        Self::Style { style: style.to_string(), message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, SpecError>;
