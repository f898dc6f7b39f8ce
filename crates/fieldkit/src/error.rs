use std::path::PathBuf;

use thiserror::Error;

use crate::InputKind;

/// Errors raised while rendering a single input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unrecognized input kind `{0}`")]
    UnknownKind(String),

    #[error("input kind `{0}` has no renderer")]
    UnsupportedKind(InputKind),

    #[error("radio input `{label}` has no radio group")]
    MissingRadioGroup { label: String },

    #[error("duplicate radio option key `{key}`")]
    DuplicateRadioKey { key: String },
}

/// Errors raised while loading or rendering a form descriptor file
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML descriptor: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON descriptor: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported descriptor format `{0}` (expected .toml or .json)")]
    UnsupportedFormat(String),

    #[error("field {index} (`{label}`): {source}")]
    Field {
        index: usize,
        label: String,
        #[source]
        source: InputError,
    },
}
