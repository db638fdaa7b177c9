//! Typed errors surfaced by the preferences store.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("Malformed user preferences stored under key '{key}'")]
    MalformedUserPreferences {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed project preferences file: {}", path.display())]
    MalformedProjectPreferences {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown preference field: {0}")]
    UnknownField(String),

    #[error("Invalid value '{value}' for preference field '{field}'")]
    InvalidValue { field: String, value: String },
}
