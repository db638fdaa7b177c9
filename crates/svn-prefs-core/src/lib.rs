//! SVN Integration Preferences Core Library
//!
//! Loads, caches and persists the per-user and per-project preferences of
//! the SVN editor integration, and exposes the status overlay icons.

pub mod backend;
pub mod commands;
pub mod context;
pub mod edit;
pub mod error;
pub mod events;
pub mod icons;
pub mod preferences;
pub mod registry;
pub mod store;
pub mod types;

/// Re-exports of commonly used types
pub mod prelude {
    // Preferences
    pub use crate::preferences::{ProjectPreferences, UserPreferences};
    pub use crate::edit::PreferenceField;
    pub use crate::store::{PreferencesSnapshot, PreferencesStore};

    // Backends
    pub use crate::backend::{JsonFileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
    pub use crate::context::PreferencesContext;

    // Icons
    pub use crate::icons::{DirectoryIconSource, IconContent, IconHandle, IconSource};

    // Commands
    pub use crate::commands::ResetScope;

    // Events
    pub use crate::events::Subscription;

    // Status types
    pub use crate::types::{FileStatus, LockStatus, RemoteStatus, TraceLogLevel};

    pub use crate::error::PreferencesError;
}
