//! Backing stores for the two preference scopes.
//!
//! - User scope: a host key-value settings store (one JSON payload per key)
//! - Project scope: a JSON file under the project's settings directory

pub mod key_value;
pub mod paths;

pub use key_value::{JsonFileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use paths::{
    PREFERENCES_KEY, PROJECT_PREFERENCES_FILE, default_user_store_path,
    project_preferences_path,
};
