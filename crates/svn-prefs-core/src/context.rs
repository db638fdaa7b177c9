//! Backends a preferences store talks to.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::backend::{JsonFileKeyValueStore, KeyValueStore, paths};
use crate::icons::{DirectoryIconSource, IconSource};

/// Project root, user settings store and icon source in one bundle.
///
/// Hosts create this once and hand it to [`crate::store::PreferencesStore`].
#[derive(Clone)]
pub struct PreferencesContext {
    project_root: PathBuf,
    user_store: Rc<dyn KeyValueStore>,
    icon_source: Rc<dyn IconSource>,
}

impl PreferencesContext {
    /// Create a context with explicit backends.
    pub fn new(
        project_root: PathBuf,
        user_store: Rc<dyn KeyValueStore>,
        icon_source: Rc<dyn IconSource>,
    ) -> Self {
        Self {
            project_root,
            user_store,
            icon_source,
        }
    }

    /// Context for the project in the current directory, with the user store
    /// in the platform config directory and icons under `Assets/`.
    pub fn from_env() -> anyhow::Result<Self> {
        let project_root = std::env::current_dir()?;
        Self::for_project(project_root)
    }

    pub fn for_project(project_root: PathBuf) -> anyhow::Result<Self> {
        let user_store = JsonFileKeyValueStore::new(paths::default_user_store_path()?);
        let icon_source = DirectoryIconSource::new(project_root.join("Assets"));
        Ok(Self::new(
            project_root,
            Rc::new(user_store),
            Rc::new(icon_source),
        ))
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn user_store(&self) -> &dyn KeyValueStore {
        self.user_store.as_ref()
    }

    pub fn icon_source(&self) -> &dyn IconSource {
        self.icon_source.as_ref()
    }

    /// Location of the project preferences file.
    pub fn project_preferences_path(&self) -> PathBuf {
        paths::project_preferences_path(&self.project_root)
    }
}

impl std::fmt::Debug for PreferencesContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferencesContext")
            .field("project_root", &self.project_root)
            .field("user_store", &self.user_store.location())
            .finish_non_exhaustive()
    }
}
