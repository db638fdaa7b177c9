//! Backing store location helpers.

use std::path::{Path, PathBuf};

/// Key of the user preferences payload in the key-value store.
pub const PREFERENCES_KEY: &str = "SVNSimpleIntegration";

/// Project preferences file, relative to the project root.
pub const PROJECT_PREFERENCES_FILE: &str = "ProjectSettings/SVNSimpleIntegration.prefs";

pub fn project_preferences_path(project_root: &Path) -> PathBuf {
    project_root.join(PROJECT_PREFERENCES_FILE)
}

/// Default location of the file-backed user key-value store.
pub fn default_user_store_path() -> anyhow::Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    Ok(config_dir
        .join("svn-simple-integration")
        .join("editor-prefs.json"))
}
