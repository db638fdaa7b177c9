use std::rc::Rc;

use tempfile::TempDir;

use svn_prefs_core::backend::MemoryKeyValueStore;
use svn_prefs_core::context::PreferencesContext;
use svn_prefs_core::icons::{IconHandle, IconSource};

/// Resolves every resource name to an in-memory handle.
pub struct AllIcons;

impl IconSource for AllIcons {
    fn load(&self, name: &str) -> Option<IconHandle> {
        Some(IconHandle::new(name, None))
    }
}

pub struct Fixture {
    pub temp: TempDir,
    pub user_store: Rc<MemoryKeyValueStore>,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().unwrap(),
            user_store: Rc::new(MemoryKeyValueStore::new()),
        }
    }

    pub fn context(&self) -> PreferencesContext {
        PreferencesContext::new(
            self.temp.path().join("project"),
            self.user_store.clone(),
            Rc::new(AllIcons),
        )
    }
}
