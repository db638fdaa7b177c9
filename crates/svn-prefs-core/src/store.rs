//! Preferences store: loads, caches and persists both preference scopes.

use std::cell::{Cell, RefCell};
use std::path::Path;
use std::rc::Rc;

use anyhow::Context;

use crate::backend::PREFERENCES_KEY;
use crate::context::PreferencesContext;
use crate::error::PreferencesError;
use crate::events::{ChangeNotifier, Subscription};
use crate::icons::{IconCache, IconContent};
use crate::preferences::{ProjectPreferences, UserPreferences};
use crate::registry::{Lifetime, ObjectRegistry};
use crate::types::{FileStatus, LockStatus, RemoteStatus};

thread_local! {
    static INSTANCE: RefCell<Option<Rc<PreferencesStore>>> = const { RefCell::new(None) };
    static CONTEXT: RefCell<Option<PreferencesContext>> = const { RefCell::new(None) };
}

/// State parked in the [`ObjectRegistry`] so the store survives a reload of
/// the scripting layer without re-reading its backing stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferencesSnapshot {
    pub user: UserPreferences,
    pub project: ProjectPreferences,
}

#[derive(Debug, Default)]
struct State {
    user: UserPreferences,
    project: ProjectPreferences,
    icons: IconCache,
}

/// Owner of the user and project preferences.
///
/// Most callers go through [`PreferencesStore::instance`]; standalone stores
/// can be created with [`PreferencesStore::open`].
#[derive(Debug)]
pub struct PreferencesStore {
    context: PreferencesContext,
    state: RefCell<State>,
    changed: ChangeNotifier,
    parked: Cell<bool>,
}

impl PreferencesStore {
    /// Store with default preferences and an empty icon cache. Call
    /// [`load`](Self::load) to populate it.
    pub fn new(context: PreferencesContext) -> Self {
        Self {
            context,
            state: RefCell::new(State::default()),
            changed: ChangeNotifier::new(),
            parked: Cell::new(false),
        }
    }

    /// Create a store and load it from its backing stores.
    pub fn open(context: PreferencesContext) -> anyhow::Result<Self> {
        let store = Self::new(context);
        store.load()?;
        Ok(store)
    }

    fn from_snapshot(context: PreferencesContext, snapshot: PreferencesSnapshot) -> Self {
        let icons = IconCache::build(context.icon_source());
        Self {
            context,
            state: RefCell::new(State {
                user: snapshot.user,
                project: snapshot.project,
                icons,
            }),
            changed: ChangeNotifier::new(),
            parked: Cell::new(false),
        }
    }

    /// Set the backends used when the shared instance is first created.
    /// Has no effect on an instance that already exists.
    pub fn install_context(context: PreferencesContext) {
        CONTEXT.with(|slot| *slot.borrow_mut() = Some(context));
    }

    fn installed_context() -> anyhow::Result<PreferencesContext> {
        if let Some(context) = CONTEXT.with(|slot| slot.borrow().clone()) {
            return Ok(context);
        }
        let context = PreferencesContext::from_env()
            .context("Failed to resolve default preferences context")?;
        CONTEXT.with(|slot| *slot.borrow_mut() = Some(context.clone()));
        Ok(context)
    }

    /// The shared instance for the host thread.
    ///
    /// Recovers a store parked before a reload when there is one, otherwise
    /// creates and loads a new store. Repeated calls return the same `Rc`.
    pub fn instance() -> anyhow::Result<Rc<PreferencesStore>> {
        if let Some(store) = INSTANCE.with(|slot| slot.borrow().clone()) {
            return Ok(store);
        }

        let context = Self::installed_context()?;
        let store = match ObjectRegistry::find::<PreferencesSnapshot>() {
            Some(snapshot) => {
                tracing::debug!("Restoring SVN preferences from registry snapshot");
                Self::from_snapshot(context, snapshot)
            }
            None => Self::open(context)?,
        };
        store.park_snapshot();

        let store = Rc::new(store);
        INSTANCE.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&store)));
        Ok(store)
    }

    /// Park the shared instance in the registry and drop the cached handle,
    /// as happens when the host reloads its scripting layer. Subscribers do
    /// not carry over.
    pub fn prepare_for_reload() {
        if let Some(store) = INSTANCE.with(|slot| slot.borrow_mut().take()) {
            store.park_snapshot();
            tracing::debug!("SVN preferences parked for reload");
        }
    }

    fn park_snapshot(&self) {
        self.parked.set(true);
        ObjectRegistry::register(self.snapshot(), Lifetime::Persistent);
    }

    pub fn snapshot(&self) -> PreferencesSnapshot {
        let state = self.state.borrow();
        PreferencesSnapshot {
            user: state.user.clone(),
            project: state.project.clone(),
        }
    }

    pub fn context(&self) -> &PreferencesContext {
        &self.context
    }

    /// Read both scopes from their backing stores and rebuild the icon cache.
    ///
    /// Missing data resolves to defaults. Malformed data fails with a
    /// [`PreferencesError`] and leaves the current state untouched.
    pub fn load(&self) -> anyhow::Result<()> {
        let user = self.read_user_preferences()?;
        let project = read_project_preferences(&self.context.project_preferences_path())?;
        let icons = IconCache::build(self.context.icon_source());

        tracing::info!(
            "SVN Integration: core integration is {}",
            if user.core_integration_enabled {
                "enabled"
            } else {
                "disabled"
            }
        );

        *self.state.borrow_mut() = State {
            user,
            project,
            icons,
        };
        if self.parked.get() {
            self.park_snapshot();
        }
        Ok(())
    }

    fn read_user_preferences(&self) -> anyhow::Result<UserPreferences> {
        let payload = self
            .context
            .user_store()
            .get_string(PREFERENCES_KEY)
            .context("Failed to read user preferences")?;

        match payload {
            Some(payload) if !payload.trim().is_empty() => serde_json::from_str(&payload)
                .map_err(|source| {
                    PreferencesError::MalformedUserPreferences {
                        key: PREFERENCES_KEY.to_string(),
                        source,
                    }
                    .into()
                }),
            _ => Ok(UserPreferences::default()),
        }
    }

    /// Replace both records, persist them, then notify subscribers.
    ///
    /// There is no rollback: if the project file cannot be written, the new
    /// values are already in memory and in the user store.
    pub fn save(&self, user: UserPreferences, project: ProjectPreferences) -> anyhow::Result<()> {
        {
            let mut state = self.state.borrow_mut();
            state.user = user;
            state.project = project;
        }
        let snapshot = self.snapshot();

        let payload = serde_json::to_string(&snapshot.user)
            .context("Failed to serialize user preferences")?;
        self.context
            .user_store()
            .set_string(PREFERENCES_KEY, &payload)
            .context("Failed to write user preferences")?;

        write_project_preferences(&self.context.project_preferences_path(), &snapshot.project)?;
        tracing::debug!("SVN preferences saved");

        if self.parked.get() {
            ObjectRegistry::register(snapshot, Lifetime::Persistent);
        }

        self.changed.notify();
        Ok(())
    }

    /// Copy of the user preferences.
    pub fn user_preferences(&self) -> UserPreferences {
        self.state.borrow().user.clone()
    }

    /// Copy of the project preferences.
    pub fn project_preferences(&self) -> ProjectPreferences {
        self.state.borrow().project.clone()
    }

    pub fn file_status_icon(&self, status: FileStatus) -> IconContent {
        self.state.borrow().icons.file_status(status).clone()
    }

    pub fn lock_status_icon(&self, status: LockStatus) -> IconContent {
        self.state.borrow().icons.lock_status(status).clone()
    }

    /// Only [`RemoteStatus::Modified`] has an icon.
    pub fn remote_status_icon(&self, status: RemoteStatus) -> Option<IconContent> {
        self.state.borrow().icons.remote_status(status).cloned()
    }

    /// Listen for `PreferencesChanged`, fired after every successful save.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Subscription {
        self.changed.subscribe(listener)
    }

    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.changed.unsubscribe(subscription)
    }
}

fn read_project_preferences(path: &Path) -> anyhow::Result<ProjectPreferences> {
    if !path.exists() {
        return Ok(ProjectPreferences::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read project preferences: {}", path.display()))?;
    if content.trim().is_empty() {
        return Ok(ProjectPreferences::default());
    }
    serde_json::from_str(&content).map_err(|source| {
        PreferencesError::MalformedProjectPreferences {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

fn write_project_preferences(path: &Path, project: &ProjectPreferences) -> anyhow::Result<()> {
    let content = serde_json::to_string_pretty(project)
        .context("Failed to serialize project preferences")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create settings directory: {}", parent.display())
        })?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write project preferences: {}", path.display()))?;
    Ok(())
}
