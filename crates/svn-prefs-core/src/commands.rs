//! Preference edits shared by the text front ends.
//!
//! Each command reads the current records from a store, applies one change
//! and saves only when something actually changed.

use crate::edit::PreferenceField;
use crate::preferences::{ProjectPreferences, UserPreferences};
use crate::store::PreferencesStore;

/// Which records `reset` restores to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetScope {
    User,
    Project,
    Both,
}

impl ResetScope {
    /// Both flags set or both unset selects every scope.
    pub fn from_flags(user_only: bool, project_only: bool) -> Self {
        match (user_only, project_only) {
            (true, false) => ResetScope::User,
            (false, true) => ResetScope::Project,
            _ => ResetScope::Both,
        }
    }

    fn includes_user(self) -> bool {
        matches!(self, ResetScope::User | ResetScope::Both)
    }

    fn includes_project(self) -> bool {
        matches!(self, ResetScope::Project | ResetScope::Both)
    }
}

/// Parse `field`, store `value` in it and save.
pub fn set_field(
    store: &PreferencesStore,
    field: &str,
    value: &str,
) -> anyhow::Result<PreferenceField> {
    let field: PreferenceField = field.parse()?;
    let mut user = store.user_preferences();
    let mut project = store.project_preferences();

    field.set(&mut user, &mut project, value)?;
    store.save(user, project)?;
    Ok(field)
}

/// Exclude `path`. Returns false, without saving, if it was already excluded.
pub fn exclude_add(store: &PreferencesStore, path: &str) -> anyhow::Result<bool> {
    let mut project = store.project_preferences();
    if !project.add_excluded_path(path) {
        return Ok(false);
    }
    store.save(store.user_preferences(), project)?;
    Ok(true)
}

/// Stop excluding `path`. Returns false, without saving, if it was not excluded.
pub fn exclude_remove(store: &PreferencesStore, path: &str) -> anyhow::Result<bool> {
    let mut project = store.project_preferences();
    if !project.remove_excluded_path(path) {
        return Ok(false);
    }
    store.save(store.user_preferences(), project)?;
    Ok(true)
}

pub fn reset(store: &PreferencesStore, scope: ResetScope) -> anyhow::Result<()> {
    let user = if scope.includes_user() {
        UserPreferences::default()
    } else {
        store.user_preferences()
    };
    let project = if scope.includes_project() {
        ProjectPreferences::default()
    } else {
        store.project_preferences()
    };

    tracing::debug!("Resetting SVN preferences: {:?}", scope);
    store.save(user, project)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_scope_from_flags() {
        assert_eq!(ResetScope::from_flags(false, false), ResetScope::Both);
        assert_eq!(ResetScope::from_flags(true, true), ResetScope::Both);
        assert_eq!(ResetScope::from_flags(true, false), ResetScope::User);
        assert_eq!(ResetScope::from_flags(false, true), ResetScope::Project);
    }
}
