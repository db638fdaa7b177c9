//! Integration tests for the preference edit commands

mod support;

use svn_prefs_core::commands::{self, ResetScope};
use svn_prefs_core::edit::PreferenceField;
use svn_prefs_core::error::PreferencesError;
use svn_prefs_core::preferences::{ProjectPreferences, UserPreferences};
use svn_prefs_core::store::PreferencesStore;
use svn_prefs_core::types::TraceLogLevel;

use support::Fixture;

fn customized_store(fixture: &Fixture) -> PreferencesStore {
    let store = PreferencesStore::open(fixture.context()).unwrap();
    let user = UserPreferences {
        lock_checking_enabled: true,
        trace_log_level: TraceLogLevel::All,
        ..Default::default()
    };
    let project = ProjectPreferences {
        cli_executable_path: "/opt/svn/bin/svn".to_string(),
        excluded_paths: vec!["Assets/Generated".to_string()],
    };
    store.save(user, project).unwrap();
    store
}

#[test]
fn reset_user_scope_keeps_project_values() {
    let fixture = Fixture::new();
    let store = customized_store(&fixture);
    let project = store.project_preferences();

    commands::reset(&store, ResetScope::from_flags(true, false)).unwrap();

    assert_eq!(store.user_preferences(), UserPreferences::default());
    assert_eq!(store.project_preferences(), project);
}

#[test]
fn reset_project_scope_keeps_user_values() {
    let fixture = Fixture::new();
    let store = customized_store(&fixture);
    let user = store.user_preferences();

    commands::reset(&store, ResetScope::from_flags(false, true)).unwrap();

    assert_eq!(store.user_preferences(), user);
    assert_eq!(store.project_preferences(), ProjectPreferences::default());
}

#[test]
fn reset_without_flags_restores_both_scopes() {
    let fixture = Fixture::new();
    let store = customized_store(&fixture);

    commands::reset(&store, ResetScope::from_flags(false, false)).unwrap();

    let reloaded = PreferencesStore::open(fixture.context()).unwrap();
    assert_eq!(reloaded.user_preferences(), UserPreferences::default());
    assert_eq!(reloaded.project_preferences(), ProjectPreferences::default());
}

#[test]
fn exclude_add_existing_entry_does_not_save() {
    let fixture = Fixture::new();
    let store = customized_store(&fixture);
    let writes = fixture.user_store.write_count();

    let added = commands::exclude_add(&store, "Assets\\Generated\\").unwrap();

    assert!(!added);
    assert_eq!(fixture.user_store.write_count(), writes);
}

#[test]
fn exclude_add_new_entry_saves_once() {
    let fixture = Fixture::new();
    let store = customized_store(&fixture);
    let writes = fixture.user_store.write_count();

    let added = commands::exclude_add(&store, "Assets/Temp").unwrap();

    assert!(added);
    assert_eq!(fixture.user_store.write_count(), writes + 1);
    let reloaded = PreferencesStore::open(fixture.context()).unwrap();
    assert_eq!(
        reloaded.project_preferences().excluded_paths,
        vec!["Assets/Generated".to_string(), "Assets/Temp".to_string()]
    );
}

#[test]
fn exclude_remove_missing_entry_does_not_save() {
    let fixture = Fixture::new();
    let store = customized_store(&fixture);
    let writes = fixture.user_store.write_count();

    assert!(!commands::exclude_remove(&store, "Assets/Other").unwrap());
    assert_eq!(fixture.user_store.write_count(), writes);

    assert!(commands::exclude_remove(&store, "Assets/Generated").unwrap());
    assert!(store.project_preferences().excluded_paths.is_empty());
}

#[test]
fn set_field_saves_parsed_value() {
    let fixture = Fixture::new();
    let store = PreferencesStore::open(fixture.context()).unwrap();

    let field = commands::set_field(&store, "auto-refresh-interval-seconds", "-1").unwrap();

    assert_eq!(field, PreferenceField::AutoRefreshIntervalSeconds);
    let reloaded = PreferencesStore::open(fixture.context()).unwrap();
    assert_eq!(reloaded.user_preferences().auto_refresh_interval(), None);
}

#[test]
fn set_field_rejects_unknown_field_without_saving() {
    let fixture = Fixture::new();
    let store = PreferencesStore::open(fixture.context()).unwrap();

    let err = commands::set_field(&store, "colour", "blue").unwrap_err();

    assert!(matches!(
        err.downcast_ref::<PreferencesError>(),
        Some(PreferencesError::UnknownField(_))
    ));
    assert_eq!(fixture.user_store.write_count(), 0);
}
