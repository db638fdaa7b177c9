mod support;

use std::rc::Rc;

use svn_prefs_core::backend::{KeyValueStore, PREFERENCES_KEY};
use svn_prefs_core::preferences::{ProjectPreferences, UserPreferences};
use svn_prefs_core::registry::{Lifetime, ObjectRegistry};
use svn_prefs_core::store::{PreferencesSnapshot, PreferencesStore};

use support::Fixture;

#[test]
fn instance_is_stable_between_calls() {
    let fixture = Fixture::new();
    PreferencesStore::install_context(fixture.context());

    let first = PreferencesStore::instance().unwrap();
    let before = first.user_preferences();
    let second = PreferencesStore::instance().unwrap();

    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(second.user_preferences(), before);
    assert_eq!(second.project_preferences(), ProjectPreferences::default());
}

#[test]
fn instance_is_marked_to_survive_unload() {
    let fixture = Fixture::new();
    PreferencesStore::install_context(fixture.context());

    PreferencesStore::instance().unwrap();
    ObjectRegistry::unload_unused();

    assert_eq!(
        ObjectRegistry::lifetime_of::<PreferencesSnapshot>(),
        Some(Lifetime::Persistent)
    );
}

#[test]
fn instance_survives_reload_without_rereading_stores() {
    let fixture = Fixture::new();
    PreferencesStore::install_context(fixture.context());

    let store = PreferencesStore::instance().unwrap();
    let user = UserPreferences {
        lock_checking_enabled: true,
        auto_refresh_interval_seconds: 15,
        ..Default::default()
    };
    let project = ProjectPreferences {
        cli_executable_path: String::new(),
        excluded_paths: vec!["Assets/ThirdParty".to_string()],
    };
    store.save(user.clone(), project.clone()).unwrap();
    drop(store);

    // Out-of-band edit that a reload must not pick up.
    fixture
        .user_store
        .set_string(PREFERENCES_KEY, r#"{"lockCheckingEnabled": false}"#)
        .unwrap();

    PreferencesStore::prepare_for_reload();
    ObjectRegistry::unload_unused();
    let restored = PreferencesStore::instance().unwrap();

    assert_eq!(restored.user_preferences(), user);
    assert_eq!(restored.project_preferences(), project);
}

#[test]
fn explicit_load_picks_up_external_changes() {
    let fixture = Fixture::new();
    PreferencesStore::install_context(fixture.context());

    let store = PreferencesStore::instance().unwrap();
    fixture
        .user_store
        .set_string(PREFERENCES_KEY, r#"{"coreIntegrationEnabled": false}"#)
        .unwrap();
    store.load().unwrap();

    assert!(!store.user_preferences().core_integration_enabled);
    let parked = ObjectRegistry::find::<PreferencesSnapshot>().unwrap();
    assert!(!parked.user.core_integration_enabled);
}
