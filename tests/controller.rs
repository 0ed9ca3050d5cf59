//! Integration tests for page initialization, toggling, and system tracking.

use proptest::prelude::*;
use serial_test::serial;
use themekeeper::memory::{FixedPreferences, MemoryDocument, MemoryStore};
use themekeeper::{
    planned_listeners, reset_system_detector, set_system_detector, Activation, ControllerConfig,
    OsPreferences, PageListener, Theme, ThemeController, ThemeSource,
};

type Controller = ThemeController<MemoryStore, MemoryDocument>;

fn page(stored: Option<&str>, config: ControllerConfig) -> Controller {
    let store = match stored {
        Some(value) => MemoryStore::new().with("theme", value),
        None => MemoryStore::new(),
    };
    ThemeController::new(store, MemoryDocument::with_toggle(), config)
}

#[test]
fn test_load_applies_stored_value() {
    for (stored, expected) in [("light", "light"), ("dark", "dark")] {
        for system_dark in [false, true] {
            let mut c = page(Some(stored), ControllerConfig::full());
            c.init(&FixedPreferences::dark(system_dark));
            assert_eq!(c.document().attribute("data-theme"), Some(expected));
        }
    }
}

#[test]
fn test_unset_store_with_dark_system_detection_variant() {
    let mut c = page(None, ControllerConfig::full());
    let report = c.init(&FixedPreferences::dark(true));
    assert_eq!(report.source, ThemeSource::System);
    assert_eq!(c.document().attribute("data-theme"), Some("dark"));
}

#[test]
fn test_unset_store_with_dark_system_default_variant() {
    let mut c = page(None, ControllerConfig::minimal());
    let report = c.init(&FixedPreferences::dark(true));
    assert_eq!(report.source, ThemeSource::Default);
    assert_eq!(c.document().attribute("data-theme"), Some("light"));
}

#[test]
fn test_single_toggle_from_light() {
    let mut c = page(Some("light"), ControllerConfig::full());
    c.init(&FixedPreferences::dark(false));

    let activated = c.activate(Activation::Click).unwrap();

    assert_eq!(activated.theme, Theme::Dark);
    assert_eq!(c.document().attribute("data-theme"), Some("dark"));
    assert_eq!(c.store().get("theme"), Some("dark"));
    let toggle = c.document().toggle().unwrap();
    assert_eq!(toggle.text, "☀️ Light Mode");
    assert_eq!(toggle.aria_label.as_deref(), Some("Switch to light mode"));
}

#[test]
fn test_initial_labels_describe_action() {
    let mut c = page(Some("dark"), ControllerConfig::full());
    let report = c.init(&FixedPreferences::unsupported());
    assert!(report.toggle_wired);
    let toggle = c.document().toggle().unwrap();
    assert_eq!(toggle.text, "☀️ Light Mode");
    assert_eq!(toggle.aria_label.as_deref(), Some("Switch to light mode"));
}

#[test]
fn test_space_key_toggles_and_prevents_default() {
    let mut c = page(None, ControllerConfig::full());
    c.init(&FixedPreferences::dark(false));
    let activated = c.activate(Activation::Key(" ")).unwrap();
    assert_eq!(activated.theme, Theme::Dark);
    assert!(activated.prevent_default);
}

#[test]
fn test_explicit_choice_overrides_system_changes() {
    let mut c = page(None, ControllerConfig::full());
    c.init(&FixedPreferences::dark(false));
    c.toggle();
    assert_eq!(c.current(), Theme::Dark);

    assert_eq!(c.system_changed(false), None);
    assert_eq!(c.system_changed(true), None);
    assert_eq!(c.document().attribute("data-theme"), Some("dark"));
}

#[test]
fn test_system_changes_followed_before_explicit_choice() {
    let mut c = page(None, ControllerConfig::full());
    c.init(&FixedPreferences::dark(false));

    assert_eq!(c.system_changed(true), Some(Theme::Dark));
    assert_eq!(c.document().attribute("data-theme"), Some("dark"));
    assert_eq!(c.system_changed(false), Some(Theme::Light));
    assert_eq!(c.document().attribute("data-theme"), Some("light"));
    assert_eq!(c.store().get("theme"), None);
}

#[test]
fn test_missing_toggle_control() {
    let mut c = ThemeController::new(
        MemoryStore::new(),
        MemoryDocument::new(),
        ControllerConfig::full(),
    );
    let report = c.init(&FixedPreferences::dark(true));
    assert!(!report.toggle_wired);
    assert_eq!(c.document().attribute("data-theme"), Some("dark"));
    assert!(c.document().toggle().is_none());
}

#[test]
fn test_page_without_storage_still_toggles_and_follows_system() {
    let mut c = ThemeController::new(
        None::<MemoryStore>,
        MemoryDocument::with_toggle(),
        ControllerConfig::full(),
    );
    let report = c.init(&FixedPreferences::dark(true));
    assert_eq!(report.source, ThemeSource::System);
    assert_eq!(report.theme, Theme::Dark);

    assert_eq!(c.toggle(), Theme::Light);
    assert_eq!(c.document().attribute("data-theme"), Some("light"));

    // Nothing could be persisted, so the system signal still applies.
    assert_eq!(c.system_changed(true), Some(Theme::Dark));
}

#[test]
fn test_missing_toggle_plans_no_toggle_listeners() {
    let planned = planned_listeners(&ControllerConfig::full(), false, true);
    assert_eq!(planned, vec![PageListener::SchemeChange]);
}

#[test]
#[serial]
fn test_os_preferences_drive_initial_theme() {
    set_system_detector(|| Some(Theme::Dark));
    let mut c = page(None, ControllerConfig::full());
    let report = c.init(&OsPreferences);
    reset_system_detector();

    assert_eq!(report.theme, Theme::Dark);
    assert_eq!(report.source, ThemeSource::System);
    // No reduced-motion signal from the OS: transitions stay on.
    assert!(report.transitions_enabled);
}

fn stored_state() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![Just(None), Just(Some("light")), Just(Some("dark"))]
}

proptest! {
    #[test]
    fn toggling_twice_restores_state(
        stored in stored_state(),
        system_dark in prop::bool::ANY,
        full in prop::bool::ANY,
    ) {
        let config = if full { ControllerConfig::full() } else { ControllerConfig::minimal() };
        let mut c = page(stored, config);
        c.init(&FixedPreferences::dark(system_dark));
        let before = c.current();

        let once = c.toggle();
        prop_assert_eq!(once, before.inverse());
        let twice = c.toggle();

        prop_assert_eq!(twice, before);
        prop_assert_eq!(c.current(), before);
        prop_assert_eq!(c.store().get("theme"), Some(before.as_str()));
    }

    #[test]
    fn root_attribute_matches_resolution_rule(
        stored in stored_state(),
        system_dark in prop::option::of(prop::bool::ANY),
    ) {
        let mut c = page(stored, ControllerConfig::full());
        let prefs = FixedPreferences { dark: system_dark, reduced_motion: None };
        c.init(&prefs);

        let expected = match (stored, system_dark) {
            (Some(value), _) => value,
            (None, Some(true)) => "dark",
            (None, _) => "light",
        };
        prop_assert_eq!(c.document().attribute("data-theme"), Some(expected));
    }
}
