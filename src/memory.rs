//! In-memory hosts for headless use and tests.

use std::collections::HashMap;

use crate::error::ThemeError;
use crate::host::{Document, PreferenceStore, SystemPreferences, ToggleControl};

/// A [`PreferenceStore`] held in a map.
///
/// [`MemoryStore::read_only`] builds a store whose writes fail, like browser
/// storage that is disabled or over quota.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, returning the updated store for chaining.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.read_only {
            return Err(ThemeError::Store(format!("cannot write '{key}': store is read-only")));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A toggle control that records what was written to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryToggle {
    pub text: String,
    pub aria_label: Option<String>,
}

impl ToggleControl for MemoryToggle {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_aria_label(&mut self, label: &str) {
        self.aria_label = Some(label.to_string());
    }
}

/// A [`Document`] with a root attribute map and an optional toggle.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    root: HashMap<String, String>,
    body_transition: Option<String>,
    toggle: Option<MemoryToggle>,
}

impl MemoryDocument {
    /// A page without a toggle control.
    pub fn new() -> Self {
        Self::default()
    }

    /// A page with an empty toggle control.
    pub fn with_toggle() -> Self {
        Self {
            toggle: Some(MemoryToggle::default()),
            ..Self::default()
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.root.get(name).map(String::as_str)
    }

    pub fn body_transition(&self) -> Option<&str> {
        self.body_transition.as_deref()
    }

    pub fn toggle(&self) -> Option<&MemoryToggle> {
        self.toggle.as_ref()
    }
}

impl Document for MemoryDocument {
    type Toggle = MemoryToggle;

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root.get(name).cloned()
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        self.root.insert(name.to_string(), value.to_string());
    }

    fn set_body_transition(&mut self, transition: &str) {
        self.body_transition = Some(transition.to_string());
    }

    fn toggle_control(&mut self) -> Option<&mut MemoryToggle> {
        self.toggle.as_mut()
    }
}

/// Fixed answers to the system capability queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedPreferences {
    pub dark: Option<bool>,
    pub reduced_motion: Option<bool>,
}

impl FixedPreferences {
    /// Both queries unsupported.
    pub fn unsupported() -> Self {
        Self::default()
    }

    pub fn dark(prefers_dark: bool) -> Self {
        Self {
            dark: Some(prefers_dark),
            reduced_motion: Some(false),
        }
    }

    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = Some(reduced);
        self
    }
}

impl SystemPreferences for FixedPreferences {
    fn prefers_dark(&self) -> Option<bool> {
        self.dark
    }

    fn prefers_reduced_motion(&self) -> Option<bool> {
        self.reduced_motion
    }
}
