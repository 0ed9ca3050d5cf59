//! The environment a [`ThemeController`](crate::ThemeController) drives.
//!
//! Three seams: where the preference lives, the document it is mirrored
//! onto, and the system signals consulted when nothing is stored. The
//! [`memory`](crate::memory) module implements them headless; the `web`
//! feature implements them over `web-sys`.

use crate::error::ThemeError;

/// A key-value store for the explicit user preference.
pub trait PreferenceStore {
    /// Reads `key`. `Ok(None)` means no explicit preference.
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Writes `value` under `key`.
    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// The control that flips the theme.
pub trait ToggleControl {
    fn set_text(&mut self, text: &str);
    fn set_aria_label(&mut self, label: &str);
}

/// The page the theme is applied to.
pub trait Document {
    type Toggle: ToggleControl;

    /// Reads an attribute of the root element.
    fn root_attribute(&self, name: &str) -> Option<String>;

    /// Writes an attribute of the root element.
    fn set_root_attribute(&mut self, name: &str, value: &str);

    /// Sets the CSS `transition` of the body.
    fn set_body_transition(&mut self, transition: &str);

    /// The toggle control, when the page has one.
    fn toggle_control(&mut self) -> Option<&mut Self::Toggle>;
}

/// One-shot reads of system capability queries.
///
/// `None` means the query is unsupported in this environment.
pub trait SystemPreferences {
    /// `prefers-color-scheme: dark`
    fn prefers_dark(&self) -> Option<bool>;

    /// `prefers-reduced-motion: reduce`
    fn prefers_reduced_motion(&self) -> Option<bool>;
}

/// A store that may be unavailable, such as `localStorage` in a sandboxed
/// frame. `None` reads as no preference and rejects writes.
impl<S: PreferenceStore> PreferenceStore for Option<S> {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        match self {
            Some(store) => store.load(key),
            None => Ok(None),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        match self {
            Some(store) => store.save(key, value),
            None => Err(ThemeError::Store(format!(
                "cannot write '{key}': no preference store available"
            ))),
        }
    }
}
