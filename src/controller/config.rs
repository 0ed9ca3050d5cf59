//! Controller configuration and the two page variants.

use serde::{Deserialize, Serialize};

use crate::theme::{Theme, ToggleLabels};

/// Body transition enabled when the system does not ask for reduced motion.
pub const DEFAULT_TRANSITION: &str = "background 0.3s ease, color 0.3s ease";

/// What to apply when no explicit preference is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fallback {
    /// Follow `prefers-color-scheme`, light when the query is unsupported.
    System,
    /// Always use the given theme.
    Fixed(Theme),
}

/// Settings for a [`ThemeController`](crate::ThemeController).
///
/// The default is [`ControllerConfig::full`]. Every field can be overridden
/// when deserializing; missing fields keep their defaults.
///
/// # Example
///
/// ```rust
/// use themekeeper::{ControllerConfig, Fallback, Theme};
///
/// let config = ControllerConfig::minimal()
///     .with_storage_key("site-theme")
///     .with_fallback(Fallback::Fixed(Theme::Dark));
///
/// assert_eq!(config.storage_key, "site-theme");
/// assert!(!config.keyboard);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Preference store key.
    pub storage_key: String,
    /// Root element attribute the theme is mirrored onto.
    pub attribute: String,
    /// Element id of the toggle control.
    pub toggle_id: String,
    pub fallback: Fallback,
    /// Set `aria-label` alongside the visible caption.
    pub aria_labels: bool,
    /// Activate on Enter and Space.
    pub keyboard: bool,
    /// Track system color scheme changes while no preference is stored.
    pub follow_system: bool,
    /// Only enable body transitions when reduced motion is not requested.
    pub reduced_motion: bool,
    pub transition: String,
    pub labels: ToggleLabels,
}

impl ControllerConfig {
    /// System detection, accessibility labels, keyboard activation, system
    /// tracking, and the reduced-motion guard.
    pub fn full() -> Self {
        Self {
            storage_key: "theme".to_string(),
            attribute: "data-theme".to_string(),
            toggle_id: "theme-toggle".to_string(),
            fallback: Fallback::System,
            aria_labels: true,
            keyboard: true,
            follow_system: true,
            reduced_motion: true,
            transition: DEFAULT_TRANSITION.to_string(),
            labels: ToggleLabels::default(),
        }
    }

    /// Light by default, visible caption only, pointer activation only.
    pub fn minimal() -> Self {
        Self {
            fallback: Fallback::Fixed(Theme::Light),
            aria_labels: false,
            keyboard: false,
            follow_system: false,
            reduced_motion: false,
            ..Self::full()
        }
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = attribute.into();
        self
    }

    pub fn with_toggle_id(mut self, id: impl Into<String>) -> Self {
        self.toggle_id = id.into();
        self
    }

    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_labels(mut self, labels: ToggleLabels) -> Self {
        self.labels = labels;
        self
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::full()
    }
}
