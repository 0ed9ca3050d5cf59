//! Toggle control captions.

use serde::{Deserialize, Serialize};

use super::mode::Theme;

/// Visible and accessibility captions for the toggle control.
///
/// Captions describe the action a click performs, not the current state:
/// while the page is dark the control offers light mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleLabels {
    pub to_light: String,
    pub to_dark: String,
    pub to_light_aria: String,
    pub to_dark_aria: String,
}

impl ToggleLabels {
    /// Visible caption to show while `current` is applied.
    pub fn text_for(&self, current: Theme) -> &str {
        match current {
            Theme::Dark => &self.to_light,
            Theme::Light => &self.to_dark,
        }
    }

    /// `aria-label` to set while `current` is applied.
    pub fn aria_for(&self, current: Theme) -> &str {
        match current {
            Theme::Dark => &self.to_light_aria,
            Theme::Light => &self.to_dark_aria,
        }
    }
}

impl Default for ToggleLabels {
    fn default() -> Self {
        Self {
            to_light: "☀️ Light Mode".to_string(),
            to_dark: "🌙 Dark Mode".to_string(),
            to_light_aria: "Switch to light mode".to_string(),
            to_dark_aria: "Switch to dark mode".to_string(),
        }
    }
}
