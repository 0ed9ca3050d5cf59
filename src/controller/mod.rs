//! The theme controller.
//!
//! A [`ThemeController`] owns a preference store and a document. It resolves
//! the initial theme once per page load, flips it on toggle activation, and
//! follows system color scheme changes until the user makes an explicit
//! choice. An explicit choice always wins over the system signal.
//!
//! # Example
//!
//! ```rust
//! use themekeeper::memory::{FixedPreferences, MemoryDocument, MemoryStore};
//! use themekeeper::{Activation, ControllerConfig, Theme, ThemeController};
//!
//! let mut controller = ThemeController::new(
//!     MemoryStore::new(),
//!     MemoryDocument::with_toggle(),
//!     ControllerConfig::full(),
//! );
//!
//! let report = controller.init(&FixedPreferences::dark(true));
//! assert_eq!(report.theme, Theme::Dark);
//!
//! let activated = controller.activate(Activation::Key("Enter")).unwrap();
//! assert_eq!(activated.theme, Theme::Light);
//! assert!(activated.prevent_default);
//!
//! // The explicit choice now outranks the system.
//! assert_eq!(controller.system_changed(true), None);
//! assert_eq!(controller.current(), Theme::Light);
//! ```

mod activation;
mod config;
mod wiring;

pub use activation::{Activated, Activation};
pub use config::{ControllerConfig, Fallback, DEFAULT_TRANSITION};
pub use wiring::{planned_listeners, PageListener};

use tracing::{debug, warn};

use crate::host::{Document, PreferenceStore, SystemPreferences, ToggleControl};
use crate::theme::{Theme, ThemeSource};

/// Outcome of [`ThemeController::init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitReport {
    /// The theme applied to the document.
    pub theme: Theme,
    pub source: ThemeSource,
    /// A toggle control was present and labelled.
    pub toggle_wired: bool,
    /// The body transition was enabled.
    pub transitions_enabled: bool,
}

/// Applies, flips, and persists the page theme.
#[derive(Debug)]
pub struct ThemeController<S, D> {
    store: S,
    document: D,
    config: ControllerConfig,
}

impl<S: PreferenceStore, D: Document> ThemeController<S, D> {
    pub fn new(store: S, document: D, config: ControllerConfig) -> Self {
        Self {
            store,
            document,
            config,
        }
    }

    /// Resolves the initial theme and applies it.
    ///
    /// The stored preference wins; otherwise the configured fallback decides.
    /// Labels the toggle control when the page has one.
    pub fn init(&mut self, system: &impl SystemPreferences) -> InitReport {
        let (theme, source) = self.resolve(system);
        self.apply(theme);

        let transitions_enabled =
            self.config.reduced_motion && system.prefers_reduced_motion() != Some(true);
        if transitions_enabled {
            self.document.set_body_transition(&self.config.transition);
        }

        let toggle_wired = self.document.toggle_control().is_some();
        if toggle_wired {
            self.refresh_labels(theme, self.config.aria_labels);
        }

        debug!(%theme, ?source, toggle_wired, "theme initialized");
        InitReport {
            theme,
            source,
            toggle_wired,
            transitions_enabled,
        }
    }

    /// The theme currently applied to the document root.
    pub fn current(&self) -> Theme {
        let value = self.document.root_attribute(&self.config.attribute);
        Theme::from_attribute(value.as_deref())
    }

    /// The explicit preference, if one is stored and valid.
    ///
    /// Unreadable stores and foreign values read as no preference.
    pub fn stored(&self) -> Option<Theme> {
        let raw = match self.store.load(&self.config.storage_key) {
            Ok(raw) => raw?,
            Err(err) => {
                warn!(error = %err, "could not read theme preference");
                return None;
            }
        };
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(err) => {
                warn!(error = %err, "ignoring stored theme preference");
                None
            }
        }
    }

    /// Flips the theme, persists it, and relabels the toggle control.
    ///
    /// A failed write is logged; the document keeps the new theme.
    pub fn toggle(&mut self) -> Theme {
        let theme = self.current().inverse();
        self.apply(theme);
        if let Err(err) = self.store.save(&self.config.storage_key, theme.as_str()) {
            warn!(error = %err, %theme, "could not persist theme preference");
        }
        self.refresh_labels(theme, self.config.aria_labels);
        debug!(%theme, "theme toggled");
        theme
    }

    /// Handles a user activation of the toggle control.
    ///
    /// Returns `None` when the activation does not flip the theme: keys
    /// other than Enter and Space, or any key while keyboard activation is
    /// disabled.
    pub fn activate(&mut self, activation: Activation<'_>) -> Option<Activated> {
        if activation.is_keyboard() && !self.config.keyboard {
            return None;
        }
        if !activation.triggers() {
            return None;
        }
        let theme = self.toggle();
        Some(Activated {
            theme,
            prevent_default: activation.is_keyboard(),
        })
    }

    /// Handles a `prefers-color-scheme: dark` change notification.
    ///
    /// Returns the applied theme, or `None` when the notification was
    /// ignored because system tracking is off or a preference is stored.
    pub fn system_changed(&mut self, prefers_dark: bool) -> Option<Theme> {
        if !self.config.follow_system || self.stored().is_some() {
            return None;
        }
        let theme = Theme::from_prefers_dark(prefers_dark);
        self.apply(theme);
        self.refresh_labels(theme, self.config.aria_labels);
        debug!(%theme, "theme follows system");
        Some(theme)
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Consumes the controller, returning its store and document.
    pub fn into_parts(self) -> (S, D) {
        (self.store, self.document)
    }

    fn resolve(&self, system: &impl SystemPreferences) -> (Theme, ThemeSource) {
        if let Some(theme) = self.stored() {
            return (theme, ThemeSource::Stored);
        }
        match self.config.fallback {
            Fallback::Fixed(theme) => (theme, ThemeSource::Default),
            Fallback::System => match system.prefers_dark() {
                Some(prefers_dark) => (Theme::from_prefers_dark(prefers_dark), ThemeSource::System),
                None => (Theme::Light, ThemeSource::Default),
            },
        }
    }

    fn apply(&mut self, theme: Theme) {
        self.document
            .set_root_attribute(&self.config.attribute, theme.as_str());
    }

    fn refresh_labels(&mut self, theme: Theme, aria: bool) {
        let labels = &self.config.labels;
        if let Some(toggle) = self.document.toggle_control() {
            toggle.set_text(labels.text_for(theme));
            if aria {
                toggle.set_aria_label(labels.aria_for(theme));
            }
        }
    }
}
