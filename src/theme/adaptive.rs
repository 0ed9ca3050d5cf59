//! System color scheme detection outside the browser.

use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;

use super::mode::Theme;
use crate::host::SystemPreferences;

type SystemDetector = fn() -> Option<Theme>;

static SYSTEM_DETECTOR: Lazy<Mutex<SystemDetector>> = Lazy::new(|| Mutex::new(os_detector));

/// Overrides the detector used to read the system color scheme.
///
/// This is useful for testing or when you want to force a specific mode.
/// Returning `None` behaves like a platform without a color scheme query.
pub fn set_system_detector(detector: SystemDetector) {
    let mut guard = SYSTEM_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Restores the platform detector.
pub fn reset_system_detector() {
    set_system_detector(os_detector);
}

pub(crate) fn detect_system_theme() -> Option<Theme> {
    let detector = SYSTEM_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

#[cfg(not(target_arch = "wasm32"))]
fn os_detector() -> Option<Theme> {
    use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

    match detect_os_theme() {
        OsThemeMode::Dark => Some(Theme::Dark),
        OsThemeMode::Light => Some(Theme::Light),
    }
}

// In the browser the media query binding answers instead.
#[cfg(target_arch = "wasm32")]
fn os_detector() -> Option<Theme> {
    None
}

/// [`SystemPreferences`] backed by the operating system's color scheme.
///
/// Reduced motion is not exposed by the OS detector and always reads as
/// unsupported.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsPreferences;

impl SystemPreferences for OsPreferences {
    fn prefers_dark(&self) -> Option<bool> {
        detect_system_theme().map(|theme| theme == Theme::Dark)
    }

    fn prefers_reduced_motion(&self) -> Option<bool> {
        None
    }
}
