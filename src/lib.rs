//! Light/dark theme switching for web pages.
//!
//! `themekeeper` resolves a page's theme once per load, mirrors it onto the
//! root element's `data-theme` attribute, flips it when the user activates a
//! toggle control, persists the choice, and follows the system color scheme
//! until the user has chosen explicitly.
//!
//! # Core pieces
//!
//! - [`Theme`]: `light` or `dark`
//! - [`ThemeController`]: init, toggle, and system-change handling
//! - [`ControllerConfig`]: storage key, attribute, captions, and the
//!   [`full`](ControllerConfig::full) / [`minimal`](ControllerConfig::minimal)
//!   variants
//! - [`host`]: the store, document, and system seams the controller drives
//! - [`memory`]: headless hosts
//! - [`markup`]: server-rendered toggle button and boot script
//! - `web` (feature `web`, wasm32 only): the `web-sys` binding
//!
//! # Example
//!
//! ```rust
//! use themekeeper::memory::{FixedPreferences, MemoryDocument, MemoryStore};
//! use themekeeper::{ControllerConfig, Theme, ThemeController};
//!
//! let store = MemoryStore::new().with("theme", "light");
//! let mut controller =
//!     ThemeController::new(store, MemoryDocument::with_toggle(), ControllerConfig::full());
//! controller.init(&FixedPreferences::dark(true));
//!
//! assert_eq!(controller.toggle(), Theme::Dark);
//! assert_eq!(controller.store().get("theme"), Some("dark"));
//! assert_eq!(controller.document().toggle().unwrap().text, "☀️ Light Mode");
//! ```
//!
//! In the browser, with the `web` feature:
//!
//! ```rust,ignore
//! let bindings = themekeeper::web::install(themekeeper::ControllerConfig::full())?;
//! bindings.forget();
//! ```

pub mod controller;
pub mod error;
pub mod host;
pub mod markup;
pub mod memory;
pub mod theme;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

pub use controller::{
    planned_listeners, Activated, Activation, ControllerConfig, Fallback, InitReport,
    PageListener, ThemeController,
};
pub use error::ThemeError;
pub use host::{Document, PreferenceStore, SystemPreferences, ToggleControl};
pub use theme::{
    reset_system_detector, set_system_detector, OsPreferences, Theme, ThemeSource, ToggleLabels,
};
