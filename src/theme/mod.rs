//! Theme values, captions, and system detection.
//!
//! This module provides:
//!
//! - [`Theme`]: Light or dark, as stored and as applied to the document
//! - [`ThemeSource`]: Where an initial theme was resolved from
//! - [`ToggleLabels`]: Captions describing the toggle's next action
//! - [`OsPreferences`]: System color scheme via the OS, with a test override

mod adaptive;
mod labels;
mod mode;

pub use adaptive::{reset_system_detector, set_system_detector, OsPreferences};
pub use labels::ToggleLabels;
pub use mode::{Theme, ThemeSource};
