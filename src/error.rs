//! Errors raised at the fallible edges of theme handling.

use thiserror::Error;

/// Error returned by parsing, storage, browser binding, and markup rendering.
///
/// Controller operations themselves never fail: store errors that happen
/// while toggling are logged and the visual change is kept.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A string that is neither `"light"` nor `"dark"`.
    #[error("unknown theme '{0}', expected 'light' or 'dark'")]
    UnknownTheme(String),
    /// The preference store refused a read or write.
    #[error("preference store error: {0}")]
    Store(String),
    /// A required browser object was missing or a DOM call threw.
    #[error("document error: {0}")]
    Dom(String),
    /// Markup template failed to render.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}
