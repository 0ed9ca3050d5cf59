//! User activations of the toggle control.

use crate::theme::Theme;

/// How the user activated the toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation<'a> {
    /// Pointer click.
    Click,
    /// Key press, carrying the DOM `KeyboardEvent.key` value.
    Key(&'a str),
}

impl Activation<'_> {
    pub(crate) fn is_keyboard(&self) -> bool {
        matches!(self, Activation::Key(_))
    }

    /// Whether this activation flips the theme. Only Enter and Space count
    /// among keys.
    pub(crate) fn triggers(&self) -> bool {
        match self {
            Activation::Click => true,
            Activation::Key(key) => matches!(*key, "Enter" | " "),
        }
    }
}

/// Result of an activation that flipped the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activated {
    /// The theme now applied.
    pub theme: Theme,
    /// The browser's default action for the event must be suppressed
    /// (Space would otherwise scroll the page).
    pub prevent_default: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_and_space_trigger() {
        assert!(Activation::Key("Enter").triggers());
        assert!(Activation::Key(" ").triggers());
        assert!(Activation::Click.triggers());
    }

    #[test]
    fn test_other_keys_ignored() {
        assert!(!Activation::Key("Tab").triggers());
        assert!(!Activation::Key("Spacebar").triggers());
        assert!(!Activation::Key("enter").triggers());
    }
}
