//! Which page events a binding listens to.

use super::config::ControllerConfig;

/// An event listener a browser binding attaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageListener {
    /// `click` on the toggle control.
    ToggleClick,
    /// `keydown` on the toggle control.
    ToggleKeydown,
    /// `change` on the `(prefers-color-scheme: dark)` media query.
    SchemeChange,
}

impl PageListener {
    /// DOM event name.
    pub const fn event(self) -> &'static str {
        match self {
            PageListener::ToggleClick => "click",
            PageListener::ToggleKeydown => "keydown",
            PageListener::SchemeChange => "change",
        }
    }
}

/// Listeners to attach for a page.
///
/// Toggle listeners need the control to exist; `keydown` additionally needs
/// keyboard activation. The scheme listener needs system tracking and a
/// media query the environment can evaluate, and does not depend on the
/// toggle control.
pub fn planned_listeners(
    config: &ControllerConfig,
    has_toggle: bool,
    has_dark_query: bool,
) -> Vec<PageListener> {
    let mut listeners = Vec::with_capacity(3);
    if has_toggle {
        listeners.push(PageListener::ToggleClick);
        if config.keyboard {
            listeners.push(PageListener::ToggleKeydown);
        }
    }
    if config.follow_system && has_dark_query {
        listeners.push(PageListener::SchemeChange);
    }
    listeners
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageListener::*;

    #[test]
    fn test_full_page_gets_every_listener() {
        let planned = planned_listeners(&ControllerConfig::full(), true, true);
        assert_eq!(planned, vec![ToggleClick, ToggleKeydown, SchemeChange]);
    }

    #[test]
    fn test_missing_toggle_gets_no_toggle_listeners() {
        let planned = planned_listeners(&ControllerConfig::full(), false, true);
        assert_eq!(planned, vec![SchemeChange]);

        let planned = planned_listeners(&ControllerConfig::minimal(), false, true);
        assert!(planned.is_empty());
    }

    #[test]
    fn test_minimal_page_only_clicks() {
        let planned = planned_listeners(&ControllerConfig::minimal(), true, true);
        assert_eq!(planned, vec![ToggleClick]);
    }

    #[test]
    fn test_unsupported_query_gets_no_scheme_listener() {
        let planned = planned_listeners(&ControllerConfig::full(), true, false);
        assert_eq!(planned, vec![ToggleClick, ToggleKeydown]);
    }

    #[test]
    fn test_every_combination() {
        for has_toggle in [false, true] {
            for has_query in [false, true] {
                for keyboard in [false, true] {
                    for follow_system in [false, true] {
                        let mut config = ControllerConfig::full();
                        config.keyboard = keyboard;
                        config.follow_system = follow_system;
                        let planned = planned_listeners(&config, has_toggle, has_query);

                        assert_eq!(planned.contains(&ToggleClick), has_toggle);
                        assert_eq!(planned.contains(&ToggleKeydown), has_toggle && keyboard);
                        assert_eq!(
                            planned.contains(&SchemeChange),
                            follow_system && has_query
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_event_names() {
        assert_eq!(ToggleClick.event(), "click");
        assert_eq!(ToggleKeydown.event(), "keydown");
        assert_eq!(SchemeChange.event(), "change");
    }
}
