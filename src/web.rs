//! Browser binding over `web-sys`.
//!
//! [`install`] reads `localStorage`, applies the theme to
//! `document.documentElement`, and wires `click`/`keydown` on the toggle
//! control and `change` on the `(prefers-color-scheme: dark)` media query.
//! Listeners stay attached while the returned [`Bindings`] lives; call
//! [`Bindings::forget`] to keep them for the page lifetime.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, EventTarget, HtmlElement, KeyboardEvent, MediaQueryList, MediaQueryListEvent,
    Storage, Window,
};

use crate::controller::{
    planned_listeners, Activation, ControllerConfig, InitReport, PageListener, ThemeController,
};
use crate::error::ThemeError;
use crate::host::{Document, PreferenceStore, SystemPreferences, ToggleControl};

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Controller type driven by the browser binding. The store is `None` when
/// the browser exposes no `localStorage`.
pub type WebController = ThemeController<Option<LocalStorage>, WebDocument>;

fn js_error(value: JsValue) -> String {
    format!("{value:?}")
}

/// `window.localStorage`.
pub struct LocalStorage(Storage);

impl LocalStorage {
    /// `None` when storage is disabled or throws on access.
    pub fn from_window(window: &Window) -> Option<Self> {
        window.local_storage().ok().flatten().map(Self)
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.0
            .get_item(key)
            .map_err(|e| ThemeError::Store(js_error(e)))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.0
            .set_item(key, value)
            .map_err(|e| ThemeError::Store(js_error(e)))
    }
}

fn set_attribute(element: &Element, name: &str, value: &str) {
    if let Err(err) = element.set_attribute(name, value) {
        warn!(error = %js_error(err), name, value, "could not set attribute");
    }
}

/// The toggle control element. Any element works, including SVG.
pub struct WebToggle(Element);

impl ToggleControl for WebToggle {
    fn set_text(&mut self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_aria_label(&mut self, label: &str) {
        set_attribute(&self.0, "aria-label", label);
    }
}

/// The live page: root element, body, and toggle control.
pub struct WebDocument {
    root: Element,
    body: Option<HtmlElement>,
    toggle: Option<WebToggle>,
}

impl WebDocument {
    /// Looks up the page elements. Fails only when there is no root element.
    pub fn from_document(document: &web_sys::Document, toggle_id: &str) -> Result<Self, ThemeError> {
        let root = document
            .document_element()
            .ok_or_else(|| ThemeError::Dom("document has no root element".to_string()))?;
        let toggle = document.get_element_by_id(toggle_id).map(WebToggle);
        Ok(Self {
            root,
            body: document.body(),
            toggle,
        })
    }

    fn toggle_element(&self) -> Option<Element> {
        self.toggle.as_ref().map(|t| t.0.clone())
    }
}

impl Document for WebDocument {
    type Toggle = WebToggle;

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root.get_attribute(name)
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        set_attribute(&self.root, name, value);
    }

    fn set_body_transition(&mut self, transition: &str) {
        if let Some(body) = &self.body {
            if let Err(err) = body.style().set_property("transition", transition) {
                warn!(error = %js_error(err), transition, "could not set body transition");
            }
        }
    }

    fn toggle_control(&mut self) -> Option<&mut WebToggle> {
        self.toggle.as_mut()
    }
}

/// `window.matchMedia` answers. A query the browser cannot evaluate reads
/// as unsupported.
pub struct MediaPreferences {
    dark: Option<MediaQueryList>,
    reduced_motion: Option<MediaQueryList>,
}

impl MediaPreferences {
    pub fn query(window: &Window) -> Self {
        let query = |q: &str| window.match_media(q).ok().flatten();
        Self {
            dark: query(DARK_QUERY),
            reduced_motion: query(REDUCED_MOTION_QUERY),
        }
    }
}

impl SystemPreferences for MediaPreferences {
    fn prefers_dark(&self) -> Option<bool> {
        self.dark.as_ref().map(MediaQueryList::matches)
    }

    fn prefers_reduced_motion(&self) -> Option<bool> {
        self.reduced_motion.as_ref().map(MediaQueryList::matches)
    }
}

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, ThemeError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| ThemeError::Dom(js_error(e)))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Attached listeners and the controller they share.
///
/// Dropping it detaches every listener.
#[must_use = "dropping Bindings detaches the listeners; call `forget` to keep them"]
pub struct Bindings {
    controller: Rc<RefCell<WebController>>,
    report: InitReport,
    listeners: Vec<Listener>,
}

impl Bindings {
    pub fn controller(&self) -> Rc<RefCell<WebController>> {
        Rc::clone(&self.controller)
    }

    pub fn report(&self) -> InitReport {
        self.report
    }

    /// Number of attached event listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Keeps the listeners attached for the rest of the page's life.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

/// Initializes the page theme and wires the event listeners.
///
/// Listeners follow [`planned_listeners`]: toggle listeners only when the
/// control exists, the system listener only when `follow_system` is on.
pub fn install(config: ControllerConfig) -> Result<Bindings, ThemeError> {
    let window =
        web_sys::window().ok_or_else(|| ThemeError::Dom("no global window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| ThemeError::Dom("window has no document".to_string()))?;

    let page = WebDocument::from_document(&document, &config.toggle_id)?;
    let toggle = page.toggle_element();
    let media = MediaPreferences::query(&window);
    let planned = planned_listeners(&config, toggle.is_some(), media.dark.is_some());

    let mut controller = ThemeController::new(LocalStorage::from_window(&window), page, config);
    let report = controller.init(&media);
    let controller = Rc::new(RefCell::new(controller));
    let mut listeners = Vec::with_capacity(planned.len());

    for wanted in planned {
        let target: Option<&EventTarget> = match wanted {
            PageListener::ToggleClick | PageListener::ToggleKeydown => {
                toggle.as_ref().map(|el| AsRef::<EventTarget>::as_ref(el))
            }
            PageListener::SchemeChange => media.dark.as_ref().map(|q| AsRef::<EventTarget>::as_ref(q)),
        };
        let Some(target) = target else {
            continue;
        };
        let shared = Rc::clone(&controller);
        let listener = match wanted {
            PageListener::ToggleClick => {
                Listener::attach(target, wanted.event(), move |_event: Event| {
                    shared.borrow_mut().activate(Activation::Click);
                })
            }
            PageListener::ToggleKeydown => {
                Listener::attach(target, wanted.event(), move |event: Event| {
                    let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    let key = key_event.key();
                    let activated = shared.borrow_mut().activate(Activation::Key(&key));
                    if activated.is_some_and(|a| a.prevent_default) {
                        event.prevent_default();
                    }
                })
            }
            PageListener::SchemeChange => {
                Listener::attach(target, wanted.event(), move |event: Event| {
                    if let Some(change) = event.dyn_ref::<MediaQueryListEvent>() {
                        shared.borrow_mut().system_changed(change.matches());
                    }
                })
            }
        }?;
        listeners.push(listener);
    }

    debug!(listeners = listeners.len(), theme = %report.theme, "theme bindings installed");
    Ok(Bindings {
        controller,
        report,
        listeners,
    })
}
