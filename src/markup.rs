//! Server-side markup for pages that carry a theme toggle.
//!
//! Rendering the control and a pre-paint boot script on the server keeps the
//! first paint in the right theme with correct captions, before any browser
//! binding has run.

use minijinja::{context, Environment};
use once_cell::sync::Lazy;

use crate::controller::{ControllerConfig, Fallback};
use crate::error::ThemeError;
use crate::theme::Theme;

const TOGGLE_BUTTON: &str = r#"<button id="{{ id }}" type="button" class="theme-toggle"{% if aria %} aria-label="{{ aria }}"{% endif %}>{{ text }}</button>"#;

// No extension: values go through `tojson`, which escapes `<`, `>` and `&`.
const BOOT_SCRIPT: &str = r#"<script>(function(){var t=null;try{t=localStorage.getItem({{ key|tojson }});}catch(e){}if(t!=="light"&&t!=="dark"){t={% if detect %}window.matchMedia&&window.matchMedia("(prefers-color-scheme: dark)").matches?"dark":"light"{% else %}{{ fallback|tojson }}{% endif %};}document.documentElement.setAttribute({{ attribute|tojson }},t);})();</script>"#;

static ENV: Lazy<Environment<'static>> = Lazy::new(Environment::new);

/// Renders the toggle control labelled for `theme`.
///
/// # Example
///
/// ```rust
/// use themekeeper::{markup, ControllerConfig, Theme};
///
/// let html = markup::render_toggle_button(Theme::Dark, &ControllerConfig::full()).unwrap();
/// assert!(html.contains(r#"id="theme-toggle""#));
/// assert!(html.contains("Light Mode"));
/// ```
pub fn render_toggle_button(theme: Theme, config: &ControllerConfig) -> Result<String, ThemeError> {
    let aria = config
        .aria_labels
        .then(|| config.labels.aria_for(theme));
    let html = ENV.render_named_str(
        "toggle_button.html",
        TOGGLE_BUTTON,
        context! {
            id => config.toggle_id,
            text => config.labels.text_for(theme),
            aria => aria,
        },
    )?;
    Ok(html)
}

/// Renders an inline `<script>` for the document head that applies the
/// stored or fallback theme before first paint.
pub fn render_boot_script(config: &ControllerConfig) -> Result<String, ThemeError> {
    let (detect, fallback) = match config.fallback {
        Fallback::System => (true, Theme::Light),
        Fallback::Fixed(theme) => (false, theme),
    };
    let script = ENV.render_named_str(
        "boot_script",
        BOOT_SCRIPT,
        context! {
            key => config.storage_key,
            attribute => config.attribute,
            detect => detect,
            fallback => fallback.as_str(),
        },
    )?;
    Ok(script)
}
