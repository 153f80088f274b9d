//! MiniJinja filter registration.

use minijinja::{Environment, Value};

use super::renderer::swatch;
use super::theme::PanelTheme;

/// Registers the panel filters on a minijinja environment.
pub(crate) fn register_filters(env: &mut Environment<'static>, theme: PanelTheme, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), use_color)
    });

    // Paints a block in the given hex color: {{ "#3b82f6" | swatch }}
    env.add_filter("swatch", move |hex: String| -> String { swatch(&hex, use_color) });

    // Filter to append a newline to the value, enabling explicit line break control.
    env.add_filter("nl", |value: Value| -> String { format!("{}\n", value) });
}
