//! Panel template rendering.

use minijinja::{context, Environment, Error};

use super::filters::register_filters;
use super::theme::PanelTheme;
use super::OutputMode;
use crate::panel::Section;
use crate::util::{parse_hex, rgb_to_ansi256};

const SWATCH_GLYPH: &str = "■";

const PANEL_TEMPLATE: &str = r#"
{%- if open -%}
{{ (("Theme Settings" | style("title")) ~ "  " ~ ("[x]" | style("muted"))) | nl }}
{%- for section in sections -%}
{{ "" | nl }}{{ section.title | style("heading") | nl }}
{%- for item in section.swatches -%}
{%- if item.selected -%}
{{ ("  " ~ (item.hex | swatch) ~ " " ~ (("[" ~ item.label ~ "]") | style("selected"))) | nl }}
{%- else -%}
{{ ("  " ~ (item.hex | swatch) ~ "  " ~ (item.label | style("label"))) | nl }}
{%- endif -%}
{%- endfor -%}
{%- endfor -%}
{%- else -%}
{{ "[*] Theme" | style("button") | nl }}
{%- endif -%}
"#;

/// Renders a selector panel.
///
/// A closed panel renders only its toggle button; an open one lists every
/// section with one swatch line per choice, the selected choice bracketed.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render_panel(
    sections: &[Section],
    open: bool,
    theme: PanelTheme,
    mode: OutputMode,
) -> Result<String, Error> {
    let mut env = Environment::new();
    register_filters(&mut env, theme, mode.should_use_color());
    let tmpl = env.template_from_str(PANEL_TEMPLATE)?;
    tmpl.render(context! { open => open, sections => sections })
}

/// Draws a color block for `hex`.
///
/// Without color the bare glyph is returned; unparseable colors paint
/// with the nearest gray to mid-gray.
pub fn swatch(hex: &str, use_color: bool) -> String {
    if !use_color {
        return SWATCH_GLYPH.to_string();
    }
    let code = rgb_to_ansi256(parse_hex(hex).unwrap_or((128, 128, 128)));
    console::Style::new()
        .color256(code)
        .force_styling(true)
        .apply_to(SWATCH_GLYPH)
        .to_string()
}
