//! Minimal form-control markup.
//!
//! This is the host-framework boundary: the helper only needs a labeled
//! control with a stable DOM id for the editor to attach to. Anything richer
//! (validation states, wrapper conventions, i18n) belongs to the hosting
//! framework's own form layer.

use crate::fields::capitalize;

/// Ordinary field-rendering options for the generated control.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldOptions {
    /// Visible label; defaults to the humanized field name
    pub label: Option<String>,
    /// Initial contents of the control
    pub value: Option<String>,
    pub rows: Option<u32>,
    pub cols: Option<u32>,
}

/// DOM id for a possibly model-qualified field name: split on `.`, camelize
/// each part, concatenate. `Offer.how_it_works` becomes `OfferHowItWorks`.
pub fn dom_id(field_name: &str) -> String {
    field_name.split('.').map(camelize).collect()
}

fn camelize(part: &str) -> String {
    part.split('_').map(capitalize).collect()
}

/// Form control name attribute: `Offer.how_it_works` becomes
/// `data[Offer][how_it_works]`.
pub fn control_name(field_name: &str) -> String {
    let mut out = String::from("data");
    for part in field_name.split('.') {
        out.push('[');
        out.push_str(part);
        out.push(']');
    }
    out
}

/// Escape text for HTML attribute and content positions.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn humanize(field_name: &str) -> String {
    let last = field_name.rsplit('.').next().unwrap_or(field_name);
    capitalize(&last.replace('_', " "))
}

/// Labeled `<textarea>` control.
pub fn textarea(field_name: &str, options: &FieldOptions) -> String {
    let id = dom_id(field_name);
    let label = options
        .label
        .clone()
        .unwrap_or_else(|| humanize(field_name));
    format!(
        "<div class=\"input textarea\"><label for=\"{id}\">{label}</label><textarea name=\"{name}\" id=\"{id}\" rows=\"{rows}\" cols=\"{cols}\">{value}</textarea></div>",
        id = escape_html(&id),
        label = escape_html(&label),
        name = escape_html(&control_name(field_name)),
        rows = options.rows.unwrap_or(6),
        cols = options.cols.unwrap_or(30),
        value = escape_html(options.value.as_deref().unwrap_or("")),
    )
}

/// Labeled single-line `<input>` control.
pub fn input(field_name: &str, options: &FieldOptions) -> String {
    let id = dom_id(field_name);
    let label = options
        .label
        .clone()
        .unwrap_or_else(|| humanize(field_name));
    format!(
        "<div class=\"input text\"><label for=\"{id}\">{label}</label><input type=\"text\" name=\"{name}\" id=\"{id}\" value=\"{value}\"/></div>",
        id = escape_html(&id),
        label = escape_html(&label),
        name = escape_html(&control_name(field_name)),
        value = escape_html(options.value.as_deref().unwrap_or("")),
    )
}

/// Inline script block wrapping an init statement.
pub fn script_block(script: &str) -> String {
    format!("<script type=\"text/javascript\">{}</script>", script)
}
