//! Toolbar button synthesis for auto-insertable entity fields.

use crate::fields::FieldSpec;
use crate::value::{OptionMap, OptionValue};

/// Internal name of the composite menu button in select mode.
pub const INSERT_BUTTON: &str = "insertButton";

pub const TOOLBAR_KEY: &str = "toolbar";
pub const SETUP_KEY: &str = "setup";

/// How auto fields are surfaced in the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoFieldMode {
    /// No synthesis
    Off,
    /// One menu button whose dropdown lists every field
    Select,
    /// One standalone button per field
    Buttons,
}

impl AutoFieldMode {
    /// Mode from the reserved `autoFields` option value: `"select"` selects
    /// the menu button, any other truthy value selects per-field buttons.
    pub fn from_value(value: Option<&OptionValue>) -> Self {
        match value {
            Some(v) if v.is_truthy() => {
                if v.as_str() == Some("select") {
                    AutoFieldMode::Select
                } else {
                    AutoFieldMode::Buttons
                }
            }
            _ => AutoFieldMode::Off,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, AutoFieldMode::Off)
    }
}

/// Synthesize the insert-button setup handler and toolbar entries.
///
/// Assigns the handler to `setup` unconditionally — auto fields and a custom
/// setup handler are mutually exclusive, and auto fields win.
pub fn apply(options: &mut OptionMap, fields: &[FieldSpec], mode: AutoFieldMode) {
    match mode {
        AutoFieldMode::Off => {}
        AutoFieldMode::Select => apply_select(options, fields),
        AutoFieldMode::Buttons => apply_buttons(options, fields),
    }
}

fn apply_select(options: &mut OptionMap, fields: &[FieldSpec]) {
    let mut setup = format!(
        "function(editor) {{ editor.addButton(\"{}\", {{ text: \"Autofields\", type: \"menubutton\", icon: false, menu: [",
        INSERT_BUTTON
    );
    for field in fields {
        setup.push_str(&format!(
            "{{text: \"{}\", icon: false, onclick: function() {{ editor.insertContent(\"{}\"); }}}},",
            field.label, field.output
        ));
    }
    setup.push_str("]});}");

    options.insert(SETUP_KEY.to_string(), OptionValue::Code(setup));
    append_toolbar(options, &format!(" | {}", INSERT_BUTTON));
}

fn apply_buttons(options: &mut OptionMap, fields: &[FieldSpec]) {
    let mut setup = String::from("function(editor) {");
    let mut toolbar = String::from(" |");
    for field in fields {
        let name = field.button_name();
        setup.push_str(&format!(
            "editor.addButton(\"{}\", {{ text: \"{}\", icon: false, onclick: function() {{ editor.insertContent(\"{}\"); }}}});",
            name, field.label, field.output
        ));
        toolbar.push(' ');
        toolbar.push_str(&name);
    }
    setup.push('}');

    options.insert(SETUP_KEY.to_string(), OptionValue::Code(setup));
    append_toolbar(options, &toolbar);
}

/// Append to the `toolbar` string; a missing or non-string value coerces
/// to the empty string.
fn append_toolbar(options: &mut OptionMap, suffix: &str) {
    let current = match options.get(TOOLBAR_KEY) {
        Some(OptionValue::String(s)) => s.clone(),
        _ => String::new(),
    };
    options.insert(
        TOOLBAR_KEY.to_string(),
        OptionValue::String(current + suffix),
    );
}
