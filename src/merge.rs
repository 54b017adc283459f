//! Layered option merging: global defaults, named template layer, call-site
//! overrides.

use crate::autofields::{self, AutoFieldMode};
use crate::config::WysiwygConfig;
use crate::fields::FieldCatalog;
use crate::value::{OptionMap, OptionValue};

/// Reserved call-site key selecting a named template layer.
pub const TEMPLATE_KEY: &str = "template";

/// Reserved call-site key enabling auto-field synthesis.
pub const AUTO_FIELDS_KEY: &str = "autoFields";

/// Recursively overlay `layer` onto `base`.
///
/// The later writer wins per key; nested maps merge key-wise instead of
/// replacing wholesale.
pub fn overlay(base: &mut OptionMap, layer: OptionMap) {
    for (key, value) in layer {
        let merged = match (base.remove(&key), value) {
            (Some(OptionValue::Map(mut existing)), OptionValue::Map(incoming)) => {
                overlay(&mut existing, incoming);
                OptionValue::Map(existing)
            }
            (_, value) => value,
        };
        base.insert(key, merged);
    }
}

/// Build the effective option map for one render call.
///
/// Layering precedence is global defaults < template layer < call-site
/// options. The reserved `template` and `autoFields` keys are consumed here
/// and never survive into the result. Unknown template names and unknown
/// entity types degrade to empty layers; this function never fails.
pub fn effective_options(
    config: &WysiwygConfig,
    catalog: &FieldCatalog,
    entity_type: Option<&str>,
    mut call_options: OptionMap,
) -> OptionMap {
    let mut effective = config.default.clone();

    if let Some(selector) = call_options.remove(TEMPLATE_KEY) {
        match selector.as_str() {
            Some(name) => match config.template(name) {
                Some(layer) => overlay(&mut effective, layer.clone()),
                None => log::debug!("wysiwyg template '{}' is not configured, skipping layer", name),
            },
            None => log::debug!("reserved 'template' option is not a string, skipping layer"),
        }
    }

    let mode = AutoFieldMode::from_value(call_options.remove(AUTO_FIELDS_KEY).as_ref());

    overlay(&mut effective, call_options);

    if mode.is_active() {
        let fields = entity_type
            .map(|entity| catalog.fields_for(entity))
            .unwrap_or(&[]);
        if fields.is_empty() {
            log::debug!("no auto fields registered for entity {:?}", entity_type);
        }
        autofields::apply(&mut effective, fields, mode);
    }

    effective
}
