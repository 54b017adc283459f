//! Widget-initialization payload serialization.
//!
//! The payload is JSON except that `Code` values must appear unquoted and
//! verbatim. Rather than hand-rolling a JSON writer with raw leaves, the map
//! is serialized twice: first fully quoted with each `Code` leaf replaced by
//! a `%key.path%` placeholder, then every quoted placeholder is substituted
//! with the raw code text.

use crate::error::{WysiwygError, WysiwygResult};
use crate::value::{OptionMap, OptionValue};
use serde_json::{Map as JsonMap, Value as JsonValue};

/// Keys consumed by asset enqueueing, never part of the widget payload.
pub const RESERVED_KEYS: [&str; 5] = ["_buffer", "_css", "_cssText", "_scripts", "_editor"];

/// Serialize an effective option map into the widget-initialization payload.
///
/// A placeholder whose quoted form does not occur exactly once in the
/// intermediate JSON is reported as [`WysiwygError::PlaceholderCollision`]
/// instead of silently corrupting the output.
pub fn serialize_options(options: &OptionMap) -> WysiwygResult<String> {
    let mut literals: Vec<(String, String)> = Vec::new();
    let mut body = JsonMap::new();
    for (key, value) in options {
        if RESERVED_KEYS.contains(&key.as_str()) {
            continue;
        }
        body.insert(key.clone(), quoted_value(key, value, &mut literals));
    }

    let mut json = serde_json::to_string(&JsonValue::Object(body))?;

    for (token, code) in literals {
        let quoted = format!("\"{}\"", token);
        if json.matches(&quoted).count() != 1 {
            return Err(WysiwygError::PlaceholderCollision { token });
        }
        json = json.replace(&quoted, &code);
    }

    Ok(json)
}

/// First pass: every value quoted, `Code` leaves swapped for placeholders
/// keyed by their dot-joined path.
fn quoted_value(
    path: &str,
    value: &OptionValue,
    literals: &mut Vec<(String, String)>,
) -> JsonValue {
    match value {
        OptionValue::Bool(b) => JsonValue::Bool(*b),
        OptionValue::Int(n) => JsonValue::from(*n),
        OptionValue::Float(n) => JsonValue::from(*n),
        OptionValue::String(s) => JsonValue::String(s.clone()),
        OptionValue::Code(code) => {
            let token = format!("%{}%", path);
            literals.push((token.clone(), code.clone()));
            JsonValue::String(token)
        }
        OptionValue::List(items) => JsonValue::Array(
            items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    quoted_value(&format!("{}.{}", path, index), item, literals)
                })
                .collect(),
        ),
        OptionValue::Map(map) => {
            let mut out = JsonMap::new();
            for (key, item) in map {
                out.insert(
                    key.clone(),
                    quoted_value(&format!("{}.{}", path, key), item, literals),
                );
            }
            JsonValue::Object(out)
        }
    }
}
