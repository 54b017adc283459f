use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Prefix that marks a string from an untyped configuration document as an
/// inline function body rather than ordinary data.
pub const CODE_PREFIX: &str = "function(";

/// An ordered editor option dictionary
pub type OptionMap = BTreeMap<String, OptionValue>;

/// A single editor option value.
///
/// `Code` holds a literal JavaScript expression that the serializer emits
/// verbatim and unquoted; every other variant follows ordinary JSON quoting.
/// API callers construct `Code` deliberately via [`OptionValue::code`];
/// only the `Deserialize` impl falls back to the [`CODE_PREFIX`] convention,
/// because untyped config documents have no way to express the tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Code(String),
    List(Vec<OptionValue>),
    Map(OptionMap),
}

impl OptionValue {
    /// A literal JavaScript expression, emitted unquoted by the serializer.
    pub fn code(code: impl Into<String>) -> Self {
        OptionValue::Code(code.into())
    }

    /// Promote a string read from an untyped configuration document:
    /// inline function bodies become `Code`, everything else stays an
    /// ordinary string.
    pub fn from_config_str(s: &str) -> Self {
        if s.starts_with(CODE_PREFIX) {
            OptionValue::Code(s.to_string())
        } else {
            OptionValue::String(s.to_string())
        }
    }

    /// The ordinary string content, if this is a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The nested dictionary, if this is a `Map` value.
    pub fn as_map(&self) -> Option<&OptionMap> {
        match self {
            OptionValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// PHP-style truthiness: `false`, `0`, `""`, `"0"`, and empty
    /// collections are falsy, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            OptionValue::Bool(b) => *b,
            OptionValue::Int(n) => *n != 0,
            OptionValue::Float(n) => *n != 0.0,
            OptionValue::String(s) => !s.is_empty() && s != "0",
            OptionValue::Code(_) => true,
            OptionValue::List(items) => !items.is_empty(),
            OptionValue::Map(map) => !map.is_empty(),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Bool(v)
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        OptionValue::Int(v)
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        OptionValue::Float(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::String(v.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        OptionValue::String(v)
    }
}

impl From<Vec<OptionValue>> for OptionValue {
    fn from(v: Vec<OptionValue>) -> Self {
        OptionValue::List(v)
    }
}

impl From<OptionMap> for OptionValue {
    fn from(v: OptionMap) -> Self {
        OptionValue::Map(v)
    }
}

impl<'de> Deserialize<'de> for OptionValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = OptionValue;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a boolean, number, string, list, or map")
            }

            fn visit_bool<E>(self, v: bool) -> Result<OptionValue, E> {
                Ok(OptionValue::Bool(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<OptionValue, E> {
                Ok(OptionValue::Int(v))
            }

            fn visit_u64<E>(self, v: u64) -> Result<OptionValue, E> {
                Ok(OptionValue::Int(v.try_into().unwrap_or(i64::MAX)))
            }

            fn visit_f64<E>(self, v: f64) -> Result<OptionValue, E> {
                Ok(OptionValue::Float(v))
            }

            fn visit_str<E>(self, v: &str) -> Result<OptionValue, E> {
                Ok(OptionValue::from_config_str(v))
            }

            // Nulls coerce to a falsy flag rather than erroring
            fn visit_unit<E>(self) -> Result<OptionValue, E> {
                Ok(OptionValue::Bool(false))
            }

            fn visit_none<E>(self) -> Result<OptionValue, E> {
                Ok(OptionValue::Bool(false))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<OptionValue, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(OptionValue::List(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<OptionValue, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut out = OptionMap::new();
                while let Some((key, value)) = map.next_entry::<String, OptionValue>()? {
                    out.insert(key, value);
                }
                Ok(OptionValue::Map(out))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!OptionValue::Bool(false).is_truthy());
        assert!(!OptionValue::Int(0).is_truthy());
        assert!(!OptionValue::from("").is_truthy());
        assert!(!OptionValue::from("0").is_truthy());
        assert!(!OptionValue::List(vec![]).is_truthy());

        assert!(OptionValue::Bool(true).is_truthy());
        assert!(OptionValue::from("select").is_truthy());
        assert!(OptionValue::code("function(e) {}").is_truthy());
    }

    #[test]
    fn test_config_str_promotion() {
        assert_eq!(
            OptionValue::from_config_str("function(editor) {}"),
            OptionValue::Code("function(editor) {}".to_string())
        );
        assert_eq!(
            OptionValue::from_config_str("bold italic"),
            OptionValue::String("bold italic".to_string())
        );
    }

    #[test]
    fn test_deserialize_promotes_function_strings() {
        let yaml = "setup: \"function(editor) { editor.focus(); }\"\ntoolbar: \"bold\"\nmenubar: false";
        let map: OptionMap = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            map.get("setup"),
            Some(&OptionValue::Code(
                "function(editor) { editor.focus(); }".to_string()
            ))
        );
        assert_eq!(map.get("toolbar"), Some(&OptionValue::from("bold")));
        assert_eq!(map.get("menubar"), Some(&OptionValue::Bool(false)));
    }

    #[test]
    fn test_deserialize_nested() {
        let yaml = "style_formats:\n  - title: Header\n    block: h1\nwidth: 300";
        let map: OptionMap = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(map.get("width"), Some(&OptionValue::Int(300)));
        match map.get("style_formats") {
            Some(OptionValue::List(items)) => assert_eq!(items.len(), 1),
            other => panic!("expected list, got {:?}", other),
        }
    }
}
