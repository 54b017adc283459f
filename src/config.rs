use crate::error::WysiwygResult;
use crate::value::OptionMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Application-level editor configuration: global defaults plus named
/// template layers. Seeded once at startup and immutable afterwards.
///
/// In a YAML configuration document the `default` key holds the global
/// option map and every sibling key names a template layer:
///
/// ```yaml
/// default:
///   toolbar: "undo redo | bold italic"
///   menubar: false
/// minimal:
///   toolbar: "bold italic"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WysiwygConfig {
    /// Options applied to every editor instance
    pub default: OptionMap,
    /// Named override layers selectable per call via the `template` option
    #[serde(flatten)]
    pub templates: BTreeMap<String, OptionMap>,
}

impl WysiwygConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a YAML configuration document.
    pub fn from_yaml(yaml: &str) -> WysiwygResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Named template layer, if configured.
    pub fn template(&self, name: &str) -> Option<&OptionMap> {
        self.templates.get(name)
    }
}
