use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One insertable placeholder field for an entity type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Key the toolbar button name is derived from (e.g. "shop")
    pub key: String,
    /// Button label shown to the editing user
    pub label: String,
    /// Token inserted into the document at the cursor (e.g. "{SHOP}")
    pub output: String,
}

impl FieldSpec {
    pub fn new(key: &str, label: &str, output: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            output: output.to_string(),
        }
    }

    /// Toolbar button name for per-field mode: `insertButton` plus the
    /// capitalized field key.
    pub fn button_name(&self) -> String {
        format!("insertButton{}", capitalize(&self.key))
    }
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Table of auto-insertable fields per entity type.
///
/// Lookups for unregistered entity types yield an empty field set — auto
/// fields simply synthesize nothing for them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldCatalog {
    entities: BTreeMap<String, Vec<FieldSpec>>,
}

impl FieldCatalog {
    /// An empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock catalog shipped with the helper.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.register(
            "Offer",
            vec![
                FieldSpec::new("shop", "Shopname", "{SHOP}"),
                FieldSpec::new("date", "Current Date", "{DATE}"),
                FieldSpec::new("start", "Startdate", "{START}"),
                FieldSpec::new("end", "Enddate", "{END}"),
                FieldSpec::new("worth", "Worth", "{VALUE}"),
            ],
        );
        catalog.register(
            "Shop",
            vec![
                FieldSpec::new("shop", "Shopname", "{SHOP}"),
                FieldSpec::new("date", "Current Date", "{DATE}"),
            ],
        );
        catalog
    }

    /// Register (or replace) the field set for an entity type.
    pub fn register(&mut self, entity: &str, fields: Vec<FieldSpec>) {
        self.entities.insert(entity.to_string(), fields);
    }

    /// Fields for an entity type, in table order; unknown types yield an
    /// empty slice.
    pub fn fields_for(&self, entity: &str) -> &[FieldSpec] {
        self.entities.get(entity).map(Vec::as_slice).unwrap_or(&[])
    }
}
