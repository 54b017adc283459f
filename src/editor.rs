use crate::error::WysiwygResult;
use crate::serialize::serialize_options;
use crate::value::{OptionMap, OptionValue};

/// Adapter for one concrete editor widget.
///
/// `defaults` supplies the editor-level base options (asset lists,
/// URL-handling flags) layered beneath the application configuration;
/// `init_script` wraps the serialized payload in the widget's bootstrap
/// call.
pub trait Editor {
    /// Editor name carried in the reserved `_editor` option.
    fn name(&self) -> &'static str;

    /// Base options layered beneath the application configuration.
    fn defaults(&self) -> OptionMap;

    /// The inline initialization statement for one field.
    fn init_script(&self, options: &OptionMap) -> WysiwygResult<String>;
}

/// TinyMCE adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tinymce;

impl Editor for Tinymce {
    fn name(&self) -> &'static str {
        "tinymce"
    }

    fn defaults(&self) -> OptionMap {
        let mut options = OptionMap::new();
        options.insert("relative_urls".to_string(), OptionValue::Bool(false));
        options.insert("remove_script_host".to_string(), OptionValue::Bool(false));
        options.insert("_buffer".to_string(), OptionValue::Bool(false));
        options.insert(
            "_scripts".to_string(),
            OptionValue::List(vec![
                OptionValue::from("/asset/tinymce/tinymce.min.js"),
                OptionValue::from("/js/admin/tinymce.charcount.min.js"),
                OptionValue::from("/js/admin/jbimages/plugin.min.js"),
            ]),
        );
        options
    }

    fn init_script(&self, options: &OptionMap) -> WysiwygResult<String> {
        Ok(format!("tinyMCE.init({});", serialize_options(options)?))
    }
}
