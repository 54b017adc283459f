use crate::value::{OptionMap, OptionValue};

/// Per-render-context state: the one-shot asset guard plus everything
/// collected for the page head. Create a fresh context for each
/// request/response cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderContext {
    initialized: bool,
    /// Stylesheet hrefs enqueued for the page head
    pub css: Vec<String>,
    /// Raw CSS blocks enqueued for the page head
    pub css_text: Vec<String>,
    /// Script srcs enqueued for the page head
    pub scripts: Vec<String>,
    buffered: Vec<String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue the helper assets from `_css`, `_cssText`, and `_scripts`.
    /// Only the first call in a context does anything; later calls are
    /// no-ops so a page with many editor fields loads each asset once.
    pub fn enqueue_assets(&mut self, options: &OptionMap) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        for href in string_items(options.get("_css")) {
            self.css.push(href.to_string());
        }
        if let Some(OptionValue::String(text)) = options.get("_cssText") {
            if !text.is_empty() {
                self.css_text.push(text.clone());
            }
        }
        for src in string_items(options.get("_scripts")) {
            self.scripts.push(src.to_string());
        }
    }

    /// Hold an init statement back from inline emission.
    pub fn buffer(&mut self, script: String) {
        self.buffered.push(script);
    }

    /// Drain the buffered init statements; the host emits these at the end
    /// of the page.
    pub fn take_buffered(&mut self) -> Vec<String> {
        std::mem::take(&mut self.buffered)
    }
}

/// Asset lists tolerate a single string, a list, or a keyed map; anything
/// else coerces to the empty set.
fn string_items(value: Option<&OptionValue>) -> Vec<&str> {
    match value {
        Some(OptionValue::String(s)) => vec![s.as_str()],
        Some(OptionValue::List(items)) => items
            .iter()
            .filter_map(OptionValue::as_str)
            .collect(),
        Some(OptionValue::Map(map)) => map
            .values()
            .filter_map(OptionValue::as_str)
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset_options() -> OptionMap {
        let mut options = OptionMap::new();
        options.insert(
            "_css".to_string(),
            OptionValue::List(vec![OptionValue::from("/css/editor.css")]),
        );
        options.insert("_cssText".to_string(), OptionValue::from(".mce { margin: 0 }"));
        options.insert(
            "_scripts".to_string(),
            OptionValue::List(vec![
                OptionValue::from("/asset/tinymce/tinymce.min.js"),
                OptionValue::from("/js/plugin.min.js"),
            ]),
        );
        options
    }

    #[test]
    fn test_assets_enqueue_once() {
        let mut ctx = RenderContext::new();
        ctx.enqueue_assets(&asset_options());
        ctx.enqueue_assets(&asset_options());

        assert_eq!(ctx.css, vec!["/css/editor.css"]);
        assert_eq!(ctx.css_text, vec![".mce { margin: 0 }"]);
        assert_eq!(
            ctx.scripts,
            vec!["/asset/tinymce/tinymce.min.js", "/js/plugin.min.js"]
        );
    }

    #[test]
    fn test_scalar_asset_entry_counts_as_one() {
        let mut options = OptionMap::new();
        options.insert("_css".to_string(), OptionValue::from("/one.css"));
        let mut ctx = RenderContext::new();
        ctx.enqueue_assets(&options);
        assert_eq!(ctx.css, vec!["/one.css"]);
    }

    #[test]
    fn test_buffered_scripts_drain() {
        let mut ctx = RenderContext::new();
        ctx.buffer("tinyMCE.init({});".to_string());
        assert_eq!(ctx.take_buffered(), vec!["tinyMCE.init({});"]);
        assert!(ctx.take_buffered().is_empty());
    }
}
