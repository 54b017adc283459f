use crate::config::WysiwygConfig;
use crate::context::RenderContext;
use crate::editor::{Editor, Tinymce};
use crate::error::WysiwygResult;
use crate::fields::FieldCatalog;
use crate::markup::{self, FieldOptions};
use crate::merge;
use crate::value::{OptionMap, OptionValue};

/// Renders rich-text form fields: the control markup plus the editor
/// initialization script, with page assets enqueued once per context.
///
/// Field names may be model-qualified (`"Offer.how_it_works"`); the model
/// segment doubles as the entity type for auto-field lookup, and the DOM id
/// is the camelized concatenation (`OfferHowItWorks`).
#[derive(Debug, Clone)]
pub struct WysiwygHelper<E: Editor = Tinymce> {
    editor: E,
    config: WysiwygConfig,
    catalog: FieldCatalog,
}

impl WysiwygHelper<Tinymce> {
    /// Helper with the TinyMCE adapter and the stock field catalog.
    pub fn new(config: WysiwygConfig) -> Self {
        Self::with_editor(Tinymce, config, FieldCatalog::builtin())
    }
}

impl<E: Editor> WysiwygHelper<E> {
    /// Helper with a custom editor adapter and field catalog. The editor's
    /// base options are layered beneath the application defaults here, so
    /// the per-call merge only ever sees three layers.
    pub fn with_editor(editor: E, config: WysiwygConfig, catalog: FieldCatalog) -> Self {
        let mut default = editor.defaults();
        default.insert(
            "_editor".to_string(),
            OptionValue::from(editor.name()),
        );
        merge::overlay(&mut default, config.default);
        let config = WysiwygConfig {
            default,
            templates: config.templates,
        };
        Self {
            editor,
            config,
            catalog,
        }
    }

    /// Render a textarea-backed editor field.
    pub fn textarea(
        &self,
        ctx: &mut RenderContext,
        field_name: &str,
        field_options: &FieldOptions,
        helper_options: OptionMap,
    ) -> WysiwygResult<String> {
        let control = markup::textarea(field_name, field_options);
        let script = self.build(ctx, field_name, helper_options)?;
        Ok(control + &script)
    }

    /// Render a single-line-input-backed editor field.
    pub fn input(
        &self,
        ctx: &mut RenderContext,
        field_name: &str,
        field_options: &FieldOptions,
        helper_options: OptionMap,
    ) -> WysiwygResult<String> {
        let control = markup::input(field_name, field_options);
        let script = self.build(ctx, field_name, helper_options)?;
        Ok(control + &script)
    }

    /// Merge the option layers, enqueue assets, and produce the inline
    /// script block — or the empty string when `_buffer` is set, in which
    /// case the statement lands in the context buffer.
    fn build(
        &self,
        ctx: &mut RenderContext,
        field_name: &str,
        helper_options: OptionMap,
    ) -> WysiwygResult<String> {
        let entity = entity_of(field_name);
        let mut options =
            merge::effective_options(&self.config, &self.catalog, entity, helper_options);

        ctx.enqueue_assets(&options);

        options.insert(
            "selector".to_string(),
            OptionValue::String(format!("#{}", markup::dom_id(field_name))),
        );

        let buffer = options
            .get("_buffer")
            .map(OptionValue::is_truthy)
            .unwrap_or(false);

        let script = self.editor.init_script(&options)?;
        log::debug!(
            "wysiwyg init for field '{}' ({} bytes)",
            field_name,
            script.len()
        );

        if buffer {
            ctx.buffer(script);
            Ok(String::new())
        } else {
            Ok(markup::script_block(&script))
        }
    }
}

/// The model segment of a qualified field name, if any.
fn entity_of(field_name: &str) -> Option<&str> {
    let mut parts = field_name.splitn(2, '.');
    let first = parts.next()?;
    parts.next().map(|_| first)
}
