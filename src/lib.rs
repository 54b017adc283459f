//! # Wysiwyg form helpers
//!
//! Renders HTML form fields wired to a rich-text editor widget: the control
//! markup, the widget-initialization script, and the stylesheet/script asset
//! references the page needs — enqueued exactly once per render context.
//!
//! ## Features
//! - Layered option merging: global defaults ← named template layer ←
//!   call-site overrides, recursive and last-writer-wins
//! - Initialization payloads with literal JavaScript leaves: `Code` values
//!   are emitted unquoted and verbatim inside an otherwise ordinary JSON
//!   object
//! - Auto-field toolbars synthesized from a per-entity field catalog
//! - Editor adapters behind a trait; TinyMCE ships in the box
//!
//! ## Example
//! ```ignore
//! use wysiwyg::{FieldOptions, OptionMap, RenderContext, WysiwygConfig, WysiwygHelper};
//!
//! let config = WysiwygConfig::from_yaml(r#"
//! default:
//!   toolbar: "undo redo | bold italic"
//!   menubar: false
//! "#)?;
//!
//! let helper = WysiwygHelper::new(config);
//! let mut ctx = RenderContext::new();
//! let html = helper.textarea(
//!     &mut ctx,
//!     "Offer.how_it_works",
//!     &FieldOptions::default(),
//!     OptionMap::new(),
//! )?;
//! ```

pub mod autofields;
pub mod config;
pub mod context;
pub mod editor;
pub mod error;
pub mod fields;
pub mod helper;
pub mod markup;
pub mod merge;
pub mod serialize;
pub mod value;

// --- Core types ---
pub use config::WysiwygConfig;
pub use context::RenderContext;
pub use editor::{Editor, Tinymce};
pub use error::{WysiwygError, WysiwygResult};
pub use fields::{FieldCatalog, FieldSpec};
pub use helper::WysiwygHelper;
pub use markup::FieldOptions;
pub use value::{OptionMap, OptionValue, CODE_PREFIX};

// --- Operations ---
pub use autofields::AutoFieldMode;
pub use merge::{effective_options, overlay};
pub use serialize::serialize_options;
