use pretty_assertions::assert_eq;
use wysiwyg::{
    effective_options, serialize_options, FieldCatalog, FieldOptions, OptionMap, OptionValue,
    RenderContext, WysiwygConfig, WysiwygError, WysiwygHelper,
};

fn options(entries: &[(&str, OptionValue)]) -> OptionMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn stock_config() -> WysiwygConfig {
    WysiwygConfig::from_yaml(
        r#"
default:
  toolbar: "undo redo | bold italic underline | link searchreplace | code"
  plugins: "searchreplace link code paste"
  menubar: false
  paste_as_text: true
  statusbar: false
  toolbar_items_size: "small"
minimal:
  toolbar: "bold italic"
  plugins: "paste"
"#,
    )
    .expect("stock config should parse")
}

// Rendering

#[test]
fn test_textarea_renders_control_and_script() {
    let helper = WysiwygHelper::new(stock_config());
    let mut ctx = RenderContext::new();

    let html = helper
        .textarea(
            &mut ctx,
            "Offer.how_it_works",
            &FieldOptions::default(),
            OptionMap::new(),
        )
        .unwrap();

    assert!(html.contains("<textarea name=\"data[Offer][how_it_works]\" id=\"OfferHowItWorks\""));
    assert!(html.contains("<script type=\"text/javascript\">tinyMCE.init({"));
    assert!(html.contains("\"selector\":\"#OfferHowItWorks\""));
    assert!(html.ends_with("});</script>"));
}

#[test]
fn test_input_renders_text_control() {
    let helper = WysiwygHelper::new(stock_config());
    let mut ctx = RenderContext::new();

    let html = helper
        .input(
            &mut ctx,
            "Shop.name",
            &FieldOptions {
                value: Some("Corner Store".to_string()),
                ..FieldOptions::default()
            },
            OptionMap::new(),
        )
        .unwrap();

    assert!(html.contains("<input type=\"text\" name=\"data[Shop][name]\" id=\"ShopName\" value=\"Corner Store\"/>"));
    assert!(html.contains("\"selector\":\"#ShopName\""));
}

#[test]
fn test_reserved_internal_keys_never_reach_the_widget() {
    let helper = WysiwygHelper::new(stock_config());
    let mut ctx = RenderContext::new();

    let html = helper
        .textarea(
            &mut ctx,
            "Offer.body",
            &FieldOptions::default(),
            OptionMap::new(),
        )
        .unwrap();

    assert!(!html.contains("_scripts"));
    assert!(!html.contains("_buffer"));
    assert!(!html.contains("_editor"));
}

#[test]
fn test_buffered_script_is_held_back() {
    let helper = WysiwygHelper::new(stock_config());
    let mut ctx = RenderContext::new();

    let html = helper
        .textarea(
            &mut ctx,
            "Offer.body",
            &FieldOptions::default(),
            options(&[("_buffer", OptionValue::Bool(true))]),
        )
        .unwrap();

    assert!(!html.contains("<script"));
    let buffered = ctx.take_buffered();
    assert_eq!(buffered.len(), 1);
    assert!(buffered[0].starts_with("tinyMCE.init({"));
}

// Asset enqueueing

#[test]
fn test_assets_enqueue_once_per_context() {
    let helper = WysiwygHelper::new(stock_config());
    let mut ctx = RenderContext::new();

    helper
        .textarea(&mut ctx, "Offer.body", &FieldOptions::default(), OptionMap::new())
        .unwrap();
    helper
        .textarea(&mut ctx, "Offer.terms", &FieldOptions::default(), OptionMap::new())
        .unwrap();

    assert_eq!(
        ctx.scripts,
        vec![
            "/asset/tinymce/tinymce.min.js",
            "/js/admin/tinymce.charcount.min.js",
            "/js/admin/jbimages/plugin.min.js",
        ]
    );
}

// Auto fields

#[test]
fn test_select_mode_synthesizes_menu_button() {
    let helper = WysiwygHelper::new(stock_config());
    let mut ctx = RenderContext::new();

    let html = helper
        .textarea(
            &mut ctx,
            "Shop.description",
            &FieldOptions::default(),
            options(&[("autoFields", OptionValue::from("select"))]),
        )
        .unwrap();

    // toolbar gains exactly the composite button
    assert!(html.contains("| code | insertButton\""));
    // unquoted setup handler with one menu entry per field, in table order
    assert!(html.contains("\"setup\":function(editor)"));
    let shop = html.find("{SHOP}").expect("shop token in setup");
    let date = html.find("{DATE}").expect("date token in setup");
    assert!(shop < date);
}

#[test]
fn test_buttons_mode_synthesizes_one_button_per_field() {
    let helper = WysiwygHelper::new(stock_config());
    let mut ctx = RenderContext::new();

    let html = helper
        .textarea(
            &mut ctx,
            "Offer.how_it_works",
            &FieldOptions::default(),
            options(&[("autoFields", OptionValue::Bool(true))]),
        )
        .unwrap();

    assert!(html.contains(
        "| insertButtonShop insertButtonDate insertButtonStart insertButtonEnd insertButtonWorth"
    ));
    assert_eq!(html.matches("editor.addButton").count(), 5);
    assert_eq!(html.matches("editor.insertContent").count(), 5);
}

#[test]
fn test_auto_fields_for_unknown_entity_add_no_entries() {
    let helper = WysiwygHelper::new(stock_config());
    let mut ctx = RenderContext::new();

    let html = helper
        .textarea(
            &mut ctx,
            "Invoice.notes",
            &FieldOptions::default(),
            options(&[("autoFields", OptionValue::from("select"))]),
        )
        .unwrap();

    assert!(html.contains("menu: []"));
    assert!(html.contains("| insertButton\""));
}

#[test]
fn test_unqualified_field_gets_no_auto_fields() {
    let helper = WysiwygHelper::new(stock_config());
    let mut ctx = RenderContext::new();

    let html = helper
        .textarea(
            &mut ctx,
            "body",
            &FieldOptions::default(),
            options(&[("autoFields", OptionValue::Bool(true))]),
        )
        .unwrap();

    assert!(!html.contains("editor.addButton"));
}

// Layering

#[test]
fn test_template_layer_applies_between_defaults_and_call_site() {
    let helper = WysiwygHelper::new(stock_config());
    let mut ctx = RenderContext::new();

    let html = helper
        .textarea(
            &mut ctx,
            "Offer.body",
            &FieldOptions::default(),
            options(&[
                ("template", OptionValue::from("minimal")),
                ("menubar", OptionValue::Bool(true)),
            ]),
        )
        .unwrap();

    assert!(html.contains("\"toolbar\":\"bold italic\""));
    assert!(html.contains("\"plugins\":\"paste\""));
    // call site still beats the template layer
    assert!(html.contains("\"menubar\":true"));
    // reserved key consumed
    assert!(!html.contains("\"template\""));
}

#[test]
fn test_merge_precedence_property() {
    let config = WysiwygConfig::from_yaml(
        r#"
default:
  a: "global"
  b: "global"
  c: "global"
tpl:
  b: "template"
  c: "template"
"#,
    )
    .unwrap();

    let effective = effective_options(
        &config,
        &FieldCatalog::new(),
        None,
        options(&[
            ("template", OptionValue::from("tpl")),
            ("c", OptionValue::from("call")),
        ]),
    );

    assert_eq!(effective.get("a"), Some(&OptionValue::from("global")));
    assert_eq!(effective.get("b"), Some(&OptionValue::from("template")));
    assert_eq!(effective.get("c"), Some(&OptionValue::from("call")));
}

// Serialization

#[test]
fn test_function_strings_from_config_pass_through_unquoted() {
    let config = WysiwygConfig::from_yaml(
        r#"
default:
  toolbar: "bold"
  setup: "function(editor) { editor.on('init', go); }"
"#,
    )
    .unwrap();
    let effective = effective_options(&config, &FieldCatalog::new(), None, OptionMap::new());
    let json = serialize_options(&effective).unwrap();

    assert_eq!(
        json,
        r#"{"setup":function(editor) { editor.on('init', go); },"toolbar":"bold"}"#
    );
}

#[test]
fn test_placeholder_collision_surfaces_as_error() {
    let effective = options(&[
        ("setup", OptionValue::code("function(e) {}")),
        ("oninit", OptionValue::from("%setup%")),
    ]);
    let err = serialize_options(&effective).unwrap_err();
    assert!(matches!(err, WysiwygError::PlaceholderCollision { .. }));
}
