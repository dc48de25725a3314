use pagewright::custom::{CustomComponentSpec, CustomStore};
use pagewright::document::{ComponentInstance, Document};
use pagewright::props::{PropField, PropMap, PropValue, PropWidget};
use pagewright::registry::Registry;
use pagewright::render::{render_instance, render_page, RenderMode, Viewport};
use pagewright::{export_html, EditorConfig};
use chrono::Utc;

fn config() -> EditorConfig {
    EditorConfig::default()
}

fn props(entries: &[(&str, &str)]) -> PropMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), PropValue::Text(v.to_string())))
        .collect()
}

fn custom_with(html: &str, css: &str, js: &str) -> (CustomStore, String) {
    let mut store = CustomStore::new();
    let tag = store
        .insert(
            CustomComponentSpec {
                name: "Banner".to_string(),
                icon: "Box".to_string(),
                html: html.to_string(),
                css: css.to_string(),
                js: js.to_string(),
                editable_props: vec![PropField::new("title", "Title", PropWidget::Text)],
            },
            Utc::now(),
        )
        .unwrap();
    (store, tag)
}

#[test]
fn test_custom_template_substitution() {
    let (store, tag) = custom_with("<h2>{{title}}</h2>", "", "");
    let registry = Registry::new(&store);
    let mut instance = ComponentInstance::new(&tag, &PropMap::new());
    instance
        .props
        .insert("title".to_string(), PropValue::Text("Hello".to_string()));

    let html = render_instance(&instance, &registry, &config());
    assert!(html.contains("<h2>Hello</h2>"));
}

#[test]
fn test_substituted_values_are_escaped() {
    let (store, tag) = custom_with("<h2>{{title}}</h2>", "", "");
    let registry = Registry::new(&store);
    let mut instance = ComponentInstance::new(&tag, &PropMap::new());
    instance.props.insert(
        "title".to_string(),
        PropValue::Text("<img onerror=x>".to_string()),
    );

    let html = render_instance(&instance, &registry, &config());
    assert!(!html.contains("<img"));
    assert!(html.contains("&lt;img"));
}

#[test]
fn test_absent_placeholder_stays_literal() {
    let (store, tag) = custom_with("<h2>{{title}}</h2><p>{{missing}}</p>", "", "");
    let registry = Registry::new(&store);
    let mut instance = ComponentInstance::new(&tag, &PropMap::new());
    instance
        .props
        .insert("title".to_string(), PropValue::Text("Hi".to_string()));

    let html = render_instance(&instance, &registry, &config());
    assert!(html.contains("<h2>Hi</h2>"));
    assert!(html.contains("{{missing}}"));
}

#[test]
fn test_custom_css_is_emitted() {
    let (store, tag) = custom_with("<h2>{{title}}</h2>", ".banner { color: red; }", "");
    let registry = Registry::new(&store);
    let instance = ComponentInstance::new(&tag, &PropMap::new());

    let html = render_instance(&instance, &registry, &config());
    assert!(html.contains("<style>"));
    assert!(html.contains(".banner { color: red; }"));
}

#[test]
fn test_custom_js_suppressed_by_default() {
    let (store, tag) = custom_with("<h2>{{title}}</h2>", "", "console.log('hi')");
    let registry = Registry::new(&store);
    let instance = ComponentInstance::new(&tag, &PropMap::new());

    let html = render_instance(&instance, &registry, &config());
    assert!(!html.contains("<script"));
    assert!(!html.contains("console.log"));
}

#[test]
fn test_custom_js_behind_opt_in() {
    let (store, tag) = custom_with("<h2>{{title}}</h2>", "", "console.log('hi')");
    let registry = Registry::new(&store);
    let instance = ComponentInstance::new(&tag, &PropMap::new());
    let config = EditorConfig {
        allow_custom_scripts: true,
        ..EditorConfig::default()
    };

    let html = render_instance(&instance, &registry, &config);
    assert!(html.contains("<script>"));
    assert!(html.contains("console.log('hi')"));
}

#[test]
fn test_inline_handlers_stripped_when_scripts_off() {
    let (store, tag) = custom_with("<button onclick=\"evil()\">{{title}}</button>", "", "");
    let registry = Registry::new(&store);
    let instance = ComponentInstance::new(&tag, &PropMap::new());

    let html = render_instance(&instance, &registry, &config());
    assert!(!html.contains("onclick="));
}

#[test]
fn test_unknown_type_renders_placeholder() {
    let store = CustomStore::new();
    let registry = Registry::new(&store);
    let instance = ComponentInstance::new("carousel", &PropMap::new());

    let html = render_instance(&instance, &registry, &config());
    assert!(html.contains("pw-unknown"));
    assert!(html.contains("Component: carousel"));
}

#[test]
fn test_builtin_text_block() {
    let store = CustomStore::new();
    let registry = Registry::new(&store);
    let mut instance = ComponentInstance::new("text", &PropMap::new());
    instance.props = props(&[
        ("content", "Hello & welcome"),
        ("fontSize", "xl"),
        ("textAlign", "right"),
        ("color", "#ff0000"),
    ]);

    let html = render_instance(&instance, &registry, &config());
    assert!(html.contains("pw-text-xl"));
    assert!(html.contains("text-align:right"));
    assert!(html.contains("color:#ff0000;"));
    assert!(html.contains("Hello &amp; welcome"));
}

#[test]
fn test_builtin_fallbacks_on_garbage() {
    let store = CustomStore::new();
    let registry = Registry::new(&store);
    let mut instance = ComponentInstance::new("text", &PropMap::new());
    instance.props = props(&[
        ("fontSize", "massive"),
        ("textAlign", "diagonal"),
        ("color", "not-a-color"),
    ]);

    let html = render_instance(&instance, &registry, &config());
    assert!(html.contains("pw-text-base"));
    assert!(html.contains("text-align:center"));
    assert!(!html.contains("not-a-color"));
}

#[test]
fn test_unsafe_urls_render_empty() {
    let store = CustomStore::new();
    let registry = Registry::new(&store);
    let mut instance = ComponentInstance::new("button", &PropMap::new());
    instance.props = props(&[("text", "go"), ("link", "javascript:alert(1)")]);

    let html = render_instance(&instance, &registry, &config());
    assert!(html.contains("href=\"\""));
    assert!(!html.contains("javascript:"));
}

#[test]
fn test_columns_count_clamped() {
    let store = CustomStore::new();
    let registry = Registry::new(&store);
    let mut instance = ComponentInstance::new("columns", &PropMap::new());
    instance.props = props(&[("columnCount", "9")]);

    let html = render_instance(&instance, &registry, &config());
    assert!(html.contains("repeat(4,1fr)"));
}

#[test]
fn test_editor_mode_wraps_with_affordances() {
    let store = CustomStore::new();
    let mut doc = Document::new();
    doc.push(ComponentInstance::new("hero", &PropMap::new()));
    doc.push(ComponentInstance::new("text", &PropMap::new()));
    let selected = doc.components()[1].id.clone();

    let html = render_page(
        &doc,
        &store,
        &RenderMode::Editor {
            selected: Some(selected.clone()),
        },
        &config(),
    );
    assert!(html.contains("pw-selected"));
    assert!(html.contains(&format!("data-component-id=\"{}\"", selected)));
    // First component cannot move up, last cannot move down.
    assert!(html.contains("data-can-move-up=\"false\""));
    assert!(html.contains("data-can-move-down=\"false\""));
    assert!(html.contains("pw-toolbar"));
}

#[test]
fn test_export_mode_is_affordance_free() {
    let store = CustomStore::new();
    let mut doc = Document::new();
    doc.push(ComponentInstance::new("hero", &PropMap::new()));

    let html = render_page(&doc, &store, &RenderMode::Export, &config());
    assert!(!html.contains("pw-component"));
    assert!(!html.contains("data-component-id"));
    assert!(!html.contains("pw-toolbar"));
}

#[test]
fn test_preview_mode_constrains_width() {
    let store = CustomStore::new();
    let mut doc = Document::new();
    doc.push(ComponentInstance::new("text", &PropMap::new()));

    let html = render_page(
        &doc,
        &store,
        &RenderMode::Preview {
            viewport: Viewport::Mobile,
        },
        &config(),
    );
    assert!(html.contains("pw-preview"));
    assert!(html.contains("width:375px"));

    let html = render_page(
        &doc,
        &store,
        &RenderMode::Preview {
            viewport: Viewport::Desktop,
        },
        &config(),
    );
    assert!(html.contains("width:100%"));
}

#[test]
fn test_render_order_follows_document_order() {
    let store = CustomStore::new();
    let mut doc = Document::new();
    doc.push(ComponentInstance::new("hero", &PropMap::new()));
    doc.push(ComponentInstance::new("spacer", &PropMap::new()));

    let html = render_page(&doc, &store, &RenderMode::Export, &config());
    let hero = html.find("pw-hero").unwrap();
    let spacer = html.find("pw-spacer").unwrap();
    assert!(hero < spacer);
}

#[test]
fn test_export_html_document_shell() {
    let (store, tag) = custom_with("<h2>{{title}}</h2>", ".banner { color: red; }", "evil()");
    let mut doc = Document::new();
    doc.push(ComponentInstance::new(&tag, &PropMap::new()));

    let html = export_html(&doc, &store, "My <Site>", &config());
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>My &lt;Site&gt;</title>"));
    assert!(html.contains(".banner { color: red; }"));
    assert!(html.contains("page-container"));
    // Scripts are off by default, even in export.
    assert!(!html.contains("evil()"));
}

#[test]
fn test_export_html_scripts_opt_in() {
    let (store, tag) = custom_with("<h2>{{title}}</h2>", "", "init()");
    let mut doc = Document::new();
    doc.push(ComponentInstance::new(&tag, &PropMap::new()));
    let config = EditorConfig {
        allow_custom_scripts: true,
        ..EditorConfig::default()
    };

    let html = export_html(&doc, &store, "Site", &config);
    assert!(html.contains("init()"));
}
