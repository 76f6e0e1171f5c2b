//! End-to-end responsive resolution tests.

use serde_json::{Value, json};

use stylekit::color::{analogous, hex_to_rgb, hsl_to_hex, rgb_to_hsl};
use stylekit::global;
use stylekit::prelude::*;
use stylekit::resolve::stringify_value;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn request_from(value: Value) -> StyleRequest {
    match value {
        Value::Object(map) => StyleRequest::from(map),
        other => panic!("expected a JSON object, got {other}"),
    }
}

#[test]
fn test_padding_across_every_tier() {
    init_tracing();
    let request = request_from(json!({
        "padding": {"base": "0", "sm": "1rem", "md": "2rem", "lg": "3rem", "xl": "4rem", "2xl": "5rem"}
    }));

    let style = resolve_static(&request);
    let keys: Vec<_> = style.keys().collect();
    assert_eq!(
        keys,
        [
            "padding",
            "@media (min-width: 640px)",
            "@media (min-width: 768px)",
            "@media (min-width: 1024px)",
            "@media (min-width: 1280px)",
            "@media (min-width: 1536px)",
        ]
    );
    assert_eq!(style.str_value("padding"), Some("0"));
    for (key, expected) in [
        ("@media (min-width: 640px)", "1rem"),
        ("@media (min-width: 768px)", "2rem"),
        ("@media (min-width: 1024px)", "3rem"),
        ("@media (min-width: 1280px)", "4rem"),
        ("@media (min-width: 1536px)", "5rem"),
    ] {
        let tier = style.nested(key).expect("tier present");
        assert_eq!(tier.str_value("padding"), Some(expected), "{key}");
    }
}

#[test]
fn test_color_round_trip() {
    let style = resolve_static(&request_from(json!({"color": {"base": "red", "md": "blue"}})));
    let expected = StyleObject::new()
        .with("color", "red")
        .with("@media (min-width: 768px)", StyleObject::new().with("color", "blue"));
    assert_eq!(style, expected);
}

#[test]
fn test_scalars_stay_top_level() {
    let style = resolve_static(&request_from(json!({
        "color": "red",
        "fontSize": 16,
        "border": {"width": "1px"}
    })));
    assert_eq!(style.len(), 3);
    assert!(style.keys().all(|k| !k.starts_with("@media")));
    assert_eq!(style.value("fontSize"), Some(&StyleValue::Number(16.0)));
    assert!(matches!(style.value("border"), Some(StyleValue::Object(_))));
}

#[test]
fn test_missing_base_has_no_top_level_entry() {
    let style = resolve_static(&request_from(json!({"margin": {"lg": "2rem", "sm": "1rem"}})));
    assert!(!style.contains_key("margin"));
    let keys: Vec<_> = style.keys().collect();
    assert_eq!(keys, ["@media (min-width: 640px)", "@media (min-width: 1024px)"]);
}

#[test]
fn test_browser_registry_writes_root_block() {
    init_tracing();
    let sink = LiveSink::new();
    let handle = sink.clone();
    let (source, emitter) = ChannelResizeSource::new();
    let mut registry = StyleRegistry::browser(sink, source);

    let style = registry.responsive(&StyleRequest::new().set("color", "red").set("fontSize", "16px"));
    assert_eq!(style.str_value("color"), Some("var(--css-in-js-utils-0)"));
    assert_eq!(style.str_value("fontSize"), Some("var(--css-in-js-utils-1)"));

    let css = ":root { --css-in-js-utils-0: red;--css-in-js-utils-1: 16px; }";
    assert_eq!(handle.text(), css);
    assert!(registry.is_listening());

    assert!(emitter.emit(1280, 720));
    assert_eq!(registry.process_resize_events(), 1);
    assert_eq!(handle.text(), format!("{css}{css}"));
}

#[test]
fn test_responsive_values_emit_media_blocks() {
    let mut registry = StyleRegistry::browser(LiveSink::new(), ChannelResizeSource::new().0);
    registry.responsive(&request_from(json!({"gap": {"base": 8, "lg": "1.5rem"}})));
    assert_eq!(
        registry.get_responsive_styles(),
        ":root { --css-in-js-utils-0: 8;@media (min-width: 1024px) { --css-in-js-utils-0: 1.5rem; } }"
    );
}

#[test]
fn test_registration_is_injective() {
    let mut registry = StyleRegistry::server();
    let ids: Vec<String> = (0..5)
        .map(|_| {
            let style = registry.responsive(&StyleRequest::new().set("color", "red"));
            style.str_value("color").unwrap().to_string()
        })
        .collect();
    let expected: Vec<String> = (0..5).map(|n| format!("var(--css-in-js-utils-{n})")).collect();
    assert_eq!(ids, expected);
    assert_eq!(registry.property_table().len(), 5);
}

#[test]
fn test_server_registry_never_writes() {
    let mut registry = StyleRegistry::server();
    registry.responsive(&StyleRequest::new().set("color", "red"));
    assert!(registry.is_server());
    assert!(!registry.is_listening());
    assert_eq!(registry.sink_text(), "");
    assert_eq!(registry.get_responsive_styles(), ":root { --css-in-js-utils-0: red; }");
}

#[test]
fn test_stringified_hues_survive_responsive_maps() {
    let [r, g, b] = hex_to_rgb("#0000FF").unwrap();
    let [h, s, l] = rgb_to_hsl(r as f64, g as f64, b as f64);
    let expected = hsl_to_hex(((h + 90) % 360) as f64, s as f64, l as f64);
    let shifted = analogous("#0000FF", 90.0).unwrap();
    assert_eq!(shifted, expected);

    let style = resolve_static(
        &StyleRequest::new().set("color", BreakpointMap::<StyleValue>::new().base("#0000FF").md(shifted.as_str())),
    );
    let md = style.nested("@media (min-width: 768px)").unwrap();
    assert_eq!(stringify_value(md.value("color").unwrap()), expected);
}

/// The shared registry is process-wide, so everything touching it lives in
/// one test.
#[test]
fn test_global_registry() {
    init_tracing();
    global::clear_styles();
    global::clear_keyframes();

    let request = StyleRequest::new().set("color", "red").set("fontSize", "16px");
    let first = global::responsive(&request);
    let first_css = global::get_responsive_styles();
    global::clear_styles();
    let second = global::responsive(&request);
    assert_eq!(first, second);
    assert_eq!(first_css, global::get_responsive_styles());

    let frames = Keyframes::new()
        .frame("from", [("opacity", "0")])
        .frame("to", [("opacity", "1")]);
    let rule = global::keyframe("fadeIn", &frames);
    assert_eq!(rule, "@keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }");
    assert_eq!(
        global::get_all_styles(),
        format!("{rule}\n{first_css}")
    );

    let batched = global::with_registry(|registry| {
        registry.clear_styles();
        registry.responsive(&request);
        registry.get_responsive_styles()
    });
    assert_eq!(batched, first_css);

    let sink = LiveSink::new();
    let handle = sink.clone();
    let (source, emitter) = ChannelResizeSource::new();
    let previous = global::install(StyleRegistry::browser(sink, source));
    assert!(previous.is_server());

    global::responsive(&StyleRequest::new().set("margin", "0"));
    assert_eq!(handle.text(), ":root { --css-in-js-utils-0: 0; }");
    emitter.emit(640, 480);
    emitter.emit(800, 600);
    assert_eq!(global::process_resize_events(), 2);
    assert_eq!(handle.text().matches(":root").count(), 3);

    global::install(StyleRegistry::server());
}
