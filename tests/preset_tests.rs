//! Integration tests for preset loading, validation, and markup.

mod fixtures;

use fixtures::{PRESET_JSON, PRESET_TOML};
use laybuild::models::{OverflowMode, WidthToken};
use laybuild::preset::{
    create_preset, load_preset, merge_presets, preset_to_attributes, preset_to_html,
    preset_to_html_with_children, validate_preset,
};
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_empty_document_reports_required_fields() {
    let report = validate_preset(&json!({}));

    assert!(!report.is_valid());
    assert_eq!(report.errors.len(), 3);
    assert!(report.warnings.is_empty());
}

#[test]
fn test_nonstandard_pattern_is_a_warning() {
    let report = validate_preset(&json!({
        "id": "p",
        "name": "P",
        "breakpoints": { "md": "two-columns" }
    }));

    assert!(report.is_valid());
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("two-columns"));
}

#[test]
fn test_minimal_preset_renders_only_breakpoints() {
    let preset = create_preset(&json!({
        "id": "hero",
        "name": "Hero",
        "breakpoints": { "md": "columns(2)", "lg": "grid(3c)" }
    }))
    .unwrap();

    let attrs = preset_to_attributes(&preset);
    assert_eq!(attrs.names(), vec!["md", "lg"]);
    assert_eq!(
        preset_to_html(&preset, None),
        r#"<lay-out md="columns(2)" lg="grid(3c)">"#
    );
}

#[test]
fn test_every_non_default_field_is_rendered_once() {
    let preset = create_preset(&json!({
        "id": "everything",
        "name": "Everything",
        "breakpoints": { "md": "columns(2)" },
        "columns": 3,
        "rows": "auto",
        "colGap": 2,
        "rowGap": 0.5,
        "spaceBottom": 1,
        "spaceTop": 1,
        "padBottom": 1,
        "padTop": 1,
        "padInline": 1,
        "maxWidth": "80rem",
        "width": "lg",
        "bleed": 50,
        "self": "center",
        "gapDecorations": true,
        "overflow": "dynamic",
        "theme": "primary",
        "animation": "fade"
    }))
    .unwrap();

    assert_eq!(preset.width, Some(WidthToken::Lg));
    assert_eq!(preset.overflow, Some(OverflowMode::Dynamic));

    let attrs = preset_to_attributes(&preset);
    assert_eq!(
        attrs.names(),
        vec![
            "md",
            "columns",
            "rows",
            "col-gap",
            "row-gap",
            "space-bottom",
            "space-top",
            "pad-bottom",
            "pad-top",
            "pad-inline",
            "max-width",
            "width",
            "bleed",
            "self",
            "gap",
            "overflow",
            "theme",
            "animation",
        ]
    );

    let html = preset_to_html(&preset, None);
    assert!(html.contains(r#" row-gap="0.5""#));
    assert!(html.contains(" gap "));
    assert!(html.contains(r#" columns="3""#));
}

#[test]
fn test_html_escapes_and_wraps_children() {
    let preset = create_preset(&json!({
        "id": "quoted",
        "name": "Quoted",
        "breakpoints": { "md": "columns(2)" },
        "theme": "a\"b<c>"
    }))
    .unwrap();

    let html = preset_to_html_with_children(&preset, "<p>Hi</p>", Some("default:100vw;540:50%"));
    assert!(html.starts_with("<lay-out "));
    assert!(html.contains(r#"theme="a&quot;b&lt;c&gt;""#));
    assert!(html.contains(r#"srcsets="default:100vw;540:50%">"#));
    assert!(html.ends_with("\n<p>Hi</p>\n</lay-out>"));
}

#[test]
fn test_load_preset_from_json_and_toml() {
    let dir = TempDir::new().unwrap();
    let json_path = dir.path().join("feature.json");
    let toml_path = dir.path().join("feature.toml");
    std::fs::write(&json_path, PRESET_JSON).unwrap();
    std::fs::write(&toml_path, PRESET_TOML).unwrap();

    let from_json = load_preset(&json_path).unwrap();
    let from_toml = load_preset(&toml_path).unwrap();

    assert_eq!(from_json.id, "feature");
    assert_eq!(from_json.space_top, 2.0);
    assert_eq!(from_json.width, Some(WidthToken::Md));
    assert_eq!(from_toml.space_top, from_json.space_top);
    assert_eq!(from_toml.width, from_json.width);
    assert_eq!(from_toml.theme, from_json.theme);
    assert_eq!(
        from_toml.breakpoint_layout("lg"),
        from_json.breakpoint_layout("lg")
    );
}

#[test]
fn test_load_preset_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"{ "id": "broken" }"#).unwrap();

    let err = load_preset(&path).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("broken.json"));
    assert!(message.contains("\"name\""));
}

#[test]
fn test_merge_presets_overrides_fields() {
    let base = create_preset(&serde_json::from_str(PRESET_JSON).unwrap()).unwrap();

    let merged = merge_presets(
        &base,
        &json!({ "name": "Wide feature", "breakpoints": { "xl": "grid(3a)" }, "width": "xl" }),
    )
    .unwrap();

    assert_eq!(merged.name, "Wide feature");
    assert_eq!(merged.breakpoint_names(), vec!["md", "lg", "xl"]);
    assert_eq!(merged.width, Some(WidthToken::Xl));
    assert_eq!(merged.theme.as_deref(), Some("primary"));

    assert!(merge_presets(&base, &json!({ "bleed": 101 })).is_err());
}
