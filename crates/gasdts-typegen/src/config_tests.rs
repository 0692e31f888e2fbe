use crate::{Config, ExtendsRule, Overrides};

#[test]
fn blob_extends_blob_source_everywhere() {
    let overrides = Overrides::default();
    assert_eq!(overrides.extends_for("Blob", "Base"), Some("BlobSource"));
    assert_eq!(overrides.extends_for("Blob", "Document"), Some("BlobSource"));
}

#[test]
fn document_elements_extend_element_only_in_document() {
    let overrides = Overrides::default();
    for name in ["Body", "Paragraph", "TableCell", "UnsupportedElement"] {
        assert_eq!(overrides.extends_for(name, "Document"), Some("Element"), "{name}");
        assert_eq!(overrides.extends_for(name, "Slides"), None, "{name}");
    }
    assert_eq!(overrides.extends_for("Element", "Document"), None);
    assert_eq!(overrides.extends_for("Document", "Document"), None);
}

#[test]
fn default_any_types() {
    let overrides = Overrides::default();
    assert!(overrides.is_any_type("Object"));
    assert!(overrides.is_any_type("TimeInterval"));
    assert!(overrides.is_any_type("TargetAudience"));
    assert!(!overrides.is_any_type("Objects"));
}

#[test]
fn mime_type_export_is_commented() {
    let overrides = Overrides::default();
    assert_eq!(
        overrides.export_note("MimeType"),
        Some("conflicts with MimeType in lib.d.ts")
    );
    assert_eq!(overrides.export_note("Session"), None);
}

#[test]
fn partial_override_file_keeps_other_tables() {
    let overrides = Overrides::from_json(
        r#"{
            "extends": [{ "names": ["Slide"], "base": "Page", "category": "Slides" }],
            "duplicate_params": []
        }"#,
    )
    .unwrap();

    assert_eq!(
        overrides.extends,
        [ExtendsRule {
            names: ["Slide".to_string()].into_iter().collect(),
            base: "Page".to_string(),
            category: Some("Slides".to_string()),
        }]
    );
    assert_eq!(overrides.extends_for("Slide", "Slides"), Some("Page"));
    assert_eq!(overrides.extends_for("Blob", "Base"), None);
    assert!(overrides.duplicate_params.is_empty());
    assert_eq!(overrides.any_types, Overrides::default().any_types);
    assert_eq!(
        overrides.commented_exports,
        Overrides::default().commented_exports
    );
}

#[test]
fn unknown_override_key_is_rejected() {
    let err = Overrides::from_json(r#"{ "extend": [] }"#).unwrap_err();
    assert!(err.to_string().contains("unknown field `extend`"), "{err}");
}

#[test]
fn config_file_names() {
    let config = Config::new();
    assert_eq!(config.file_name("base"), "google-apps-script.base.d.ts");

    let config = Config::new().file_prefix("gas");
    assert_eq!(config.file_name("drive"), "gas.drive.d.ts");
}
