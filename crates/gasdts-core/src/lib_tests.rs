use indoc::indoc;

use super::*;

const SAMPLE: &str = indoc! {r#"
    {
      "categories": {
        "document": {
          "name": "Document",
          "decls": {
            "Paragraph": {
              "kind": "class",
              "doc": "A paragraph.",
              "url": "https://developers.google.com/apps-script/reference/document/paragraph",
              "properties": [],
              "methods": [
                {
                  "name": "appendText",
                  "params": [
                    { "name": "text", "type": { "name": "String" }, "doc": "the text" }
                  ],
                  "returnType": { "name": "Text" },
                  "docDetailed": "Appends text.",
                  "url": "https://example.com/appendText",
                  "isDeprecated": false
                }
              ]
            },
            "Attribute": {
              "kind": "enum",
              "doc": "Attributes.",
              "url": "https://example.com/attribute",
              "properties": [
                { "name": "BOLD", "type": { "name": "Attribute" } },
                { "name": "ITALIC" }
              ]
            },
            "Broken": null
          }
        },
        "base": { "name": null, "decls": {} }
      },
      "services": {
        "https://example.com/attribute": true,
        "https://example.com/ignored": false
      }
    }
"#};

#[test]
fn decode_sample_document() {
    let desc = Description::from_json(SAMPLE).unwrap();
    assert_eq!(desc.categories.len(), 2);

    let doc = desc.category("document").unwrap();
    assert_eq!(doc.display_name(), "Document");
    assert_eq!(doc.decls.len(), 3);
    assert!(doc.decls["Broken"].is_none());

    let para = doc.decls["Paragraph"].as_ref().unwrap();
    assert_eq!(para.kind, DeclKind::Interface);
    assert_eq!(para.methods[0].params[0].ty, TypeRef::new("String"));
    assert_eq!(para.methods[0].return_type.name, "Text");
    assert!(!para.methods[0].is_deprecated);
}

#[test]
fn categories_iterate_lexicographically() {
    let desc = Description::from_json(SAMPLE).unwrap();
    let keys: Vec<&str> = desc.categories.keys().map(String::as_str).collect();
    assert_eq!(keys, ["base", "document"]);

    let decls: Vec<&str> = desc.categories["document"]
        .decls
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(decls, ["Attribute", "Broken", "Paragraph"]);
}

#[test]
fn enum_lookup_and_defaults() {
    let desc = Description::from_json(SAMPLE).unwrap();
    let doc = &desc.categories["document"];
    assert!(doc.is_enum("Attribute"));
    assert!(!doc.is_enum("Paragraph"));
    assert!(!doc.is_enum("Broken"));
    assert!(!doc.is_enum("Missing"));

    let attr = doc.decls["Attribute"].as_ref().unwrap();
    assert_eq!(attr.properties[1].name, "ITALIC");
    assert_eq!(attr.properties[1].ty, TypeRef::default());
    assert!(!attr.properties[1].is_deprecated);
}

#[test]
fn unnamed_category_falls_back_to_placeholder() {
    let desc = Description::from_json(SAMPLE).unwrap();
    assert_eq!(desc.display_name_of("base"), UNKNOWN_CATEGORY);
    assert_eq!(desc.display_name_of("nope"), UNKNOWN_CATEGORY);
}

#[test]
fn service_flags() {
    let desc = Description::from_json(SAMPLE).unwrap();
    assert!(desc.services.is_service("https://example.com/attribute"));
    assert!(!desc.services.is_service("https://example.com/ignored"));
    assert!(!desc.services.is_service("https://example.com/unknown"));
}

#[test]
fn from_reader_reads_whole_input() {
    let desc = Description::from_reader(SAMPLE.as_bytes()).unwrap();
    assert_eq!(desc.categories.len(), 2);
}

#[test]
fn malformed_document_is_an_error() {
    let err = Description::from_json("{\"categories\": [").unwrap_err();
    assert!(matches!(err, DescriptionError::Json(_)));
    assert!(err.to_string().starts_with("malformed description document"));
}
