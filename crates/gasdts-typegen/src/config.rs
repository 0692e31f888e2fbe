//! Configuration types for declaration emission.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Compatibility overrides for the DefinitelyTyped Apps Script typings.
///
/// These are quirks of one external ecosystem, kept as data so they can be
/// replaced table by table from a JSON file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Overrides {
    /// Type names rewritten to `any` (exact match on the element name).
    pub any_types: BTreeSet<String>,
    /// Interface widening rules, first match wins.
    pub extends: Vec<ExtendsRule>,
    /// Export bindings emitted commented out, with the note printed above them.
    pub commented_exports: BTreeMap<String, String>,
    /// Parameter names whose second occurrence in one signature gets a `_` suffix.
    pub duplicate_params: Vec<String>,
}

/// `interface <name> extends <base>` for the listed names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendsRule {
    pub names: BTreeSet<String>,
    pub base: String,
    /// Only applies inside the category with this display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ExtendsRule {
    fn matches(&self, name: &str, category: &str) -> bool {
        self.names.contains(name) && self.category.as_deref().is_none_or(|c| c == category)
    }
}

const DOCUMENT_ELEMENTS: &[&str] = &[
    "Body",
    "ContainerElement",
    "Equation",
    "EquationFunction",
    "EquationFunctionArgumentSeparator",
    "EquationSymbol",
    "FooterSection",
    "Footnote",
    "FootnoteSection",
    "HeaderSection",
    "HorizontalRule",
    "InlineDrawing",
    "InlineImage",
    "ListItem",
    "PageBreak",
    "Paragraph",
    "Table",
    "TableCell",
    "TableOfContents",
    "TableRow",
    "Text",
    "UnsupportedElement",
];

impl Default for Overrides {
    fn default() -> Self {
        Self {
            // `Object` per DefinitelyTyped dcb04cab; the other two are
            // referenced by the docs but never documented.
            any_types: ["Object", "TimeInterval", "TargetAudience"]
                .into_iter()
                .map(String::from)
                .collect(),
            extends: vec![
                ExtendsRule {
                    names: BTreeSet::from(["Blob".to_string()]),
                    base: "BlobSource".to_string(),
                    category: None,
                },
                ExtendsRule {
                    names: DOCUMENT_ELEMENTS.iter().map(|s| s.to_string()).collect(),
                    base: "Element".to_string(),
                    category: Some("Document".to_string()),
                },
            ],
            commented_exports: BTreeMap::from([(
                "MimeType".to_string(),
                "conflicts with MimeType in lib.d.ts".to_string(),
            )]),
            // JDBC has methods taking two arguments both named `sql`.
            duplicate_params: vec!["sql".to_string()],
        }
    }
}

impl Overrides {
    /// Decode an override table from JSON. Tables the document omits keep
    /// their built-in values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Base interface for `name` declared in the category displayed as `category`.
    pub fn extends_for(&self, name: &str, category: &str) -> Option<&str> {
        self.extends
            .iter()
            .find(|rule| rule.matches(name, category))
            .map(|rule| rule.base.as_str())
    }

    pub fn is_any_type(&self, name: &str) -> bool {
        self.any_types.contains(name)
    }

    pub fn export_note(&self, name: &str) -> Option<&str> {
        self.commented_exports.get(name).map(String::as_str)
    }
}

/// Configuration for declaration emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Outer ambient namespace wrapping every category
    pub(crate) namespace: String,
    /// Static header prefixed to every file, date already substituted
    pub(crate) header: String,
    /// Prefix of generated file names, also used in reference directives
    pub(crate) file_prefix: String,
    /// Dependency every category references
    pub(crate) foundational_reference: String,
    pub(crate) overrides: Overrides,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: "GoogleAppsScript".to_string(),
            header: String::new(),
            file_prefix: "google-apps-script".to_string(),
            foundational_reference: "types".to_string(),
            overrides: Overrides::default(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the outer namespace name.
    pub fn namespace(mut self, value: impl Into<String>) -> Self {
        self.namespace = value.into();
        self
    }

    /// Set the static header text.
    pub fn header(mut self, value: impl Into<String>) -> Self {
        self.header = value.into();
        self
    }

    /// Set the file name prefix.
    pub fn file_prefix(mut self, value: impl Into<String>) -> Self {
        self.file_prefix = value.into();
        self
    }

    /// Set the implicit dependency of every category.
    pub fn foundational_reference(mut self, value: impl Into<String>) -> Self {
        self.foundational_reference = value.into();
        self
    }

    /// Replace the compatibility override table.
    pub fn overrides(mut self, value: Overrides) -> Self {
        self.overrides = value;
        self
    }

    /// File name generated for a category key, e.g. `google-apps-script.base.d.ts`.
    pub fn file_name(&self, category_key: &str) -> String {
        format!("{}.{}.d.ts", self.file_prefix, category_key)
    }
}
