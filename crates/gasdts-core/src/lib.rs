//! Core data structures for Apps Script API descriptions.
//!
//! The description is a read-only tree decoded once from the scraped
//! documentation dump:
//! - **Categories**: one per generated `.d.ts` module
//! - **Declarations**: enums and interfaces inside a category
//! - **Members**: properties and methods, each with a [`TypeRef`]
//!
//! All keyed collections are `BTreeMap`s so iteration is lexicographic
//! regardless of the order the input document lists them in.

use std::collections::BTreeMap;
use std::io::Read;

use serde::Deserialize;

pub mod utils;

#[cfg(test)]
mod lib_tests;

/// Placeholder used when a category has no display name.
pub const UNKNOWN_CATEGORY: &str = "UNKNOWN";

/// Errors raised while decoding a description document.
#[derive(Debug, thiserror::Error)]
pub enum DescriptionError {
    #[error("failed to read description: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed description document: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Description Tree
// ============================================================================

/// The complete input document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Description {
    #[serde(default)]
    pub categories: BTreeMap<String, Category>,
    #[serde(default)]
    pub services: ServiceIndex,
}

impl Description {
    /// Decode a description from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, DescriptionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the source to end-of-input, then decode it as one document.
    pub fn from_reader(mut reader: impl Read) -> Result<Self, DescriptionError> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Self::from_json(&buf)
    }

    pub fn category(&self, key: &str) -> Option<&Category> {
        self.categories.get(key)
    }

    /// Display name of a category, or [`UNKNOWN_CATEGORY`] if the key is
    /// absent or the category is unnamed.
    pub fn display_name_of(&self, key: &str) -> String {
        self.category(key)
            .map(Category::display_name)
            .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string())
    }
}

/// A top-level grouping of declarations, emitted as one module.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub name: Option<String>,
    /// `null` entries are kept so emission can skip them.
    #[serde(default)]
    pub decls: BTreeMap<String, Option<Declaration>>,
}

impl Category {
    /// Namespace-safe display name: non-word characters become `_`.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => utils::sanitize_identifier(name),
            None => UNKNOWN_CATEGORY.to_string(),
        }
    }

    /// Whether the declaration stored under `key` is an enum.
    pub fn is_enum(&self, key: &str) -> bool {
        matches!(
            self.decls.get(key),
            Some(Some(Declaration {
                kind: DeclKind::Enum,
                ..
            }))
        )
    }
}

/// Declaration kind. Anything other than `"enum"` renders as an interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    Enum,
    #[default]
    #[serde(other)]
    Interface,
}

/// An enum or interface definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Declaration {
    #[serde(default)]
    pub kind: DeclKind,
    #[serde(default)]
    pub doc: String,
    #[serde(default)]
    pub url: String,
    /// Enum constants for enums, fields for interfaces.
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub methods: Vec<Method>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    #[serde(rename = "type", default)]
    pub ty: TypeRef,
    #[serde(default)]
    pub is_deprecated: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    pub name: String,
    #[serde(default)]
    pub params: Vec<Param>,
    #[serde(default)]
    pub return_type: TypeRef,
    #[serde(default)]
    pub doc_detailed: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub is_deprecated: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Param {
    pub name: String,
    #[serde(rename = "type", default)]
    pub ty: TypeRef,
    #[serde(default)]
    pub doc: String,
}

/// Reference to a type, optionally owned by another category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TypeRef {
    #[serde(default)]
    pub name: String,
    /// `None` means the category of the referencing declaration.
    #[serde(default)]
    pub category: Option<String>,
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
        }
    }

    pub fn in_category(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: Some(category.into()),
        }
    }
}

// ============================================================================
// Service Index
// ============================================================================

/// Declaration URL -> whether its name is exported as a global binding.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ServiceIndex(BTreeMap<String, bool>);

impl ServiceIndex {
    pub fn is_service(&self, url: &str) -> bool {
        self.0.get(url).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, bool)> for ServiceIndex {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
