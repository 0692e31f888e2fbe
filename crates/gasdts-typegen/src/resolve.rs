//! Type name resolution at a use site.

use std::sync::OnceLock;

use indexmap::IndexSet;
use regex::Regex;

use gasdts_core::{Description, TypeRef};

use crate::Overrides;

const VARIADIC: &str = "...";
const ARRAY: &str = "[]";

/// Categories a module must reference, in first-seen order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct References(IndexSet<String>);

impl References {
    /// Start with the dependency every category requires.
    pub fn new(foundational: impl Into<String>) -> Self {
        let mut set = IndexSet::new();
        set.insert(foundational.into());
        Self(set)
    }

    /// Returns `false` if the key was already recorded.
    pub fn insert(&mut self, key: &str) -> bool {
        if self.0.contains(key) {
            return false;
        }
        self.0.insert(key.to_string())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0.into_iter().collect()
    }
}

/// Where a type reference appears.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Site {
    /// Interface property.
    Field,
    /// Method parameter; variadic types turn into rest parameters.
    Param,
    /// Method return type.
    Return,
}

/// Resolves type references relative to the category being emitted.
pub struct Resolver<'a> {
    description: &'a Description,
    overrides: &'a Overrides,
    category_key: &'a str,
    references: &'a mut References,
}

impl<'a> Resolver<'a> {
    pub fn new(
        description: &'a Description,
        overrides: &'a Overrides,
        category_key: &'a str,
        references: &'a mut References,
    ) -> Self {
        Self {
            description,
            overrides,
            category_key,
            references,
        }
    }

    /// Render `name: Type` for a reference at `site`.
    pub fn typed_name(&mut self, name: &str, ty: &TypeRef, site: Site) -> String {
        let same_category = ty
            .category
            .as_deref()
            .is_none_or(|owner| owner == self.category_key);

        let mut type_name = if same_category {
            ty.name.clone()
        } else {
            self.qualify(ty)
        };

        type_name = self.substitute_any(&type_name);

        let mut name = name.to_string();
        if let Some(element) = variadic_element(&type_name) {
            type_name = format!("{element}{ARRAY}");
            if site == Site::Param {
                name = format!("{VARIADIC}{name}");
            }
        }

        if primitive_re().is_match(&type_name) {
            type_name = type_name.to_lowercase();
        }

        let is_enum = site == Site::Field
            && same_category
            && self
                .description
                .category(self.category_key)
                .is_some_and(|category| category.is_enum(&ty.name));

        if is_enum {
            format!("{name}: typeof {type_name}")
        } else {
            format!("{name}: {type_name}")
        }
    }

    fn qualify(&mut self, ty: &TypeRef) -> String {
        let Some(owner) = ty.category.as_deref() else {
            return ty.name.clone();
        };
        self.references.insert(owner);
        format!("{}.{}", self.description.display_name_of(owner), ty.name)
    }

    fn substitute_any(&self, type_name: &str) -> String {
        let (element, suffix) = split_suffix(type_name);
        if self.overrides.is_any_type(element) {
            format!("any{suffix}")
        } else {
            type_name.to_string()
        }
    }
}

/// `T...` -> `T`; `None` for non-variadic names.
fn variadic_element(type_name: &str) -> Option<&str> {
    type_name
        .strip_suffix(VARIADIC)
        .filter(|element| !element.is_empty())
}

/// Split trailing `...` / `[]` markers off a type name.
fn split_suffix(type_name: &str) -> (&str, &str) {
    let mut element = type_name;
    while let Some(rest) = element
        .strip_suffix(VARIADIC)
        .or_else(|| element.strip_suffix(ARRAY))
    {
        element = rest;
    }
    type_name.split_at(element.len())
}

fn primitive_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(Boolean|Number|String)[^0-9A-Za-z_]*$")
            .expect("primitive regex must compile")
    })
}
