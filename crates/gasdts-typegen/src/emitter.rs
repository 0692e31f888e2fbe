//! Core emitter struct and per-category assembly.

use std::collections::BTreeSet;

use gasdts_core::Description;

use super::Config;
use crate::Error;
use crate::render::ParamRename;
use crate::resolve::References;

/// One generated `.d.ts` module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryOutput {
    pub key: String,
    pub file_name: String,
    /// Referenced category keys, first-seen order.
    pub references: Vec<String>,
    /// Exported global bindings, sorted.
    pub exports: Vec<String>,
    pub text: String,
}

/// Accumulators for a single category emission.
pub(crate) struct CategoryState<'a> {
    pub key: &'a str,
    pub display_name: String,
    pub references: References,
    pub exports: BTreeSet<String>,
}

/// TypeScript declaration emitter over a description tree.
pub struct Emitter<'a> {
    pub(super) description: &'a Description,
    pub(super) config: Config,
    pub(super) param_renames: Vec<ParamRename>,
}

impl<'a> Emitter<'a> {
    pub fn new(description: &'a Description, config: Config) -> Result<Self, Error> {
        let param_renames = config
            .overrides
            .duplicate_params
            .iter()
            .map(|name| {
                ParamRename::new(name).map_err(|source| Error::InvalidParamRename {
                    name: name.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            description,
            config,
            param_renames,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Emit every category, in lexicographic key order.
    pub fn emit_all(&self) -> Vec<CategoryOutput> {
        self.description
            .categories
            .keys()
            .filter_map(|key| self.emit_category(key))
            .collect()
    }

    /// Emit one category; `None` if the key is unknown.
    pub fn emit_category(&self, key: &str) -> Option<CategoryOutput> {
        let category = self.description.category(key)?;
        let display_name = category.display_name();
        let namespace = &self.config.namespace;

        let mut state = CategoryState {
            key,
            display_name: display_name.clone(),
            references: References::new(self.config.foundational_reference.as_str()),
            exports: BTreeSet::new(),
        };

        let mut body = vec![
            format!("declare namespace {namespace} {{"),
            format!("  namespace {display_name} {{"),
        ];

        for (decl_key, decl) in &category.decls {
            let Some(decl) = decl else {
                tracing::debug!(category = key, declaration = %decl_key, "skipping undefined declaration");
                continue;
            };
            let lines = self.render_declaration(&mut state, decl_key, decl);
            body.extend(lines.iter().map(|line| indent(line, 2)));
        }

        body.extend(["  }".to_string(), "}".to_string(), String::new()]);

        for name in &state.exports {
            let binding = format!("declare var {name}: {namespace}.{display_name}.{name};");
            match self.config.overrides.export_note(name) {
                Some(note) => {
                    body.push(format!("// {note}"));
                    body.push(format!("// {binding}"));
                }
                None => body.push(binding),
            }
        }

        let mut lines = Vec::with_capacity(body.len() + state.references.len() + 2);
        if !self.config.header.is_empty() {
            lines.push(self.config.header.clone());
        }
        lines.extend(state.references.iter().map(|reference| {
            format!(
                "/// <reference path=\"{}\" />",
                self.config.file_name(reference)
            )
        }));
        lines.push(String::new());
        lines.extend(body);

        tracing::debug!(
            category = key,
            references = state.references.len(),
            exports = state.exports.len(),
            "emitted category"
        );

        Some(CategoryOutput {
            key: key.to_string(),
            file_name: self.config.file_name(key),
            references: state.references.into_vec(),
            exports: state.exports.into_iter().collect(),
            text: finish(&lines.join("\n")),
        })
    }
}

/// Prefix non-empty lines with `levels` two-space indents.
fn indent(line: &str, levels: usize) -> String {
    if line.is_empty() {
        return String::new();
    }
    format!("{}{line}", "  ".repeat(levels))
}

/// Strip trailing whitespace from every line and end with exactly one newline.
fn finish(text: &str) -> String {
    let mut output = text
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");
    output.truncate(output.trim_end().len());
    output.push('\n');
    output
}
