//! Declaration rendering.

use regex::Regex;

use gasdts_core::utils::split_decl_key;
use gasdts_core::{DeclKind, Declaration, Method};

use super::Emitter;
use super::emitter::CategoryState;
use crate::doc::{doc_comment, method_doc};
use crate::resolve::{Resolver, Site};

const DEPRECATION_NOTICE: &str = "/** @deprecated DO NOT USE */ ";

/// Renames the second occurrence of a parameter name within one joined
/// parameter list (`sql: string, sql: string` -> `sql: string, sql_: string`).
///
/// This is a textual patch: a list mentioning `sql:` inside an unrelated
/// parameter's text would be rewritten too.
#[derive(Clone, Debug)]
pub(crate) struct ParamRename {
    re: Regex,
    replacement: String,
}

impl ParamRename {
    pub(crate) fn new(name: &str) -> Result<Self, regex::Error> {
        let escaped = regex::escape(name);
        let re = Regex::new(&format!(r"(\b{escaped}:.*)\b{escaped}:"))?;
        let replacement = format!("${{1}}{}_:", name.replace('$', "$$"));
        Ok(Self { re, replacement })
    }

    pub(crate) fn apply(&self, params: &str) -> String {
        self.re
            .replace_all(params, self.replacement.as_str())
            .into_owned()
    }
}

impl Emitter<'_> {
    /// Render one declaration into unindented lines.
    ///
    /// Records the leaf name as an export when the declaration is a service.
    pub(crate) fn render_declaration(
        &self,
        state: &mut CategoryState<'_>,
        key: &str,
        decl: &Declaration,
    ) -> Vec<String> {
        let (namespaces, name) = split_decl_key(key);

        let mut lines = doc_comment(&decl.doc);
        lines.extend(namespaces.iter().map(|ns| format!("namespace {ns} {{")));

        match decl.kind {
            DeclKind::Enum => lines.push(render_enum(name, decl)),
            DeclKind::Interface => lines.extend(self.render_interface(state, name, decl)),
        }

        lines.extend(namespaces.iter().map(|_| "}".to_string()));

        if self.description.services.is_service(&decl.url) {
            state.exports.insert(name.to_string());
        }

        lines
    }

    fn render_interface(
        &self,
        state: &mut CategoryState<'_>,
        name: &str,
        decl: &Declaration,
    ) -> Vec<String> {
        let header = match self.config.overrides.extends_for(name, &state.display_name) {
            Some(base) => format!("interface {name} extends {base} {{"),
            None => format!("interface {name} {{"),
        };

        let mut resolver = Resolver::new(
            self.description,
            &self.config.overrides,
            state.key,
            &mut state.references,
        );

        let mut members = Vec::new();
        for prop in &decl.properties {
            let notice = if prop.is_deprecated {
                DEPRECATION_NOTICE
            } else {
                ""
            };
            let typed = resolver.typed_name(&prop.name, &prop.ty, Site::Field);
            members.push(format!("  {notice}{typed};"));
        }

        for method in decl.methods.iter().filter(|m| !m.is_deprecated) {
            members.push(String::new());
            members.extend(method_doc(method).into_iter().map(|line| format!("  {line}")));
            let signature = self.render_signature(&mut resolver, method);
            members.push(format!("  {signature};"));
        }

        if members.is_empty() {
            return vec![format!("{header} }}")];
        }

        let mut lines = Vec::with_capacity(members.len() + 2);
        lines.push(header);
        lines.extend(members);
        lines.push("}".to_string());
        lines
    }

    fn render_signature(&self, resolver: &mut Resolver<'_>, method: &Method) -> String {
        let mut params = method
            .params
            .iter()
            .map(|param| resolver.typed_name(&param.name, &param.ty, Site::Param))
            .collect::<Vec<_>>()
            .join(", ");

        for rename in &self.param_renames {
            params = rename.apply(&params);
        }

        let callee = format!("{}({})", method.name, params);
        resolver.typed_name(&callee, &method.return_type, Site::Return)
    }
}

fn render_enum(name: &str, decl: &Declaration) -> String {
    let constants = decl
        .properties
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("enum {name} {{ {constants} }}")
}
