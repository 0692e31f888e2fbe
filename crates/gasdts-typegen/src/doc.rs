//! JSDoc comment blocks.

use std::sync::OnceLock;

use regex::Regex;

use gasdts_core::Method;

/// Build a `/** ... */` block for a declaration's documentation.
///
/// Runs of three or more line breaks collapse to a single blank line and
/// trailing whitespace is dropped.
pub fn doc_comment(doc: &str) -> Vec<String> {
    let collapsed = blank_run_re().replace_all(doc, "\n\n");
    let mut lines = vec!["/**".to_string()];
    lines.extend(collapsed.trim_end().split('\n').map(|line| format!(" * {line}")));
    lines.push(" */".to_string());
    lines
}

/// Doc block for a method: detailed docs, the reference URL, then one
/// `@param` line per parameter.
pub fn method_doc(method: &Method) -> Vec<String> {
    let mut lines = vec!["/**".to_string()];
    lines.extend(
        method
            .doc_detailed
            .split('\n')
            .map(|line| format!(" * {line}")),
    );
    lines.push(format!(" * {}", method.url));
    for param in &method.params {
        let doc = line_break_re().replace_all(&param.doc, " ");
        lines.push(format!(" * @param {} {}", param.name, doc));
    }
    lines.push(" */".to_string());
    lines
}

fn blank_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"( *\n){3,}").expect("blank-run regex must compile"))
}

fn line_break_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*").expect("line-break regex must compile"))
}
