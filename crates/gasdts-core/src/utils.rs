/// Replace every non-word character (anything outside `[A-Za-z0-9_]`) with `_`.
///
/// # Examples
/// ```
/// use gasdts_core::utils::sanitize_identifier;
/// assert_eq!(sanitize_identifier("Base"), "Base");
/// assert_eq!(sanitize_identifier("Charts Service"), "Charts_Service");
/// ```
pub fn sanitize_identifier(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Split a dotted declaration key into its namespace segments and leaf name.
///
/// # Examples
/// ```
/// use gasdts_core::utils::split_decl_key;
/// assert_eq!(split_decl_key("A.B.Name"), (vec!["A", "B"], "Name"));
/// assert_eq!(split_decl_key("Name"), (vec![], "Name"));
/// ```
pub fn split_decl_key(key: &str) -> (Vec<&str>, &str) {
    let mut segments: Vec<&str> = key.split('.').collect();
    let leaf = segments.pop().unwrap_or_default();
    (segments, leaf)
}
