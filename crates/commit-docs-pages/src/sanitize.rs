//! Filename sanitizing

/// Make `text` safe to embed in a filename
///
/// Every character outside `[A-Za-z0-9._-]` becomes `_`, runs of `_`
/// collapse into one, and leading/trailing `_` are removed. Only used for
/// filenames; page content keeps the original text.
///
/// ```
/// use commit_docs_pages::sanitize;
///
/// assert_eq!(sanitize("Fix: bug #42!!"), "Fix_bug_42");
/// ```
#[must_use]
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        let c = if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
            c
        } else {
            '_'
        };
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }
    out.trim_matches('_').to_string()
}
