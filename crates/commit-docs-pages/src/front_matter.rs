// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Front matter headers
//!
//! Every generated page starts with a `---` delimited block of `key: value`
//! lines. Pages are written by [`crate::render`] and read back by the state
//! reader and the index builder, so quoting here must stay symmetric with
//! [`quote`].

/// Line that opens and closes a front matter block
pub const DELIMITER: &str = "---";

/// Parsed front matter, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    entries: Vec<(String, String)>,
}

impl FrontMatter {
    /// Parse the front matter at the top of `text`
    ///
    /// Returns `None` when the text does not open with a delimiter line or
    /// the block is never closed. Lines without a `:` are ignored.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let mut lines = text.lines();
        if lines.next()?.trim_end() != DELIMITER {
            return None;
        }

        let mut entries = Vec::new();
        for line in lines {
            let line = line.trim_end_matches('\r');
            if line.trim_end() == DELIMITER {
                return Some(Self { entries });
            }
            if let Some((key, value)) = line.split_once(':') {
                entries.push((key.trim().to_string(), unquote(value.trim())));
            }
        }
        None
    }

    /// Value of the first entry named `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the block had no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Wrap a value in double quotes, escaping `\` and `"`
#[must_use]
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Inverse of [`quote`]; values without surrounding quotes pass through
///
/// Single-quoted values and stray quote characters are stripped as well, so
/// hand-edited headers like `commit_hash: "abc123` still resolve.
#[must_use]
pub fn unquote(value: &str) -> String {
    if let Some(inner) = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
    {
        let mut out = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                if let Some(next) = chars.next() {
                    out.push(next);
                    continue;
                }
            }
            out.push(c);
        }
        return out;
    }
    value.trim_matches(|c| c == '"' || c == '\'').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    const PAGE: &str = "---\nlayout: default\ntitle: \"Add parser\"\ndate: 2026-01-17 02:33:06 +0100\nauthor: Ada Lovelace\ncommit_hash: 1945ab9c752534e733c38ba0109dc3b741f0a6eb\nnav_exclude: true\n---\n\n# Add parser\n";

    #[test]
    fn test_parse_page_header() {
        let fm = FrontMatter::parse(PAGE).expect("front matter");
        assert_eq!(fm.len(), 6);
        assert_eq!(fm.get("layout"), Some("default"));
        assert_eq!(fm.get("title"), Some("Add parser"));
        assert_eq!(fm.get("date"), Some("2026-01-17 02:33:06 +0100"));
        assert_eq!(fm.get("author"), Some("Ada Lovelace"));
        assert_eq!(
            fm.get("commit_hash"),
            Some("1945ab9c752534e733c38ba0109dc3b741f0a6eb")
        );
        assert_eq!(fm.get("missing"), None);
    }

    #[test]
    fn test_parse_requires_opening_delimiter() {
        assert!(FrontMatter::parse("# Heading\n---\ntitle: x\n---\n").is_none());
        assert!(FrontMatter::parse("").is_none());
    }

    #[test]
    fn test_parse_requires_closing_delimiter() {
        assert!(FrontMatter::parse("---\ntitle: x\n").is_none());
    }

    #[test]
    fn test_parse_empty_block() {
        let fm = FrontMatter::parse("---\n---\n").expect("front matter");
        assert!(fm.is_empty());
    }

    #[test]
    fn test_parse_crlf() {
        let fm = FrontMatter::parse("---\r\ncommit_hash: abc123\r\n---\r\n").expect("fm");
        assert_eq!(fm.get("commit_hash"), Some("abc123"));
    }

    #[test]
    fn test_value_keeps_later_colons() {
        let fm = FrontMatter::parse("---\ntitle: \"fix: handle a:b\"\n---\n").expect("fm");
        assert_eq!(fm.get("title"), Some("fix: handle a:b"));
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote(r#"say "hi" \o/"#), r#""say \"hi\" \\o/""#);
    }

    #[test]
    fn test_unquote_roundtrip() {
        let raw = r#"say "hi" \o/"#;
        assert_eq!(unquote(&quote(raw)), raw);
    }

    #[test]
    fn test_unquote_strips_stray_quotes() {
        assert_eq!(unquote("\"abc123"), "abc123");
        assert_eq!(unquote("'abc123'"), "abc123");
        assert_eq!(unquote("abc123"), "abc123");
    }
}
