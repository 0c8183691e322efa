// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Parsers for git's textual output
//!
//! The revision source asks git for machine-friendly formats; this module
//! turns that text into typed values. Parsing is lenient: malformed lines are
//! skipped rather than failing the whole listing.

use chrono::{DateTime, FixedOffset};
use tracing::debug;

use crate::commit::{CommitSummary, FileChange};

/// Field separator used in the `--pretty=format:` log template
pub const LOG_FIELD_SEPARATOR: char = '|';

/// Log template producing `hash|committer date|subject|author name`
pub const LOG_FORMAT: &str = "--pretty=format:%H|%ci|%s|%an";

/// Format of git's `%ci` placeholder, e.g. `2026-01-17 02:33:06 +0100`
pub const GIT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Parse the output of `git log` run with [`LOG_FORMAT`]
///
/// Hash and date never contain the separator and are split from the left;
/// the author is split from the right so that subjects containing `|` stay
/// intact. Lines with fewer than four fields are skipped.
#[must_use]
pub fn parse_log_output(output: &str) -> Vec<CommitSummary> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let summary = parse_log_line(line);
            if summary.is_none() {
                debug!(line, "Skipping malformed log line");
            }
            summary
        })
        .collect()
}

fn parse_log_line(line: &str) -> Option<CommitSummary> {
    let line = line.trim_end_matches('\r');
    let mut head = line.splitn(3, LOG_FIELD_SEPARATOR);
    let hash = head.next()?.trim();
    let date = head.next()?;
    let (title, author) = head.next()?.rsplit_once(LOG_FIELD_SEPARATOR)?;

    if hash.is_empty() {
        return None;
    }

    Some(CommitSummary {
        hash: hash.to_string(),
        date: date.to_string(),
        title: title.to_string(),
        author: author.to_string(),
    })
}

/// Parse the output of `git show --name-status --pretty=format:`
///
/// Each line is `STATUS<TAB>path`, or `STATUS<TAB>old<TAB>new` for renames
/// and copies. Lines without a tab are ignored.
#[must_use]
pub fn parse_name_status(output: &str) -> Vec<FileChange> {
    let mut changes = Vec::new();

    for line in output.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split('\t');
        let status = fields.next().unwrap_or("").trim();
        let Some(first) = fields.next() else {
            debug!(line, "Skipping name-status line without a path");
            continue;
        };

        let change = match fields.next() {
            Some(second) => FileChange::new(status, second).with_previous_path(first),
            None => FileChange::new(status, first),
        };
        changes.push(change);
    }

    changes
}

/// Parse a committer date as printed by git
///
/// Accepts the `%ci` layout and strict ISO 8601 / RFC 3339 (`%cI`).
#[must_use]
pub fn parse_git_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    DateTime::parse_from_str(raw, GIT_DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: arbitrary input never panics the log parser
        #[test]
        fn prop_parse_log_output_never_panics(input in ".*") {
            let _ = parse_log_output(&input);
        }

        /// Property: arbitrary input never panics the name-status parser
        #[test]
        fn prop_parse_name_status_never_panics(input in ".*") {
            let _ = parse_name_status(&input);
        }

        /// Property: well-formed lines round-trip through the log parser
        #[test]
        fn prop_log_line_roundtrip(
            hash in "[0-9a-f]{40}",
            title in "[^\n\r]{0,60}",
            author in "[A-Za-z .'-]{1,30}",
        ) {
            let line = format!("{hash}|2026-01-17 02:33:06 +0100|{title}|{author}");
            let commits = parse_log_output(&line);
            prop_assert_eq!(commits.len(), 1);
            prop_assert_eq!(&commits[0].hash, &hash);
            prop_assert_eq!(&commits[0].title, &title);
            prop_assert_eq!(&commits[0].author, &author);
        }
    }
}
