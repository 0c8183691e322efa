// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit page rendering
//!
//! Turns a [`CommitRecord`] into a markdown page with a front matter header
//! (layout, title, date, author, commit hash, navigation flag) followed by
//! the commit message, the changed files and links back to the forge.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use commit_docs_git::{ChangeKind, CommitRecord, FileChange};
use tracing::debug;

use crate::documents::DOCUMENT_EXTENSION;
use crate::error::PagesError;
use crate::front_matter::{DELIMITER, quote};
use crate::sanitize::sanitize;

/// Shown instead of a file list when a commit touched nothing
pub const NO_FILES_CHANGED: &str = "No files changed in this commit.";

/// Layout for the sortable timestamp prefix of page filenames
pub const FILENAME_DATE_FORMAT: &str = "%Y%m%d%H%M%S";

/// Longest title segment of a page filename, in bytes
///
/// Keeps the whole name well under the usual 255 byte file name limit.
pub const MAX_TITLE_LEN: usize = 100;

/// Writes one markdown page per commit into an output directory
#[derive(Debug, Clone)]
pub struct DocumentRenderer {
    output_dir: PathBuf,
    repo_url: String,
}

impl DocumentRenderer {
    /// Create a renderer writing into `output_dir`, linking to `repo_url`
    pub fn new(output_dir: impl Into<PathBuf>, repo_url: &str) -> Self {
        Self {
            output_dir: output_dir.into(),
            repo_url: repo_url.trim_end_matches('/').to_string(),
        }
    }

    /// Directory pages are written to
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Filename for a commit page: `{YYYYMMDDHHMMSS}-{short hash}-{title}.md`
    ///
    /// The timestamp is the commit date in its own offset. When git's date
    /// cannot be parsed, its digits (up to 14) are used instead. The title
    /// segment is cut to [`MAX_TITLE_LEN`] bytes.
    #[must_use]
    pub fn build_filename(commit: &CommitRecord) -> String {
        let stamp = match commit.parsed_date() {
            Some(date) => date.format(FILENAME_DATE_FORMAT).to_string(),
            None => {
                debug!(date = %commit.date, "Unparsable commit date, using its digits");
                commit
                    .date
                    .chars()
                    .filter(char::is_ascii_digit)
                    .take(14)
                    .collect()
            }
        };

        format!(
            "{stamp}-{}-{}.{DOCUMENT_EXTENSION}",
            commit.short_hash(),
            title_segment(&commit.title)
        )
    }

    /// Render the full page for a commit
    #[must_use]
    pub fn render(&self, commit: &CommitRecord) -> String {
        let mut page = String::new();

        // Writing into a String cannot fail
        let _ = writeln!(page, "{DELIMITER}");
        let _ = writeln!(page, "layout: default");
        let _ = writeln!(page, "title: {}", quote(&commit.title));
        let _ = writeln!(page, "date: {}", commit.date);
        let _ = writeln!(page, "author: {}", quote(&commit.author));
        let _ = writeln!(page, "commit_hash: {}", commit.hash);
        let _ = writeln!(page, "nav_exclude: true");
        let _ = writeln!(page, "{DELIMITER}");
        page.push('\n');

        let _ = writeln!(page, "# {}\n", commit.title);
        let _ = writeln!(page, "**Commit:** `{}`  ", commit.hash);
        let _ = writeln!(page, "**Date:** {}  ", commit.date);
        let _ = writeln!(page, "**Author:** {}  \n", commit.author);

        let _ = writeln!(page, "## Commit Message\n");
        let _ = writeln!(page, "```\n{}\n```\n", commit.message);

        let _ = writeln!(page, "## Files Changed\n");
        let _ = writeln!(page, "{}\n", render_changes(&commit.changes));

        let _ = writeln!(page, "## Links\n");
        let _ = writeln!(
            page,
            "- [View commit on GitHub]({}/commit/{})",
            self.repo_url, commit.hash
        );
        let _ = writeln!(
            page,
            "- [Browse repository at this commit]({}/tree/{})\n",
            self.repo_url, commit.hash
        );

        let _ = writeln!(page, "---\n");
        let _ = writeln!(
            page,
            "*This documentation was automatically generated from Git commit data.*"
        );

        page
    }

    /// Render and write the page for a commit, replacing any existing file
    ///
    /// # Errors
    ///
    /// Returns `PagesError::Io` if the file cannot be written.
    pub fn write(&self, commit: &CommitRecord) -> Result<PathBuf, PagesError> {
        let path = self.output_dir.join(Self::build_filename(commit));
        fs::write(&path, self.render(commit)).map_err(|e| PagesError::io(&path, e))?;
        Ok(path)
    }
}

fn title_segment(title: &str) -> String {
    let mut segment = sanitize(title);
    if segment.len() > MAX_TITLE_LEN {
        let mut end = MAX_TITLE_LEN;
        while !segment.is_char_boundary(end) {
            end -= 1;
        }
        segment.truncate(end);
        segment.truncate(segment.trim_end_matches('_').len());
    }
    segment
}

/// One list line per changed file, or the placeholder when there are none
#[must_use]
pub fn render_changes(changes: &[FileChange]) -> String {
    if changes.is_empty() {
        return NO_FILES_CHANGED.to_string();
    }

    changes
        .iter()
        .map(render_change)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_change(change: &FileChange) -> String {
    let kind = change.kind;
    match (&change.previous_path, kind) {
        (Some(previous), ChangeKind::Renamed | ChangeKind::Copied) => format!(
            "- {} **{}:** `{}` → `{}`",
            kind.emoji(),
            kind.label(),
            previous,
            change.path
        ),
        _ => format!("- {} **{}:** `{}`", kind.emoji(), kind.label(), change.path),
    }
}
