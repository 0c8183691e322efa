// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Index page generation
//!
//! `index.md` lists the most recently written commit pages, newest first.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, warn};

use crate::documents::{DocumentFile, INDEX_FILE, list_documents};
use crate::error::PagesError;
use crate::front_matter::FrontMatter;

/// Number of entries listed when no limit is configured
pub const DEFAULT_INDEX_LIMIT: usize = 20;

/// Branch named in the index introduction unless one is set
pub const DEFAULT_INDEX_BRANCH: &str = "main";

const INDEX_FRONT_MATTER: &str = "---
layout: default
title: Commit Documentation
nav_exclude: true
---

# Commit Documentation
";

/// Builds `index.md` for an output directory
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    output_dir: PathBuf,
    limit: usize,
    branch: String,
}

impl IndexBuilder {
    /// Create a builder listing at most `limit` pages of `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>, limit: usize) -> Self {
        Self {
            output_dir: output_dir.into(),
            limit,
            branch: DEFAULT_INDEX_BRANCH.to_string(),
        }
    }

    /// Name `branch` as the documented branch in the introduction
    #[must_use]
    pub fn with_branch(mut self, branch: &str) -> Self {
        self.branch = branch.to_string();
        self
    }

    /// Path of the index page
    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.output_dir.join(INDEX_FILE)
    }

    /// Render the index without the generation footer
    ///
    /// Only the `limit` newest pages are considered. Pages among them whose
    /// front matter lacks `title` or `date` are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns `PagesError::Io` if the output directory cannot be listed.
    pub fn render_entries(&self) -> Result<(String, usize), PagesError> {
        let mut body = String::from(INDEX_FRONT_MATTER);
        let _ = write!(
            body,
            "\nThis directory contains automatically generated documentation for each commit to the {} branch.\n\n## Recent Commits\n\n",
            self.branch
        );
        let mut listed = 0;

        for document in list_documents(&self.output_dir)?.iter().take(self.limit) {
            match index_entry(document) {
                Ok(line) => {
                    body.push_str(&line);
                    body.push('\n');
                    listed += 1;
                }
                Err(e) => warn!(error = %e, "Could not process {}", document.path.display()),
            }
        }

        Ok((body, listed))
    }

    /// Write `index.md`, replacing any previous version
    ///
    /// Returns the number of pages listed.
    ///
    /// # Errors
    ///
    /// Returns `PagesError::Io` if the directory cannot be listed or the
    /// index cannot be written.
    pub fn build(&self) -> Result<usize, PagesError> {
        let (mut content, listed) = self.render_entries()?;
        let _ = write!(
            content,
            "\n*Documentation automatically generated on {}*\n",
            Local::now().format("%Y-%m-%dT%H:%M:%S%.6f")
        );

        let path = self.index_path();
        fs::write(&path, content).map_err(|e| PagesError::io(&path, e))?;
        debug!(entries = listed, path = %path.display(), "Wrote index");
        Ok(listed)
    }
}

fn index_entry(document: &DocumentFile) -> Result<String, PagesError> {
    let path: &Path = &document.path;
    let text = fs::read_to_string(path).map_err(|e| PagesError::io(path, e))?;
    let fm = FrontMatter::parse(&text).unwrap_or_default();

    let title = fm.get("title").ok_or_else(|| PagesError::MissingField {
        path: path.to_path_buf(),
        field: "title",
    })?;
    let date = fm
        .get("date")
        .and_then(|d| d.split_whitespace().next())
        .ok_or_else(|| PagesError::MissingField {
            path: path.to_path_buf(),
            field: "date",
        })?;

    Ok(format!("- [{title}]({}/) - {date}", document.stem()))
}
