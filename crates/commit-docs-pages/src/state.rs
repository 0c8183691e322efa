// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Watermark state
//!
//! The watermark is the hash of the last commit that has a page. It is read
//! from a small JSON state file when one exists; otherwise it is recovered
//! from the front matter of the most recently modified page.
//!
//! A state file without `last_commit` means no commit is documented yet, even
//! if some pages exist. The generator writes one when the first commit of a
//! run fails, so the next run starts from the beginning again.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::documents::list_documents;
use crate::error::PagesError;
use crate::front_matter::FrontMatter;

/// Name of the state file inside the output directory
pub const STATE_FILE: &str = ".commit-docs-state.json";

/// Contents of the state file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatermarkState {
    /// Hash of the last documented commit, `None` to start from scratch
    #[serde(default)]
    pub last_commit: Option<String>,
    /// When the state was written
    pub updated_at: DateTime<Utc>,
}

/// Reads and records the watermark for an output directory
#[derive(Debug, Clone)]
pub struct StateReader {
    output_dir: PathBuf,
}

impl StateReader {
    /// Create a reader for `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Path of the state file
    #[must_use]
    pub fn state_path(&self) -> PathBuf {
        self.output_dir.join(STATE_FILE)
    }

    /// Hash of the most recently documented commit, if any
    ///
    /// The state file wins when present and readable, including one that
    /// records no commit. Failing that, the page with the newest modification
    /// time is parsed for its `commit_hash`. Problems reading either are
    /// logged and treated as "no watermark".
    #[must_use]
    pub fn latest_documented_hash(&self) -> Option<String> {
        if !self.output_dir.is_dir() {
            return None;
        }

        match self.read_state() {
            Ok(Some(state)) => return state.last_commit,
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Ignoring unreadable state file"),
        }

        self.hash_from_latest_document()
    }

    /// Persist `hash` as the new watermark
    ///
    /// The file is written to a temporary sibling and renamed into place so
    /// readers never observe a partial write.
    ///
    /// # Errors
    ///
    /// Returns `PagesError::Io` if the file cannot be written.
    pub fn record(&self, hash: &str) -> Result<(), PagesError> {
        self.write_state(Some(hash.to_string()))?;
        debug!(hash, "Recorded watermark");
        Ok(())
    }

    /// Persist an empty watermark so the next run documents every commit
    ///
    /// Existing pages are then ignored when looking for the watermark.
    ///
    /// # Errors
    ///
    /// Returns `PagesError::Io` if the file cannot be written.
    pub fn clear(&self) -> Result<(), PagesError> {
        self.write_state(None)?;
        debug!("Cleared watermark");
        Ok(())
    }

    fn write_state(&self, last_commit: Option<String>) -> Result<(), PagesError> {
        let state = WatermarkState {
            last_commit,
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&state)?;

        let path = self.state_path();
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| PagesError::io(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| PagesError::io(&path, e))?;
        Ok(())
    }

    fn read_state(&self) -> Result<Option<WatermarkState>, PagesError> {
        let path = self.state_path();
        if !path.is_file() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path).map_err(|e| PagesError::io(&path, e))?;
        let mut state: WatermarkState = serde_json::from_str(&text)?;
        state.last_commit = state.last_commit.filter(|hash| !hash.trim().is_empty());
        Ok(Some(state))
    }

    fn hash_from_latest_document(&self) -> Option<String> {
        let documents = match list_documents(&self.output_dir) {
            Ok(documents) => documents,
            Err(e) => {
                warn!(error = %e, "Could not list existing documentation");
                return None;
            }
        };
        let latest = documents.first()?;

        match read_commit_hash(&latest.path) {
            Ok(hash) => Some(hash),
            Err(e) => {
                warn!(
                    error = %e,
                    "Could not read latest commit from {}",
                    latest.path.display()
                );
                None
            }
        }
    }
}

/// Extract `commit_hash` from a page's front matter
///
/// # Errors
///
/// Returns `PagesError::Io` if the page cannot be read and
/// `PagesError::MissingField` if it has no usable `commit_hash`.
pub fn read_commit_hash(path: &Path) -> Result<String, PagesError> {
    let text = fs::read_to_string(path).map_err(|e| PagesError::io(path, e))?;
    FrontMatter::parse(&text)
        .and_then(|fm| fm.get("commit_hash").map(str::to_string))
        .filter(|hash| !hash.is_empty())
        .ok_or_else(|| PagesError::MissingField {
            path: path.to_path_buf(),
            field: "commit_hash",
        })
}
