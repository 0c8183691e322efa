// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Documentation generation pipeline
//!
//! [`Generator`] drives one run: validate the repository, find the
//! watermark, fetch, list new commits, write one page per commit, rebuild
//! the index and record the new watermark.
//!
//! # Example
//!
//! ```no_run
//! use commit_docs::config::Config;
//! use commit_docs::generator::Generator;
//! use commit_docs_git::GitCli;
//!
//! let config = Config::default();
//! let source = GitCli::new(&config.repo, &config.branch, &config.remote);
//! let stats = Generator::new(source, config).run().expect("generate");
//! println!("Wrote {} pages", stats.documents_written);
//! ```

use std::fs;
use std::path::PathBuf;

use commit_docs_git::{GitError, RevisionSource};
use commit_docs_pages::{DocumentRenderer, IndexBuilder, PagesError, StateReader};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::config::Config;

// ============================================================================
// Error Types
// ============================================================================

/// Errors that abort a generation run
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Repository or branch could not be resolved
    #[error("Repository validation failed: {0}")]
    Validation(#[from] GitError),

    /// Output directory could not be created
    #[error("Failed to create output directory {path}: {source}")]
    OutputDir {
        /// The directory that was being created
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Page output error
    #[error("Pages error: {0}")]
    Pages(#[from] PagesError),
}

// ============================================================================
// Statistics
// ============================================================================

/// Outcome of a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateStats {
    /// Watermark the run started from
    pub watermark: Option<String>,
    /// Number of new commits found
    pub commits_listed: usize,
    /// Number of pages written
    pub documents_written: usize,
    /// Number of pages that could not be written
    pub failures: usize,
    /// Number of entries in the rebuilt index
    pub index_entries: usize,
}

impl GenerateStats {
    /// Whether the run found nothing to do
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.commits_listed == 0
    }
}

// ============================================================================
// Generator
// ============================================================================

/// Runs the documentation pipeline against a revision source
pub struct Generator<S> {
    source: S,
    config: Config,
}

impl<S: RevisionSource> Generator<S> {
    /// Create a generator
    pub fn new(source: S, config: Config) -> Self {
        Self { source, config }
    }

    /// The revision source in use
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run the pipeline once
    ///
    /// Only repository validation and output directory creation are fatal.
    /// A page that fails to write is logged and skipped, and the watermark
    /// then stops before it so the next run retries it. When the first page
    /// of the run fails, the starting watermark is written back, or cleared
    /// if there was none, so existing pages cannot move it past the failure.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::Validation` if the repository or branch cannot
    /// be resolved and `GenerateError::OutputDir` if the output directory
    /// cannot be created.
    pub fn run(&self) -> Result<GenerateStats, GenerateError> {
        info!("Starting Git commit documentation generator");

        self.source.validate()?;

        let output_dir = self.config.output_path();
        fs::create_dir_all(&output_dir).map_err(|source| GenerateError::OutputDir {
            path: output_dir.clone(),
            source,
        })?;

        let state = StateReader::new(&output_dir);
        let watermark = self.watermark(&state);

        if self.config.no_fetch {
            debug!("Remote fetch disabled");
        } else if let Err(e) = self.source.fetch_remote() {
            warn!(error = %e, "Failed to fetch from remote (continuing with local data)");
        }

        let commits = self.source.list_commits(watermark.as_deref());
        let mut stats = GenerateStats {
            watermark,
            commits_listed: commits.len(),
            ..Default::default()
        };

        if commits.is_empty() {
            info!("No new commits to document");
            return Ok(stats);
        }

        info!("Processing {} commits", commits.len());
        let renderer = DocumentRenderer::new(&output_dir, &self.config.repo_url);
        let total = commits.len();
        let mut documented_through = None;

        for (i, summary) in commits.into_iter().enumerate() {
            info!("Processing commit {}/{}: {}", i + 1, total, summary.hash);
            let commit = self.source.commit(summary);

            match renderer.write(&commit) {
                Ok(path) => {
                    stats.documents_written += 1;
                    if stats.failures == 0 {
                        documented_through = Some(commit.hash.clone());
                    }
                    info!(
                        "Generated: {}",
                        path.file_name().unwrap_or_default().to_string_lossy()
                    );
                }
                Err(e) => {
                    stats.failures += 1;
                    error!(error = %e, hash = %commit.hash, "Failed to write documentation");
                }
            }
        }

        info!("Generating documentation index");
        let index = IndexBuilder::new(&output_dir, self.config.index_limit)
            .with_branch(&self.config.branch);
        match index.build() {
            Ok(entries) => stats.index_entries = entries,
            Err(e) => error!(error = %e, "Failed to write index"),
        }

        let recorded = match documented_through.as_ref().or(stats.watermark.as_ref()) {
            Some(hash) => state.record(hash),
            None => state.clear(),
        };
        if let Err(e) = recorded {
            warn!(error = %e, "Could not record watermark");
        }

        info!("Documentation generation completed");
        info!("Generated files are in: {}", output_dir.display());
        Ok(stats)
    }

    /// Current watermark, dropped if the repository no longer has it
    fn watermark(&self, state: &StateReader) -> Option<String> {
        let Some(hash) = state.latest_documented_hash() else {
            info!("No existing documentation found. Processing all commits.");
            return None;
        };

        if self.source.has_commit(&hash) {
            info!("Latest documented commit: {hash}");
            Some(hash)
        } else {
            warn!(
                hash = %hash,
                "Latest documented commit is not in the repository (history rewritten?). Processing all commits."
            );
            None
        }
    }
}
