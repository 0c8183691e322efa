// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for commit-docs-pages

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing documentation pages
#[derive(Debug, Error)]
pub enum PagesError {
    /// Filesystem error on a specific path
    #[error("IO error on {path}: {source}")]
    Io {
        /// The file or directory being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A page's front matter lacks a required field
    #[error("Missing front matter field '{field}' in {path}")]
    MissingField {
        /// The page that was parsed
        path: PathBuf,
        /// Name of the absent field
        field: &'static str,
    },

    /// The watermark state file could not be encoded or decoded
    #[error("State file error: {0}")]
    State(#[from] serde_json::Error),
}

impl PagesError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
