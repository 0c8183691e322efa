// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for commit-docs-git

use thiserror::Error;

/// Errors that can occur during git operations
#[derive(Debug, Error)]
pub enum GitError {
    /// Error from git2 library
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),

    /// Repository not found at the specified path
    #[error("Not a Git repository: {path}")]
    RepositoryNotFound {
        /// The path that was searched for a repository
        path: String,
    },

    /// Branch missing locally and could not be fetched from the remote
    #[error("Branch '{branch}' not found locally or on remote '{remote}'")]
    BranchNotFound {
        /// The branch that was looked up
        branch: String,
        /// The remote the branch was fetched from
        remote: String,
    },

    /// A git subprocess exited unsuccessfully
    #[error("Git command failed: {command} (exit code {exit_code}): {stderr}")]
    CommandFailed {
        /// The command line that was run
        command: String,
        /// Captured standard error
        stderr: String,
        /// Process exit code, -1 when killed by a signal
        exit_code: i32,
    },

    /// The git executable is not on PATH
    #[error("git executable not found")]
    GitNotFound,

    /// I/O error while spawning git
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
