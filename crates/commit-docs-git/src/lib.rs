// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! commit-docs-git: Git revision source for commit-docs
//!
//! This library crate lists commits on a branch and collects per-commit
//! metadata (full message, changed files) by driving the `git` executable.
//! The [`RevisionSource`] trait is the seam the generator depends on, so
//! tests can swap in canned data.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use commit_docs_git::{GitCli, RevisionSource};
//!
//! let git = GitCli::new(".", "main", "origin");
//! git.validate().expect("valid repository");
//!
//! for summary in git.list_commits(None) {
//!     let commit = git.commit(summary);
//!     println!("{} - {} ({} files)", commit.short_hash(), commit.title, commit.changes.len());
//! }
//! ```

pub mod commit;
pub mod error;
pub mod parser;
pub mod source;

pub use commit::{ChangeKind, CommitRecord, CommitSummary, FileChange};
pub use error::GitError;
pub use source::{GitCli, RevisionSource};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::commit::{ChangeKind, CommitRecord, CommitSummary, FileChange};
    pub use crate::error::GitError;
    pub use crate::source::{GitCli, RevisionSource};
}
