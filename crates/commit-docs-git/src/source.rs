// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Revision sources
//!
//! [`RevisionSource`] is the capability the documentation generator needs
//! from version control. [`GitCli`] implements it by running the `git`
//! executable; repository and branch validation go through `git2`.
//!
//! Lookups are best effort: failures are logged and turned into empty
//! results so that one bad commit does not stop a batch. Only
//! [`RevisionSource::validate`] and [`RevisionSource::fetch_remote`] report
//! errors to the caller.

use std::path::{Path, PathBuf};
use std::process::Command;

use git2::{BranchType, Repository};
use tracing::{debug, error, info, warn};

use crate::commit::{CommitRecord, CommitSummary, FileChange};
use crate::error::GitError;
use crate::parser::{LOG_FORMAT, parse_log_output, parse_name_status};

/// Source of commit metadata for one branch
pub trait RevisionSource {
    /// Check that the repository exists and the tracked branch resolves
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` or `GitError::BranchNotFound`.
    fn validate(&self) -> Result<(), GitError>;

    /// Fetch updates from the remote
    ///
    /// # Errors
    ///
    /// Returns the underlying command error; callers treat it as non-fatal.
    fn fetch_remote(&self) -> Result<(), GitError>;

    /// List commits on the branch, oldest first
    ///
    /// With `since`, only commits strictly after it up to the branch tip are
    /// returned. Returns an empty list when git fails.
    fn list_commits(&self, since: Option<&str>) -> Vec<CommitSummary>;

    /// Full multi-line message of one commit, empty on failure
    fn full_message(&self, hash: &str) -> String;

    /// Files changed by one commit, empty on failure or when none changed
    fn changed_files(&self, hash: &str) -> Vec<FileChange>;

    /// Whether `hash` names a commit object in the repository
    fn has_commit(&self, hash: &str) -> bool;

    /// Resolve a summary into a full commit record
    fn commit(&self, summary: CommitSummary) -> CommitRecord {
        let message = self.full_message(&summary.hash);
        let changes = self.changed_files(&summary.hash);
        CommitRecord::from_summary(summary, message, changes)
    }
}

/// Name of the git executable
const GIT_COMMAND: &str = "git";

/// [`RevisionSource`] backed by the `git` command line tool
#[derive(Debug, Clone)]
pub struct GitCli {
    repo_path: PathBuf,
    branch: String,
    remote: String,
}

impl GitCli {
    /// Create a source for `branch` of the repository at `repo_path`
    pub fn new(repo_path: impl Into<PathBuf>, branch: &str, remote: &str) -> Self {
        Self {
            repo_path: repo_path.into(),
            branch: branch.to_string(),
            remote: remote.to_string(),
        }
    }

    /// Repository working directory
    #[must_use]
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    /// Tracked branch name
    #[must_use]
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Run git with the given arguments and return its stdout
    ///
    /// Path quoting is disabled so non-ASCII file names come back verbatim.
    ///
    /// # Errors
    ///
    /// Returns `GitError::GitNotFound` if git is not installed and
    /// `GitError::CommandFailed` on a non-zero exit.
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        debug!(?args, "Running git");
        let output = Command::new(GIT_COMMAND)
            .current_dir(&self.repo_path)
            .args(["-c", "core.quotePath=false"])
            .args(args)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    GitError::GitNotFound
                } else {
                    GitError::Io(e)
                }
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(GitError::CommandFailed {
                command: format!("{GIT_COMMAND} {}", args.join(" ")),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                exit_code: output.status.code().unwrap_or(-1),
            })
        }
    }

    /// Like [`GitCli::run`], but logs failures and returns `None`
    fn run_logged(&self, args: &[&str]) -> Option<String> {
        match self.run(args) {
            Ok(output) => Some(output),
            Err(e) => {
                error!(error = %e, "Git command failed");
                None
            }
        }
    }

    fn has_local_branch(repo: &Repository, branch: &str) -> bool {
        repo.find_branch(branch, BranchType::Local).is_ok()
    }
}

impl RevisionSource for GitCli {
    fn validate(&self) -> Result<(), GitError> {
        let repo =
            Repository::discover(&self.repo_path).map_err(|_| GitError::RepositoryNotFound {
                path: self.repo_path.display().to_string(),
            })?;

        if Self::has_local_branch(&repo, &self.branch) {
            return Ok(());
        }

        warn!(
            branch = %self.branch,
            remote = %self.remote,
            "Branch not found locally, fetching from remote"
        );
        let refspec = format!("{0}:{0}", self.branch);
        if let Err(e) = self.run(&["fetch", &self.remote, &refspec]) {
            error!(error = %e, "Failed to fetch branch");
            return Err(GitError::BranchNotFound {
                branch: self.branch.clone(),
                remote: self.remote.clone(),
            });
        }
        Ok(())
    }

    fn fetch_remote(&self) -> Result<(), GitError> {
        info!(remote = %self.remote, "Fetching latest changes from remote");
        self.run(&["fetch", &self.remote]).map(|_| ())
    }

    fn list_commits(&self, since: Option<&str>) -> Vec<CommitSummary> {
        let range;
        let mut args = vec!["log", self.branch.as_str(), LOG_FORMAT, "--reverse"];
        match since {
            Some(hash) => {
                info!(since = hash, "Fetching commits since watermark");
                range = format!("{hash}..{}", self.branch);
                args.push(&range);
            }
            None => info!("Fetching all commits"),
        }

        self.run_logged(&args)
            .map(|output| parse_log_output(&output))
            .unwrap_or_default()
    }

    fn full_message(&self, hash: &str) -> String {
        self.run_logged(&["log", "-1", "--pretty=format:%B", hash])
            .map(|output| output.trim().to_string())
            .unwrap_or_default()
    }

    fn changed_files(&self, hash: &str) -> Vec<FileChange> {
        self.run_logged(&["show", "--name-status", "--pretty=format:", hash])
            .map(|output| parse_name_status(&output))
            .unwrap_or_default()
    }

    fn has_commit(&self, hash: &str) -> bool {
        let object = format!("{hash}^{{commit}}");
        self.run(&["cat-file", "-e", &object]).is_ok()
    }
}
