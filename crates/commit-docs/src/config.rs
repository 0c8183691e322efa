//! Configuration for commit-docs
//!
//! Every setting has a compiled-in default, so running the binary without
//! arguments documents the `main` branch of the current directory into
//! `_docs/`. Flags and environment variables override the defaults.

use std::path::PathBuf;

use clap::Parser;

/// Directory the pages are written to, relative to the repository
pub const DEFAULT_OUTPUT_DIR: &str = "_docs";
/// Branch whose history is documented
pub const DEFAULT_BRANCH: &str = "main";
/// Remote fetched before listing commits
pub const DEFAULT_REMOTE: &str = "origin";
/// Log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = ".commit-docs.log";
/// Base URL used for commit and tree links
pub const DEFAULT_REPO_URL: &str = "https://github.com/metanull/inventory-management-ui";
/// Number of pages listed in `index.md`
pub const DEFAULT_INDEX_LIMIT: usize = commit_docs_pages::index::DEFAULT_INDEX_LIMIT;

/// Commit Docs - markdown documentation for every commit on a branch
#[derive(Parser, Debug, Clone)]
#[command(name = "commit-docs")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Repository working directory
    #[arg(long, env = "COMMIT_DOCS_REPO", default_value = ".")]
    pub repo: PathBuf,

    /// Output directory for generated pages
    ///
    /// Relative paths are resolved against the repository directory.
    #[arg(short, long, env = "COMMIT_DOCS_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Branch to document
    #[arg(short, long, env = "COMMIT_DOCS_BRANCH", default_value = DEFAULT_BRANCH)]
    pub branch: String,

    /// Remote to fetch from
    #[arg(long, env = "COMMIT_DOCS_REMOTE", default_value = DEFAULT_REMOTE)]
    pub remote: String,

    /// Log file receiving a copy of all log output
    #[arg(long, env = "COMMIT_DOCS_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Base repository URL for "view commit" and "browse tree" links
    #[arg(long, env = "COMMIT_DOCS_REPO_URL", default_value = DEFAULT_REPO_URL)]
    pub repo_url: String,

    /// Maximum number of entries in index.md
    #[arg(long, default_value_t = DEFAULT_INDEX_LIMIT)]
    pub index_limit: usize,

    /// Skip fetching from the remote and use local state only
    #[arg(long, default_value = "false")]
    pub no_fetch: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - only warnings and errors are logged
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo: PathBuf::from("."),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            branch: DEFAULT_BRANCH.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            repo_url: DEFAULT_REPO_URL.to_string(),
            index_limit: DEFAULT_INDEX_LIMIT,
            no_fetch: false,
            verbose: false,
            quiet: false,
        }
    }
}

impl Config {
    /// Output directory, resolved against the repository directory
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        if self.output_dir.is_absolute() {
            self.output_dir.clone()
        } else {
            self.repo.join(&self.output_dir)
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the repository path is missing or not a
    /// directory, or if the branch name is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.repo.exists() {
            return Err(ConfigError::RepoNotFound(self.repo.clone()));
        }
        if !self.repo.is_dir() {
            return Err(ConfigError::RepoNotDirectory(self.repo.clone()));
        }
        if self.branch.trim().is_empty() {
            return Err(ConfigError::EmptyBranch);
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Repository path not found
    #[error("Repository path not found: {0}")]
    RepoNotFound(PathBuf),

    /// Repository path is not a directory
    #[error("Repository path is not a directory: {0}")]
    RepoNotDirectory(PathBuf),

    /// Branch name is empty
    #[error("Branch name must not be empty")]
    EmptyBranch,

    /// Log file could not be opened
    #[error("Failed to open log file {0}: {1}")]
    LogFile(PathBuf, std::io::Error),
}
