//! Git commit types

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::parser::parse_git_date;

/// Lightweight commit data as produced by the branch log listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitSummary {
    /// The commit hash (40 hex characters)
    pub hash: String,
    /// Committer date exactly as git printed it (`%ci`)
    pub date: String,
    /// First line of the commit message
    pub title: String,
    /// Author display name
    pub author: String,
}

/// Kind of change a commit made to one path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// `A`
    Added,
    /// `M`
    Modified,
    /// `D`
    Deleted,
    /// `R` followed by a similarity score
    Renamed,
    /// `C` followed by a similarity score
    Copied,
    /// Anything else git may report (type change, unmerged, unknown)
    Other,
}

impl ChangeKind {
    /// Map a `--name-status` code to a change kind
    #[must_use]
    pub fn from_status(status: &str) -> Self {
        match status {
            "A" => Self::Added,
            "M" => Self::Modified,
            "D" => Self::Deleted,
            s if s.starts_with('R') => Self::Renamed,
            s if s.starts_with('C') => Self::Copied,
            _ => Self::Other,
        }
    }

    /// Human readable label used in generated documents
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Modified => "Modified",
            Self::Deleted => "Deleted",
            Self::Renamed => "Renamed",
            Self::Copied => "Copied",
            Self::Other => "Changed",
        }
    }

    /// Marker emoji shown before the label
    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Added => "✅",
            Self::Modified => "📝",
            Self::Deleted => "❌",
            Self::Renamed => "🔄",
            Self::Copied => "📋",
            Self::Other => "📄",
        }
    }
}

/// One entry of a commit's changed-file list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    /// Classified change kind
    pub kind: ChangeKind,
    /// Raw status code as printed by git (e.g. `M`, `R087`)
    pub status: String,
    /// Path after the change
    pub path: String,
    /// Source path for renames and copies
    pub previous_path: Option<String>,
}

impl FileChange {
    /// Create a change for a single path, classifying the status code
    #[must_use]
    pub fn new(status: &str, path: impl Into<String>) -> Self {
        Self {
            kind: ChangeKind::from_status(status),
            status: status.to_string(),
            path: path.into(),
            previous_path: None,
        }
    }

    /// Attach the source path of a rename or copy
    #[must_use]
    pub fn with_previous_path(mut self, previous: impl Into<String>) -> Self {
        self.previous_path = Some(previous.into());
        self
    }
}

/// A fully resolved commit, ready to be rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// The commit hash (40 hex characters)
    pub hash: String,
    /// Committer date exactly as git printed it
    pub date: String,
    /// First line of the commit message
    pub title: String,
    /// Author display name
    pub author: String,
    /// Full commit message
    pub message: String,
    /// Changed files in the order git listed them
    pub changes: Vec<FileChange>,
}

impl CommitRecord {
    /// Combine a log summary with the per-commit details
    #[must_use]
    pub fn from_summary(summary: CommitSummary, message: String, changes: Vec<FileChange>) -> Self {
        Self {
            hash: summary.hash,
            date: summary.date,
            title: summary.title,
            author: summary.author,
            message,
            changes,
        }
    }

    /// Validate that a hash is a 40-character hex string
    #[must_use]
    pub fn is_valid_hash(hash: &str) -> bool {
        hash.len() == 40 && hash.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Get the short hash (first 7 characters)
    #[must_use]
    pub fn short_hash(&self) -> &str {
        let end = self
            .hash
            .char_indices()
            .nth(7)
            .map_or(self.hash.len(), |(i, _)| i);
        &self.hash[..end]
    }

    /// Parse the committer date, if git printed it in a known format
    #[must_use]
    pub fn parsed_date(&self) -> Option<DateTime<FixedOffset>> {
        parse_git_date(&self.date)
    }
}
