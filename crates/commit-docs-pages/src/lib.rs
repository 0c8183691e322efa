// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! commit-docs-pages: Markdown output for commit-docs
//!
//! This library crate owns everything commit-docs writes to disk: one
//! markdown page per commit, the `index.md` summary, and the watermark that
//! lets later runs pick up where the previous one stopped.
//!
//! # Example
//!
//! ```no_run
//! use commit_docs_git::{CommitRecord, FileChange};
//! use commit_docs_pages::{DocumentRenderer, IndexBuilder, StateReader};
//!
//! let renderer = DocumentRenderer::new("_docs", "https://github.com/owner/repo");
//! let commit = CommitRecord {
//!     hash: "1945ab9c752534e733c38ba0109dc3b741f0a6eb".to_string(),
//!     date: "2026-01-17 02:33:06 +0100".to_string(),
//!     title: "Add parser".to_string(),
//!     author: "Ada Lovelace".to_string(),
//!     message: "Add parser".to_string(),
//!     changes: vec![FileChange::new("A", "src/parser.rs")],
//! };
//! renderer.write(&commit).expect("write page");
//!
//! IndexBuilder::new("_docs", 20).build().expect("write index");
//! let watermark = StateReader::new("_docs").latest_documented_hash();
//! ```

pub mod documents;
pub mod error;
pub mod front_matter;
pub mod index;
pub mod render;
pub mod sanitize;
pub mod state;

pub use error::PagesError;
pub use front_matter::FrontMatter;
pub use index::IndexBuilder;
pub use render::DocumentRenderer;
pub use sanitize::sanitize;
pub use state::{StateReader, WatermarkState};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::PagesError;
    pub use crate::front_matter::FrontMatter;
    pub use crate::index::IndexBuilder;
    pub use crate::render::DocumentRenderer;
    pub use crate::state::StateReader;
}
