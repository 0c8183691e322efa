//! Discovery of generated pages in the output directory

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::PagesError;

/// Extension of generated pages
pub const DOCUMENT_EXTENSION: &str = "md";

/// Name of the summary page, never treated as a commit page
pub const INDEX_FILE: &str = "index.md";

/// A commit page found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    /// Full path of the page
    pub path: PathBuf,
    /// Last modification time
    pub modified: SystemTime,
}

impl DocumentFile {
    /// File name without the `.md` extension
    #[must_use]
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// List commit pages in `dir`, most recently modified first
///
/// `index.md`, non-markdown files and subdirectories are skipped. Pages with
/// identical modification times are ordered by file name, descending, which
/// puts the later commit timestamp first.
///
/// # Errors
///
/// Returns `PagesError::Io` if the directory cannot be read.
pub fn list_documents(dir: &Path) -> Result<Vec<DocumentFile>, PagesError> {
    let entries = fs::read_dir(dir).map_err(|e| PagesError::io(dir, e))?;

    let mut documents = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PagesError::io(dir, e))?;
        let path = entry.path();

        let is_page = path
            .extension()
            .is_some_and(|ext| ext == DOCUMENT_EXTENSION)
            && path.file_name().is_some_and(|name| name != INDEX_FILE);
        if !is_page {
            continue;
        }

        let metadata = entry.metadata().map_err(|e| PagesError::io(&path, e))?;
        if !metadata.is_file() {
            continue;
        }
        let modified = metadata.modified().map_err(|e| PagesError::io(&path, e))?;
        documents.push(DocumentFile { path, modified });
    }

    documents.sort_by(|a, b| {
        b.modified
            .cmp(&a.modified)
            .then_with(|| b.path.file_name().cmp(&a.path.file_name()))
    });
    Ok(documents)
}
