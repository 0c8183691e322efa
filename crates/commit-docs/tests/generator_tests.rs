// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Generator pipeline tests against a canned revision source


use std::fs;

use commit_docs::generator::{GenerateError, Generator};
use commit_docs_git::GitError;
use commit_docs_pages::state::STATE_FILE;
use similar_asserts::assert_eq;

use fixtures::{FakeSource, canned_commit, test_config};
use test_utils::{TempTestDir, index_without_footer, page_names};

// ============================================================================
// First run
// ============================================================================

#[test]
fn test_first_run_documents_every_commit() {
    let dir = TempTestDir::new("first_run");
    let generator = Generator::new(FakeSource::with_commits(3), test_config(dir.path()));

    let stats = generator.run().expect("run should succeed");

    assert_eq!(stats.watermark, None);
    assert_eq!(stats.commits_listed, 3);
    assert_eq!(stats.documents_written, 3);
    assert_eq!(stats.failures, 0);
    assert_eq!(stats.index_entries, 3);
    assert_eq!(
        page_names(&dir.path().join("_docs")),
        vec![
            "20260202120000-0000000-Commit_1.md",
            "20260203120000-0000000-Commit_2.md",
            "20260204120000-0000000-Commit_3.md",
        ]
    );
    assert!(dir.file_exists("_docs/index.md"));
    assert!(dir.file_exists(&format!("_docs/{STATE_FILE}")));
}

#[test]
fn test_page_content_comes_from_source() {
    let dir = TempTestDir::new("page_content");
    let generator = Generator::new(FakeSource::with_commits(1), test_config(dir.path()));
    generator.run().expect("run should succeed");

    let page = dir.read_file("_docs/20260202120000-0000000-Commit_1.md");
    assert!(page.contains("title: \"Commit 1\"\n"));
    assert!(page.contains("author: \"Canned Author\"\n"));
    assert!(page.contains("```\nCommit 1\n\nBody of commit 1.\n```"));
    assert!(page.contains("- ✅ **Added:** `src/added_1.rs`"));
    assert!(page.contains("- 📝 **Modified:** `README.md`"));
    assert!(page.contains("(https://github.com/owner/repo/commit/0000000000000000000000000000000000000001)"));
}

#[test]
fn test_commit_without_changes_uses_placeholder() {
    let dir = TempTestDir::new("no_changes");
    let mut commit = canned_commit(1, "Empty commit");
    commit.changes.clear();
    let generator = Generator::new(FakeSource::new(vec![commit]), test_config(dir.path()));
    generator.run().expect("run should succeed");

    let page = dir.read_file("_docs/20260202120000-0000000-Empty_commit.md");
    assert!(page.contains("## Files Changed\n\nNo files changed in this commit.\n"));
}

// ============================================================================
// Incremental runs
// ============================================================================

#[test]
fn test_second_run_is_noop() {
    let dir = TempTestDir::new("second_run");
    let generator = Generator::new(FakeSource::with_commits(3), test_config(dir.path()));

    generator.run().expect("first run");
    let pages_before = page_names(&dir.path().join("_docs"));
    let index_before = dir.read_file("_docs/index.md");

    let stats = generator.run().expect("second run");

    assert!(stats.is_noop());
    assert_eq!(stats.documents_written, 0);
    assert_eq!(
        stats.watermark.as_deref(),
        Some("0000000000000000000000000000000000000003")
    );
    assert_eq!(page_names(&dir.path().join("_docs")), pages_before);
    assert_eq!(
        index_without_footer(&dir.read_file("_docs/index.md")),
        index_without_footer(&index_before)
    );
}

#[test]
fn test_new_commit_is_documented_incrementally() {
    let dir = TempTestDir::new("incremental");
    let generator = Generator::new(FakeSource::with_commits(2), test_config(dir.path()));
    generator.run().expect("first run");

    generator.source().push(canned_commit(3, "Third change"));
    let stats = generator.run().expect("second run");

    assert_eq!(
        stats.watermark.as_deref(),
        Some("0000000000000000000000000000000000000002")
    );
    assert_eq!(stats.documents_written, 1);
    assert_eq!(page_names(&dir.path().join("_docs")).len(), 3);

    let index = dir.read_file("_docs/index.md");
    let first_entry = index
        .lines()
        .find(|l| l.starts_with("- ["))
        .expect("index entry");
    assert!(first_entry.starts_with("- [Third change]("));
}

#[test]
fn test_watermark_recovered_from_pages_without_state_file() {
    let dir = TempTestDir::new("no_state_file");
    let generator = Generator::new(FakeSource::with_commits(2), test_config(dir.path()));
    generator.run().expect("first run");
    fs::remove_file(dir.path().join("_docs").join(STATE_FILE)).expect("remove state");

    generator.source().push(canned_commit(3, "Third change"));
    let stats = generator.run().expect("second run");

    // The newest page is the last one written in the first run
    assert!(stats.watermark.is_some());
    assert_eq!(stats.documents_written, 1);
}

#[test]
fn test_rewritten_history_regenerates_everything() {
    let dir = TempTestDir::new("rewritten");
    let generator = Generator::new(FakeSource::with_commits(2), test_config(dir.path()));
    generator.run().expect("first run");

    generator.source().rewrite(vec![
        canned_commit(1, "Commit 1"),
        canned_commit(12, "Commit 2 amended"),
    ]);
    let stats = generator.run().expect("second run");

    assert_eq!(stats.watermark, None);
    assert_eq!(stats.commits_listed, 2);
    assert_eq!(stats.documents_written, 2);
    assert_eq!(generator.source().list_calls.borrow().last(), Some(&None));
}

#[test]
fn test_long_title_does_not_block_later_runs() {
    let dir = TempTestDir::new("long_title");
    let long_title = "word ".repeat(60);
    let source = FakeSource::new(vec![
        canned_commit(1, "One"),
        canned_commit(2, &long_title),
        canned_commit(3, "Three"),
    ]);
    let generator = Generator::new(source, test_config(dir.path()));

    let first = generator.run().expect("first run");
    assert_eq!(first.failures, 0);
    assert_eq!(first.documents_written, 3);

    let second = generator.run().expect("second run");
    assert!(second.is_noop());
    assert_eq!(second.documents_written, 0);
}

// ============================================================================
// Error handling
// ============================================================================

/// Occupy a page's path with a directory so writing it fails
fn block_page(dir: &TempTestDir, name: &str) -> std::path::PathBuf {
    let path = dir.path().join("_docs").join(name);
    fs::create_dir_all(&path).expect("create blocking directory");
    path
}

#[test]
fn test_failed_first_page_is_retried() {
    let dir = TempTestDir::new("first_page_fails");
    let blocked = block_page(&dir, "20260202120000-0000000-Commit_1.md");
    let generator = Generator::new(FakeSource::with_commits(3), test_config(dir.path()));

    let first = generator.run().expect("first run");
    assert_eq!(first.failures, 1);
    assert_eq!(first.documents_written, 2);

    // Pages for later commits exist, but must not become the watermark
    let second = generator.run().expect("second run");
    assert_eq!(second.watermark, None);
    assert_eq!(second.commits_listed, 3);

    fs::remove_dir(&blocked).expect("unblock page");
    let third = generator.run().expect("third run");
    assert_eq!(third.failures, 0);
    assert_eq!(third.documents_written, 3);

    let fourth = generator.run().expect("fourth run");
    assert!(fourth.is_noop());
    assert_eq!(
        fourth.watermark.as_deref(),
        Some("0000000000000000000000000000000000000003")
    );
}

#[test]
fn test_failed_middle_page_holds_watermark() {
    let dir = TempTestDir::new("middle_page_fails");
    let blocked = block_page(&dir, "20260203120000-0000000-Commit_2.md");
    let generator = Generator::new(FakeSource::with_commits(3), test_config(dir.path()));

    let first = generator.run().expect("first run");
    assert_eq!(first.failures, 1);
    assert_eq!(first.documents_written, 2);

    // Commit 2 fails again as the first page of this run; the watermark stays
    let second = generator.run().expect("second run");
    assert_eq!(
        second.watermark.as_deref(),
        Some("0000000000000000000000000000000000000001")
    );
    assert_eq!(second.commits_listed, 2);
    assert_eq!(second.failures, 1);

    fs::remove_dir(&blocked).expect("unblock page");
    let third = generator.run().expect("third run");
    assert_eq!(
        third.watermark.as_deref(),
        Some("0000000000000000000000000000000000000001")
    );
    assert_eq!(third.documents_written, 2);
    assert!(generator.run().expect("fourth run").is_noop());
}

#[test]
fn test_validation_failure_is_fatal() {
    let dir = TempTestDir::new("validation");
    let source = FakeSource::with_commits(1);
    source.fail_validation.set(true);
    let generator = Generator::new(source, test_config(dir.path()));

    let result = generator.run();

    assert!(matches!(
        result,
        Err(GenerateError::Validation(GitError::BranchNotFound { .. }))
    ));
    assert!(!dir.file_exists("_docs"));
}

#[test]
fn test_fetch_failure_is_not_fatal() {
    let dir = TempTestDir::new("fetch_failure");
    let source = FakeSource::with_commits(2);
    source.fail_fetch.set(true);
    let generator = Generator::new(source, test_config(dir.path()));

    let stats = generator.run().expect("run should succeed");

    assert_eq!(generator.source().fetch_calls.get(), 1);
    assert_eq!(stats.documents_written, 2);
}

#[test]
fn test_no_fetch_skips_remote() {
    let dir = TempTestDir::new("no_fetch");
    let mut config = test_config(dir.path());
    config.no_fetch = true;
    let generator = Generator::new(FakeSource::with_commits(1), config);

    generator.run().expect("run should succeed");

    assert_eq!(generator.source().fetch_calls.get(), 0);
}

#[test]
fn test_empty_history_is_noop() {
    let dir = TempTestDir::new("empty_history");
    let generator = Generator::new(FakeSource::new(vec![]), test_config(dir.path()));

    let stats = generator.run().expect("run should succeed");

    assert!(stats.is_noop());
    assert!(dir.file_exists("_docs"));
    assert!(!dir.file_exists("_docs/index.md"));
    assert!(!dir.file_exists(&format!("_docs/{STATE_FILE}")));
}

#[test]
fn test_output_dir_blocked_by_file() {
    let dir = TempTestDir::new("blocked_output");
    dir.create_file("_docs", "not a directory");
    let generator = Generator::new(FakeSource::with_commits(1), test_config(dir.path()));

    assert!(matches!(
        generator.run(),
        Err(GenerateError::OutputDir { .. })
    ));
}

// ============================================================================
// Index limit
// ============================================================================

#[test]
fn test_index_respects_configured_limit() {
    let dir = TempTestDir::new("index_limit");
    let mut config = test_config(dir.path());
    config.index_limit = 5;
    let generator = Generator::new(FakeSource::with_commits(8), config);

    let stats = generator.run().expect("run should succeed");

    assert_eq!(stats.documents_written, 8);
    assert_eq!(stats.index_entries, 5);
    let index = dir.read_file("_docs/index.md");
    assert_eq!(index.lines().filter(|l| l.starts_with("- [")).count(), 5);
}
