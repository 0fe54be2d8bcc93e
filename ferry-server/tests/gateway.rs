//! Integration tests for the remote operation and transfer layers
//!
//! These run the same code the REST handlers drive, against an in-memory
//! remote store, so existence probes, conflict handling, recursive walks,
//! archive round-trips, and staging cleanup are all verified without a
//! live FTP server.

mod common;

use common::FakeRemote;
use ferry_server::error::GatewayError;
use ferry_server::ftp::ops;
use ferry_server::transfer::{self, archive};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Seed the fake remote with the documentation tree used across tests:
///
/// ```text
/// /docs
///   report.pdf
///   images/
///     logo.png
/// ```
fn seed_docs(remote: &mut FakeRemote) {
    remote.add_dir("/docs");
    remote.add_dir("/docs/images");
    remote.add_file("/docs/report.pdf", b"%PDF-1.4 fake report");
    remote.add_file("/docs/images/logo.png", &[0x89, 0x50, 0x4E, 0x47]);
}

// ============================================================================
// Single-Entry Operations
// ============================================================================

#[test]
fn test_list_directory() {
    let mut remote = FakeRemote::new();
    seed_docs(&mut remote);

    let entries = ops::list_directory(&mut remote, "/docs").unwrap().unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["images", "report.pdf"]);

    let images = entries.iter().find(|e| e.name == "images").unwrap();
    assert!(images.kind.is_directory());
    let report = entries.iter().find(|e| e.name == "report.pdf").unwrap();
    assert!(!report.kind.is_directory());
    assert_eq!(report.size, 20);
    assert_eq!(report.path, "/docs/report.pdf");
}

#[test]
fn test_list_missing_directory_is_none() {
    let mut remote = FakeRemote::new();
    assert!(ops::list_directory(&mut remote, "/nope").unwrap().is_none());
}

#[test]
fn test_add_directory_creates_parents() {
    let mut remote = FakeRemote::new();
    ops::add_directory(&mut remote, "/a/b/c").unwrap();
    assert!(remote.dirs.contains("/a"));
    assert!(remote.dirs.contains("/a/b"));
    assert!(remote.dirs.contains("/a/b/c"));
}

#[test]
fn test_add_directory_existing_is_ok() {
    let mut remote = FakeRemote::new();
    remote.add_dir("/a");
    ops::add_directory(&mut remote, "/a").unwrap();
    assert_eq!(remote.mutations, 0);
}

#[test]
fn test_remove_directory_recursive() {
    let mut remote = FakeRemote::new();
    seed_docs(&mut remote);

    assert!(ops::remove_directory(&mut remote, "/docs").unwrap());
    assert!(remote.dirs.iter().all(|d| !d.starts_with("/docs")));
    assert!(remote.files.is_empty());
}

#[test]
fn test_remove_directory_missing_is_false_not_error() {
    let mut remote = FakeRemote::new();
    assert!(!ops::remove_directory(&mut remote, "/gone").unwrap());
    assert_eq!(remote.mutations, 0);

    // And again, to confirm repeated deletes stay harmless
    assert!(!ops::remove_directory(&mut remote, "/gone").unwrap());
}

#[test]
fn test_remove_file() {
    let mut remote = FakeRemote::new();
    seed_docs(&mut remote);

    assert!(ops::remove_file(&mut remote, "/docs/report.pdf").unwrap());
    assert!(!remote.files.contains_key("/docs/report.pdf"));

    assert!(!ops::remove_file(&mut remote, "/docs/report.pdf").unwrap());
}

#[test]
fn test_move_entry_file() {
    let mut remote = FakeRemote::new();
    seed_docs(&mut remote);

    assert!(ops::move_entry(&mut remote, "/docs/report.pdf", "/docs/final.pdf").unwrap());
    assert!(remote.files.contains_key("/docs/final.pdf"));
    assert!(!remote.files.contains_key("/docs/report.pdf"));
}

#[test]
fn test_move_entry_directory() {
    let mut remote = FakeRemote::new();
    seed_docs(&mut remote);

    assert!(ops::move_entry(&mut remote, "/docs", "/archive").unwrap());
    assert!(remote.dirs.contains("/archive"));
    assert!(remote.dirs.contains("/archive/images"));
    assert!(remote.files.contains_key("/archive/images/logo.png"));
    assert!(!remote.dirs.contains("/docs"));
}

#[test]
fn test_move_entry_missing_is_false() {
    let mut remote = FakeRemote::new();
    assert!(!ops::move_entry(&mut remote, "/nope", "/other").unwrap());
    assert_eq!(remote.mutations, 0);
}

#[test]
fn test_upload_file_conflict() {
    let mut remote = FakeRemote::new();
    seed_docs(&mut remote);

    let staged = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(staged.path(), b"new contents").unwrap();

    let result = ops::upload_file(&mut remote, staged.path(), "/docs/report.pdf");
    assert!(matches!(result, Err(GatewayError::Conflict)));
    assert_eq!(remote.files["/docs/report.pdf"], b"%PDF-1.4 fake report");
    assert_eq!(remote.mutations, 0);
}

#[test]
fn test_upload_file_new() {
    let mut remote = FakeRemote::new();
    remote.add_dir("/docs");

    let staged = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(staged.path(), b"notes").unwrap();

    ops::upload_file(&mut remote, staged.path(), "/docs/notes.txt").unwrap();
    assert_eq!(remote.files["/docs/notes.txt"], b"notes");
}

#[test]
fn test_download_file() {
    let mut remote = FakeRemote::new();
    seed_docs(&mut remote);

    let bytes = ops::download_file(&mut remote, "/docs/report.pdf")
        .unwrap()
        .unwrap();
    assert_eq!(bytes, b"%PDF-1.4 fake report");
}

#[test]
fn test_download_missing_file_is_none() {
    let mut remote = FakeRemote::new();
    assert!(ops::download_file(&mut remote, "/nope.txt").unwrap().is_none());
}

// ============================================================================
// Directory Transfers
// ============================================================================

#[test]
fn test_download_directory_archives_tree() {
    let mut remote = FakeRemote::new();
    seed_docs(&mut remote);
    let staging_root = TempDir::new().unwrap();

    let bytes = transfer::download_directory(&mut remote, "/docs", staging_root.path())
        .unwrap()
        .unwrap();

    let unpacked = TempDir::new().unwrap();
    archive::unpack(&bytes, unpacked.path()).unwrap();
    assert_eq!(
        std::fs::read(unpacked.path().join("report.pdf")).unwrap(),
        b"%PDF-1.4 fake report"
    );
    assert_eq!(
        std::fs::read(unpacked.path().join("images/logo.png")).unwrap(),
        [0x89, 0x50, 0x4E, 0x47]
    );
}

#[test]
fn test_download_missing_directory_is_none() {
    let mut remote = FakeRemote::new();
    let staging_root = TempDir::new().unwrap();

    let result = transfer::download_directory(&mut remote, "/nope", staging_root.path()).unwrap();
    assert!(result.is_none());
    assert_eq!(std::fs::read_dir(staging_root.path()).unwrap().count(), 0);
}

#[test]
fn test_upload_directory_builds_tree() {
    let mut remote = FakeRemote::new();
    let staging_root = TempDir::new().unwrap();

    let source = TempDir::new().unwrap();
    std::fs::create_dir(source.path().join("images")).unwrap();
    std::fs::write(source.path().join("report.pdf"), b"%PDF-1.4 fake report").unwrap();
    std::fs::write(source.path().join("images/logo.png"), [0x89, 0x50]).unwrap();
    let bytes = archive::pack(source.path()).unwrap();

    let listing = transfer::upload_directory(&mut remote, "/new", &bytes, staging_root.path())
        .unwrap()
        .unwrap();

    assert!(remote.dirs.contains("/new"));
    assert!(remote.dirs.contains("/new/images"));
    assert_eq!(remote.files["/new/report.pdf"], b"%PDF-1.4 fake report");
    assert_eq!(remote.files["/new/images/logo.png"], [0x89, 0x50]);

    let names: Vec<&str> = listing.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["images", "report.pdf"]);
}

#[test]
fn test_upload_directory_conflict_leaves_remote_untouched() {
    let mut remote = FakeRemote::new();
    remote.add_dir("/new");
    let staging_root = TempDir::new().unwrap();

    let source = TempDir::new().unwrap();
    std::fs::write(source.path().join("a.txt"), b"a").unwrap();
    let bytes = archive::pack(source.path()).unwrap();

    let result =
        transfer::upload_directory(&mut remote, "/new", &bytes, staging_root.path()).unwrap();
    assert!(result.is_none());
    assert_eq!(remote.mutations, 0);
    assert!(remote.files.is_empty());
}

#[test]
fn test_upload_corrupt_archive_rejected_before_any_transfer() {
    let mut remote = FakeRemote::new();
    let staging_root = TempDir::new().unwrap();

    let result = transfer::upload_directory(&mut remote, "/new", b"garbage", staging_root.path());
    assert!(matches!(result, Err(GatewayError::CorruptArchive(_))));
    assert_eq!(remote.mutations, 0);
    assert_eq!(std::fs::read_dir(staging_root.path()).unwrap().count(), 0);
}

#[test]
fn test_mid_walk_failure_aborts_and_cleans_staging() {
    let mut remote = FakeRemote::new();
    remote.add_dir("/big");
    for i in 0..100 {
        remote.add_file(&format!("/big/file{i:02}.dat"), &[i as u8; 64]);
    }
    remote.fail_on = Some("/big/file50.dat".to_string());
    let staging_root = TempDir::new().unwrap();

    let result = transfer::download_directory(&mut remote, "/big", staging_root.path());
    assert!(result.is_err());

    // The staging area for the failed transfer is gone
    assert_eq!(std::fs::read_dir(staging_root.path()).unwrap().count(), 0);
}

#[test]
fn test_mid_upload_failure_reports_no_listing() {
    let mut remote = FakeRemote::new();
    remote.fail_on = Some("/new/file50.dat".to_string());
    let staging_root = TempDir::new().unwrap();

    let source = TempDir::new().unwrap();
    for i in 0..100 {
        std::fs::write(source.path().join(format!("file{i:02}.dat")), [i as u8; 64]).unwrap();
    }
    let bytes = archive::pack(source.path()).unwrap();

    let result = transfer::upload_directory(&mut remote, "/new", &bytes, staging_root.path());
    assert!(result.is_err());
    assert_eq!(std::fs::read_dir(staging_root.path()).unwrap().count(), 0);
}

#[test]
fn test_directory_round_trip() {
    let mut remote = FakeRemote::new();
    seed_docs(&mut remote);
    let staging_root = TempDir::new().unwrap();

    let bytes = transfer::download_directory(&mut remote, "/docs", staging_root.path())
        .unwrap()
        .unwrap();
    transfer::upload_directory(&mut remote, "/copy", &bytes, staging_root.path())
        .unwrap()
        .unwrap();

    assert_eq!(remote.files["/copy/report.pdf"], remote.files["/docs/report.pdf"]);
    assert_eq!(
        remote.files["/copy/images/logo.png"],
        remote.files["/docs/images/logo.png"]
    );
    assert!(remote.dirs.contains("/copy/images"));
}
