//! Helpers for slash-delimited remote FTP paths
//!
//! Remote paths are plain strings split on `/` — they are never mapped
//! through [`std::path::Path`], which would apply platform separator rules.

/// Return the final segment of a slash-delimited remote path
///
/// Splits on `/` and returns the last segment. A path without any `/`
/// is returned unchanged. A trailing `/` yields an empty string; callers
/// that use the basename for naming must tolerate that (the FTP server
/// accepted the path either way, so the ambiguity is preserved here
/// rather than second-guessed).
///
/// # Example
///
/// ```
/// use ferry_common::remote_path::basename;
///
/// assert_eq!(basename("/docs/report.txt"), "report.txt");
/// assert_eq!(basename("report.txt"), "report.txt");
/// assert_eq!(basename("/docs/"), "");
/// ```
#[must_use]
pub fn basename(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some((_, last)) => last,
        None => path,
    }
}

/// Join a child name onto a remote parent path
///
/// Produces `parent/name` without doubling the separator when the parent
/// already ends in `/` (e.g. the FTP root `/`).
#[must_use]
pub fn join(parent: &str, name: &str) -> String {
    if parent.ends_with('/') {
        format!("{parent}{name}")
    } else {
        format!("{parent}/{name}")
    }
}
