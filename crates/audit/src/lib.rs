//! Append-only plaintext action log.
//!
//! Every user-visible action (page loads, uploads, searches, clicks, cart
//! adds) appends one human-readable line to a log file. The sink is
//! best-effort by contract: a failed write is reported on the tracing
//! diagnostic channel and never propagates to the request that triggered it.

use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;

const HEADER: &str = "Application Log:";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The kinds of user actions the storefront records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    PageLoaded,
    ProductsReordered,
    Search,
    ProductClicked,
    AddedToCart,
    CatalogUploaded,
    UploadRejected,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::PageLoaded => "Page Loaded",
            ActionKind::ProductsReordered => "Products reordered",
            ActionKind::Search => "Search",
            ActionKind::ProductClicked => "Product Clicked",
            ActionKind::AddedToCart => "Added to Cart",
            ActionKind::CatalogUploaded => "Catalog Uploaded",
            ActionKind::UploadRejected => "Upload Rejected",
        }
    }
}

/// Handle to the append-only log file.
///
/// The file is opened per append so a sink that was unavailable at startup
/// can recover later; the mutex keeps concurrent appends whole-line atomic.
#[derive(Debug)]
pub struct AuditLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl AuditLog {
    /// Create a handle for `path`, writing the log header if the file does
    /// not exist yet. Never fails: an unwritable path degrades to warnings.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let log = Self {
            path: path.into(),
            lock: Mutex::new(()),
        };
        if !log.path.exists() {
            if let Err(e) = log.append(HEADER) {
                tracing::warn!(path = %log.path.display(), error = %e, "could not initialize audit log");
            }
        }
        log
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one action line:
    /// `[ts] Action: <kind>[, Product: <title>][, Profile: <id>][, Message: <note>]`.
    pub fn record(
        &self,
        kind: ActionKind,
        product: Option<&str>,
        profile: Option<&str>,
        note: Option<&str>,
    ) {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let mut entry = format!("[{timestamp}] Action: {}", kind.as_str());
        if let Some(title) = product {
            let _ = write!(entry, ", Product: {title}");
        }
        if let Some(id) = profile {
            let _ = write!(entry, ", Profile: {id}");
        }
        if let Some(message) = note {
            let _ = write!(entry, ", Message: {message}");
        }

        tracing::debug!(audit = %entry);
        if let Err(e) = self.append(&entry) {
            tracing::warn!(path = %self.path.display(), error = %e, "audit log write failed");
        }
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_lines(path: &Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn new_file_starts_with_header() {
        let dir = tempfile::tempdir().unwrap();
        let log = AuditLog::new(dir.path().join("log.txt"));
        assert_eq!(read_lines(log.path()), [HEADER]);
    }

    #[test]
    fn existing_file_is_appended_not_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        std::fs::write(&path, "Application Log:\nold entry\n").unwrap();

        let log = AuditLog::new(&path);
        log.record(ActionKind::PageLoaded, None, None, None);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "old entry");
    }

    #[test]
    fn record_formats_all_optional_parts_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let log = AuditLog::new(dir.path().join("log.txt"));
        log.record(
            ActionKind::AddedToCart,
            Some("Desk Lamp"),
            Some("casual_user"),
            Some("qty 1"),
        );

        let line = read_lines(log.path()).pop().unwrap();
        assert!(line.starts_with('['));
        assert!(line.ends_with(
            "] Action: Added to Cart, Product: Desk Lamp, Profile: casual_user, Message: qty 1"
        ));
    }

    #[test]
    fn record_omits_absent_parts() {
        let dir = tempfile::tempdir().unwrap();
        let log = AuditLog::new(dir.path().join("log.txt"));
        log.record(ActionKind::Search, None, None, Some("coffee"));

        let line = read_lines(log.path()).pop().unwrap();
        assert!(line.contains("Action: Search, Message: coffee"));
        assert!(!line.contains("Product:"));
        assert!(!line.contains("Profile:"));
    }

    #[test]
    fn unwritable_path_does_not_panic() {
        let log = AuditLog::new("/nonexistent-dir/log.txt");
        log.record(ActionKind::PageLoaded, None, None, None);
    }

    #[test]
    fn timestamp_has_expected_shape() {
        let dir = tempfile::tempdir().unwrap();
        let log = AuditLog::new(dir.path().join("log.txt"));
        log.record(ActionKind::PageLoaded, None, None, None);

        let line = read_lines(log.path()).pop().unwrap();
        // "[YYYY-MM-DD HH:MM:SS]" prefix.
        let stamp = &line[1..20];
        assert_eq!(stamp.len(), 19);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[10..11], " ");
        assert_eq!(&stamp[13..14], ":");
    }
}
