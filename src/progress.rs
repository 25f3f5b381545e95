use crate::model::{DirectoryScan, FileRecord, ScanResult};
use std::path::Path;

/// Trait for observing a prune run.
///
/// The core never prints; the CLI implements this with colored console output and
/// tests implement it to record what happened. All methods default to no-ops.
pub trait PruneReporter: Send + Sync {
    fn on_directory_start(&self, _dir: &Path) {}
    fn on_directory_scanned(&self, _scan: &DirectoryScan) {}
    /// Dry run: `path` would be deleted. `totals` already include it.
    fn on_orphan_reported(&self, _path: &Path, _record: &FileRecord, _totals: &ScanResult) {}
    /// Delete mode: `path` was removed. `totals` already include it.
    fn on_orphan_deleted(&self, _path: &Path, _record: &FileRecord, _totals: &ScanResult) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl PruneReporter for SilentReporter {}
