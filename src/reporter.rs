use colored::*;
use raw_pruner::{DirectoryScan, FileRecord, PruneReporter, ScanResult};
use std::path::Path;

/// Console reporter: one block per directory, one line per orphan.
pub struct CliReporter;

impl PruneReporter for CliReporter {
    fn on_directory_start(&self, dir: &Path) {
        println!("Searching for files in: {}", dir.display().to_string().cyan());
    }

    fn on_directory_scanned(&self, scan: &DirectoryScan) {
        if scan.orphans.is_empty() {
            return;
        }
        println!("Found {} jpgs", scan.jpegs.len());
        println!("Found {} raws", scan.raws.len());
        println!(
            "Found {} files to delete ({} bytes)",
            scan.orphans.len().to_string().red(),
            scan.orphan_bytes()
        );
    }

    fn on_orphan_reported(&self, _path: &Path, record: &FileRecord, _totals: &ScanResult) {
        println!("Found: {} to delete", record.full_name.yellow());
    }

    fn on_orphan_deleted(&self, path: &Path, _record: &FileRecord, _totals: &ScanResult) {
        println!("Deleted file: {}", path.display().to_string().red());
    }
}
