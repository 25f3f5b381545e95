use crate::config::PruneOptions;
use crate::error::Error;
use crate::model::{FileCategory, ScanResult};
use crate::pairing;
use crate::progress::PruneReporter;
use crate::prune;
use crate::scanner;
use tracing::{debug, info};

pub struct PruneEngine {
    options: PruneOptions,
}

impl PruneEngine {
    pub fn new(options: PruneOptions) -> Self {
        Self { options }
    }

    /// Run the full prune pipeline:
    /// 1. Enumerate directories (just the target, or the non-hidden tree)
    /// 2. Pair RAW files with JPEGs one directory at a time
    /// 3. Delete or report the orphans, accumulating totals
    pub fn run(&self, reporter: &dyn PruneReporter) -> Result<ScanResult, Error> {
        let options = &self.options;
        info!(
            "Pruning {} (recursive: {}, delete: {})",
            options.target.display(),
            options.recursive,
            options.delete
        );
        debug!(
            "Keeping {:?}, pruning {:?}",
            options.extensions.extensions(FileCategory::Jpeg).collect::<Vec<_>>(),
            options.extensions.extensions(FileCategory::Raw).collect::<Vec<_>>()
        );

        let dirs = scanner::directories_to_scan(&options.target, options.recursive)?;
        let mut totals = ScanResult::default();

        for dir in &dirs {
            reporter.on_directory_start(dir);
            let scan = pairing::scan_directory(dir, &options.extensions)?;
            reporter.on_directory_scanned(&scan);
            prune::execute(dir, &scan.orphans, options.delete, &mut totals, reporter)?;
            totals.directories_scanned += 1;
        }

        debug!(
            "Run complete: {} directories, {} orphans, {} deleted, {} bytes",
            totals.directories_scanned,
            totals.orphans_found,
            totals.deleted_count,
            totals.total_bytes_freed
        );
        Ok(totals)
    }
}
