use crate::error::Error;
use crate::model::{FileRecord, ScanResult};
use crate::progress::PruneReporter;
use std::fs;
use std::path::Path;
use tracing::info;

/// Deletes (or, without `delete`, only reports) every orphan of `dir`, adding to
/// `totals` as it goes.
///
/// The first failed removal stops the pass. Whatever was already counted stays in
/// `totals`, since those files are gone.
pub fn execute(
    dir: &Path,
    orphans: &[FileRecord],
    delete: bool,
    totals: &mut ScanResult,
    reporter: &dyn PruneReporter,
) -> Result<(), Error> {
    for orphan in orphans {
        let path = orphan.path_in(dir);

        if delete {
            fs::remove_file(&path).map_err(|source| Error::Deletion {
                path: path.clone(),
                source,
            })?;
            totals.deleted_count += 1;
            totals.orphans_found += 1;
            totals.total_bytes_freed += orphan.size_bytes;
            info!("Deleted {} ({} bytes)", path.display(), orphan.size_bytes);
            reporter.on_orphan_deleted(&path, orphan, totals);
        } else {
            totals.orphans_found += 1;
            totals.total_bytes_freed += orphan.size_bytes;
            reporter.on_orphan_reported(&path, orphan, totals);
        }
    }

    Ok(())
}
