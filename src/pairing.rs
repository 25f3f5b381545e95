use crate::config::ExtensionConfig;
use crate::error::Error;
use crate::model::{base_names_match, DirectoryScan, FileCategory, FileRecord};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Lists `dir` (not its subdirectories), classifies its files and works out which
/// RAW files have no covering JPEG.
pub fn scan_directory(dir: &Path, extensions: &ExtensionConfig) -> Result<DirectoryScan, Error> {
    let listing_error = |source| Error::Enumeration {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir)
        .map_err(listing_error)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(listing_error)?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut scan = DirectoryScan {
        dir: dir.to_path_buf(),
        ..Default::default()
    };

    for entry in entries {
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            warn!("Skipping non UTF-8 file name {:?} in {}", file_name, dir.display());
            continue;
        };
        let Some(category) = extensions.classify(name) else {
            continue;
        };

        let path = entry.path();
        let metadata = fs::metadata(&path).map_err(|source| Error::Enumeration {
            path: path.clone(),
            source,
        })?;
        if !metadata.is_file() {
            continue;
        }

        let Some(record) = FileRecord::new(name, metadata.len()) else {
            continue;
        };
        match category {
            FileCategory::Jpeg => scan.jpegs.push(record),
            FileCategory::Raw => scan.raws.push(record),
        }
    }

    scan.orphans = find_orphans(&scan.raws, &scan.jpegs);
    debug!(
        "{}: {} jpegs, {} raws, {} orphans",
        dir.display(),
        scan.jpegs.len(),
        scan.raws.len(),
        scan.orphans.len()
    );
    Ok(scan)
}

/// RAW records that no JPEG covers, in their original order.
pub fn find_orphans(raws: &[FileRecord], jpegs: &[FileRecord]) -> Vec<FileRecord> {
    raws.iter()
        .filter(|raw| !is_covered(raw, jpegs))
        .cloned()
        .collect()
}

/// True when at least one JPEG's base name equals, contains, or is contained in the
/// RAW's base name (case-insensitive). Every candidate is checked in turn since the
/// relation is not transitive.
pub fn is_covered(raw: &FileRecord, jpegs: &[FileRecord]) -> bool {
    let raw_base = raw.base_name.to_lowercase();
    jpegs
        .iter()
        .any(|jpeg| base_names_match(&raw_base, &jpeg.base_name.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn records(names: &[&str]) -> Vec<FileRecord> {
        names
            .iter()
            .map(|name| FileRecord::new(*name, 1).unwrap())
            .collect()
    }

    fn names(records: &[FileRecord]) -> Vec<&str> {
        records.iter().map(|r| r.full_name.as_str()).collect()
    }

    #[test]
    fn test_is_covered_by_any_candidate() {
        let jpegs = records(&["DSC_0002.jpg", "IMG_01_edit.jpg"]);
        assert!(is_covered(&records(&["IMG_01.raw"])[0], &jpegs));
        assert!(is_covered(&records(&["dsc_0002.NEF"])[0], &jpegs));
        assert!(!is_covered(&records(&["IMG_02.raw"])[0], &jpegs));
    }

    #[test]
    fn test_nothing_covers_without_jpegs() {
        let raws = records(&["a.nef", "b.raw"]);
        assert_eq!(find_orphans(&raws, &[]), raws);
    }

    #[test]
    fn test_find_orphans_keeps_order() {
        let raws = records(&["C.raw", "A.raw", "B.nef"]);
        let jpegs = records(&["A.jpg"]);
        assert_eq!(names(&find_orphans(&raws, &jpegs)), ["C.raw", "B.nef"]);
    }

    #[test]
    fn test_scan_directory_classifies_and_pairs() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path();
        fs::write(dir.join("A.raw"), b"aaaa").unwrap();
        fs::write(dir.join("B.raw"), b"bbbbbb").unwrap();
        fs::write(dir.join("A.jpg"), b"j").unwrap();
        fs::write(dir.join("notes.txt"), b"ignored").unwrap();
        fs::write(dir.join("README"), b"ignored").unwrap();
        fs::create_dir(dir.join("folder.nef")).unwrap();

        let scan = scan_directory(dir, &ExtensionConfig::default()).unwrap();

        assert_eq!(names(&scan.jpegs), ["A.jpg"]);
        assert_eq!(names(&scan.raws), ["A.raw", "B.raw"]);
        assert_eq!(names(&scan.orphans), ["B.raw"]);
        assert_eq!(scan.orphans[0].size_bytes, 6);
        assert_eq!(scan.orphan_bytes(), 6);
    }

    #[test]
    fn test_scan_empty_directory() {
        let tmp = tempdir().unwrap();
        let scan = scan_directory(tmp.path(), &ExtensionConfig::default()).unwrap();
        assert!(scan.jpegs.is_empty());
        assert!(scan.raws.is_empty());
        assert!(scan.orphans.is_empty());
    }

    #[test]
    fn test_dot_file_does_not_cover_everything() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join(".jpg"), b"j").unwrap();
        fs::write(tmp.path().join("shot.nef"), b"r").unwrap();

        let scan = scan_directory(tmp.path(), &ExtensionConfig::default()).unwrap();

        assert!(scan.jpegs.is_empty());
        assert_eq!(names(&scan.orphans), ["shot.nef"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_names_the_entry() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path();
        fs::write(dir.join("x.jpg"), b"j").unwrap();
        let link = dir.join("x.nef");
        std::os::unix::fs::symlink(dir.join("missing.nef"), &link).unwrap();

        let err = scan_directory(dir, &ExtensionConfig::default()).unwrap_err();

        assert!(matches!(err, Error::Enumeration { .. }));
        assert_eq!(err.path(), link.as_path());
    }

    #[test]
    fn test_scan_missing_directory_names_it() {
        let tmp = tempdir().unwrap();
        let missing = tmp.path().join("gone");

        let err = scan_directory(&missing, &ExtensionConfig::default()).unwrap_err();

        assert!(matches!(err, Error::Enumeration { .. }));
        assert_eq!(err.path(), missing.as_path());
    }
}
