use std::path::{Path, PathBuf};

const BYTES_PER_GIB: f64 = (1u64 << 30) as f64;

/// The two kinds of files the pairing cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileCategory {
    /// Rendered images. Their presence keeps a RAW file alive.
    Jpeg,
    /// Camera-native images that get pruned when nothing covers them.
    Raw,
}

/// One classified file inside a single directory.
///
/// Records only live for the duration of one directory pass. Matching between
/// records goes through [`FileRecord::matches`], which compares `base_name` loosely;
/// the derived `PartialEq` is plain structural equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub base_name: String,
    pub full_name: String,
    pub size_bytes: u64,
}

impl FileRecord {
    /// Builds a record from a file name. Returns `None` when the name has no
    /// extension separator or when the base name would be empty (`.nef`).
    pub fn new(full_name: impl Into<String>, size_bytes: u64) -> Option<Self> {
        let full_name = full_name.into();
        let (base_name, _) = split_name(&full_name)?;
        Some(Self {
            base_name: base_name.to_string(),
            full_name,
            size_bytes,
        })
    }

    /// Loose base name equivalence: equal, or either one contains the other,
    /// ignoring case. Not transitive, so never use it as a hash-set key.
    pub fn matches(&self, other: &FileRecord) -> bool {
        base_names_match(
            &self.base_name.to_lowercase(),
            &other.base_name.to_lowercase(),
        )
    }

    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.full_name)
    }
}

/// Compares two already-lowercased base names.
pub(crate) fn base_names_match(a: &str, b: &str) -> bool {
    a == b || b.contains(a) || a.contains(b)
}

/// Splits `name` at its last `.` into base name and extension.
pub(crate) fn split_name(name: &str) -> Option<(&str, &str)> {
    match name.rfind('.') {
        Some(0) | None => None,
        Some(dot) => Some((&name[..dot], &name[dot + 1..])),
    }
}

/// Outcome of pairing one directory.
#[derive(Debug, Clone, Default)]
pub struct DirectoryScan {
    pub dir: PathBuf,
    pub jpegs: Vec<FileRecord>,
    pub raws: Vec<FileRecord>,
    pub orphans: Vec<FileRecord>,
}

impl DirectoryScan {
    pub fn orphan_bytes(&self) -> u64 {
        self.orphans.iter().map(|r| r.size_bytes).sum()
    }
}

/// Totals for a whole run, carried from one directory to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub deleted_count: usize,
    pub total_bytes_freed: u64,
    pub directories_scanned: usize,
    pub orphans_found: usize,
}

impl ScanResult {
    pub fn total_gib(&self) -> f64 {
        self.total_bytes_freed as f64 / BYTES_PER_GIB
    }
}
