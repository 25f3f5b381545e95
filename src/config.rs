use crate::model::{split_name, FileCategory};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

pub const DEFAULT_JPEG_EXTENSIONS: &[&str] = &["jpg", "jpeg"];
pub const DEFAULT_RAW_EXTENSIONS: &[&str] = &["nef", "raw"];

/// Which lowercase extensions belong to which [`FileCategory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionConfig {
    categories: BTreeMap<FileCategory, BTreeSet<String>>,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self::empty()
            .with_extensions(FileCategory::Jpeg, DEFAULT_JPEG_EXTENSIONS)
            .with_extensions(FileCategory::Raw, DEFAULT_RAW_EXTENSIONS)
    }
}

impl ExtensionConfig {
    pub fn empty() -> Self {
        Self {
            categories: BTreeMap::new(),
        }
    }

    /// Registers extensions for `category`. Leading dots and case are ignored.
    pub fn with_extensions<I, S>(mut self, category: FileCategory, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = self.categories.entry(category).or_default();
        for ext in extensions {
            let ext = ext.as_ref().trim_start_matches('.').to_lowercase();
            if !ext.is_empty() {
                set.insert(ext);
            }
        }
        self
    }

    pub fn extensions(&self, category: FileCategory) -> impl Iterator<Item = &str> {
        self.categories
            .get(&category)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Classifies a file name by its final extension. `Jpeg` is checked first,
    /// so an extension listed under both categories is never pruned.
    pub fn classify(&self, file_name: &str) -> Option<FileCategory> {
        let (_, ext) = split_name(file_name)?;
        let ext = ext.to_lowercase();
        self.categories
            .iter()
            .find(|(_, set)| set.contains(&ext))
            .map(|(category, _)| *category)
    }
}

/// Everything one run needs to know.
#[derive(Debug, Clone)]
pub struct PruneOptions {
    pub target: PathBuf,
    pub recursive: bool,
    pub delete: bool,
    pub extensions: ExtensionConfig,
}

impl PruneOptions {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            recursive: false,
            delete: false,
            extensions: ExtensionConfig::default(),
        }
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn delete(mut self, delete: bool) -> Self {
        self.delete = delete;
        self
    }

    pub fn with_extensions(mut self, extensions: ExtensionConfig) -> Self {
        self.extensions = extensions;
        self
    }
}
