use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Walking the tree, listing a directory or reading an entry's metadata failed.
    #[error("Error enumerating {}", path.display())]
    Enumeration {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Removing an orphaned RAW file failed.
    #[error("Error deleting {}", path.display())]
    Deletion {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// The file or directory the failed operation was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Error::Enumeration { path, .. } | Error::Deletion { path, .. } => path,
        }
    }
}
