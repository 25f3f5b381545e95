pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod pairing;
pub mod progress;
pub mod prune;
pub mod scanner;
pub mod utils;

pub use config::{ExtensionConfig, PruneOptions};
pub use engine::PruneEngine;
pub use error::Error;
pub use model::{DirectoryScan, FileCategory, FileRecord, ScanResult};
pub use progress::{PruneReporter, SilentReporter};
