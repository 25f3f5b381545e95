pub mod stats;

pub use stats::StatsTimer;
