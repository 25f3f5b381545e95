pub mod walk;

pub use walk::{directories_to_scan, is_hidden_name};
