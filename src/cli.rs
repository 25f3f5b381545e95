use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)] // requires `derive` feature
#[command(name = "raw-pruner")]
#[command(about = "Prune RAW files that have no matching JPEG", long_about = None)]
pub struct Cli {
    /// Directory to scan
    #[arg(short, long, default_value = ".")]
    pub target: PathBuf,

    /// Also scan every non-hidden subdirectory
    #[arg(short, long)]
    pub recursive: bool,

    /// Delete orphaned RAW files instead of only listing them
    #[arg(short, long)]
    pub delete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_dry_run_in_current_dir() {
        let cli = Cli::parse_from(["raw-pruner"]);
        assert_eq!(cli.target, PathBuf::from("."));
        assert!(!cli.recursive);
        assert!(!cli.delete);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from(["raw-pruner", "-t", "/photos", "-r", "-d"]);
        assert_eq!(cli.target, PathBuf::from("/photos"));
        assert!(cli.recursive);
        assert!(cli.delete);
    }
}
