mod cli;
mod logging;
mod reporter;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use colored::*;
use dotenv::dotenv;
use raw_pruner::utils::StatsTimer;
use raw_pruner::{PruneEngine, PruneOptions, ScanResult};
use reporter::CliReporter;
use std::process;
use tracing::{debug, error};

fn main() {
    dotenv().ok();

    let _guard = logging::init_logger();

    let args = Cli::parse();

    if let Err(err) = run_prune(&args) {
        error!("Error: {:#}", err);
        eprintln!("{}", failure_message(&err));
        process::exit(1);
    }
}

fn run_prune(args: &Cli) -> anyhow::Result<()> {
    let mut timer = StatsTimer::new();

    let options = PruneOptions::new(&args.target)
        .recursive(args.recursive)
        .delete(args.delete);
    let engine = PruneEngine::new(options);
    let result = engine
        .run(&CliReporter)
        .with_context(|| format!("Pruning {} failed", args.target.display()))?;

    timer.finish();
    debug!("Run took {}", timer.get_duration_human());
    print_summary(&result, args.delete, timer.get_duration_secs());

    Ok(())
}

fn print_summary(result: &ScanResult, delete: bool, elapsed_secs: f64) {
    let (verb, count) = if delete {
        ("Pruned", result.deleted_count)
    } else {
        ("Would prune", result.orphans_found)
    };
    println!(
        "{} {} files: {} GiB in {} seconds",
        verb,
        count.to_string().red(),
        format!("{:.3}", result.total_gib()).green(),
        format!("{:.2}", elapsed_secs).green(),
    );
}

/// Printed directly so a failed run explains itself even with logging turned off.
fn failure_message(err: &anyhow::Error) -> String {
    format!("{} {:#}", "error:".red().bold(), err)
}
