//! Compare the engine's baseline metrics against the outputs stored in the workbook
//!
//! Usage: cargo run --bin compare_workbook -- [--data PATH]

use anyhow::{bail, Context, Result};
use clap::Parser;
use plex_model::conformance::{compare, ABSOLUTE_TOLERANCE, RELATIVE_TOLERANCE};
use plex_model::{calculate_metrics, BaselineSnapshot, Workbook};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "compare_workbook", about = "Check baseline metrics against stored workbook outputs")]
struct Cli {
    /// Workbook export to check
    #[arg(long, default_value = plex_model::reference::DEFAULT_WORKBOOK_PATH)]
    data: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let workbook = Workbook::load_from(&cli.data)
        .with_context(|| format!("Unable to load {}", cli.data.display()))?;
    let baseline = BaselineSnapshot::from_source(&workbook).context("Unable to build baseline")?;
    let metrics = calculate_metrics(baseline.assumptions());

    println!("Workbook: {}", cli.data.display());
    println!(
        "Implied interest rate: {:.6}% (tolerance rel {:e}, abs {:e})\n",
        baseline.assumptions().interest_rate * 100.0,
        RELATIVE_TOLERANCE,
        ABSOLUTE_TOLERANCE
    );
    println!(
        "{:<14} {:>10} {:>18} {:>18} {:>14} {:>6}",
        "Metric", "Cell", "Workbook", "Engine", "Diff", "OK"
    );
    println!("{}", "-".repeat(85));

    let checks = compare(&metrics, &workbook);
    for check in &checks {
        println!(
            "{:<14} {:>10} {:>18} {:>18.8} {:>14} {:>6}",
            check.metric,
            check.cell,
            check.expected.map_or("(empty)".to_string(), |v| format!("{:.8}", v)),
            check.actual,
            check.difference().map_or("-".to_string(), |d| format!("{:.2e}", d)),
            if check.within_tolerance() { "yes" } else { "NO" },
        );
    }

    let failures = checks.iter().filter(|c| !c.within_tolerance()).count();
    if failures > 0 {
        bail!("{} of {} metrics outside tolerance", failures, checks.len());
    }
    println!("\nAll {} metrics match the workbook.", checks.len());
    Ok(())
}
