//! Sweep interest rate and rent changes around the baseline
//!
//! Writes one CSV row per (rate, rent change) combination with the headline
//! metrics, and prints a cash-flow grid to the console.

use anyhow::{Context, Result};
use clap::Parser;
use plex_model::format::format_currency;
use plex_model::{BaselineSnapshot, ScenarioRunner};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "sensitivity", about = "Interest rate x rent sensitivity grid")]
struct Cli {
    /// Workbook export to build the baseline from
    #[arg(long, default_value = plex_model::reference::DEFAULT_WORKBOOK_PATH)]
    data: PathBuf,

    /// Lowest interest rate in percent
    #[arg(long, default_value_t = 2.0)]
    min_rate_pct: f64,

    /// Highest interest rate in percent
    #[arg(long, default_value_t = 7.0)]
    max_rate_pct: f64,

    /// Interest rate step in percent
    #[arg(long, default_value_t = 0.5)]
    rate_step_pct: f64,

    /// Rent changes to apply to every unit, in percent
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, default_values_t = [-10.0, -5.0, 0.0, 5.0, 10.0])]
    rent_changes_pct: Vec<f64>,

    /// Output CSV path
    #[arg(long, default_value = "sensitivity_output.csv")]
    output: PathBuf,
}

fn rate_steps(min: f64, max: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || max < min {
        return vec![min];
    }
    let count = ((max - min) / step + 1e-9).floor() as usize + 1;
    (0..count).map(|i| min + step * i as f64).collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let baseline = BaselineSnapshot::from_workbook_path(&cli.data)
        .with_context(|| format!("Unable to build baseline from {}", cli.data.display()))?;
    let runner = ScenarioRunner::with_baseline(baseline);

    let rates = rate_steps(cli.min_rate_pct, cli.max_rate_pct, cli.rate_step_pct);
    println!(
        "Running {} scenarios ({} rates x {} rent changes)...",
        rates.len() * cli.rent_changes_pct.len(),
        rates.len(),
        cli.rent_changes_pct.len()
    );

    let start = Instant::now();
    let grid = runner.sensitivity_grid(&rates, &cli.rent_changes_pct);
    println!("Completed in {:?}\n", start.elapsed());

    // Console grid of annual cash flow
    print!("{:>8}", "Rate %");
    for change in &cli.rent_changes_pct {
        print!(" {:>12}", format!("rent {:+}%", change));
    }
    println!();
    for row in grid.chunks(cli.rent_changes_pct.len().max(1)) {
        print!("{:>8.2}", row[0].interest_rate_pct);
        for point in row {
            print!(" {:>12}", format_currency(point.metrics.cash_flow));
        }
        println!();
    }

    let mut file = File::create(&cli.output)
        .with_context(|| format!("Unable to create {}", cli.output.display()))?;
    writeln!(file, "InterestRatePct,RentChangePct,NOI,CashFlow,CashOnCash,DSCR,CapRate,DebtServiceAnnual")?;
    for point in &grid {
        let m = &point.metrics;
        writeln!(
            file,
            "{:.4},{:.4},{:.2},{:.2},{:.8},{:.8},{:.8},{:.2}",
            point.interest_rate_pct,
            point.rent_change_pct,
            m.noi,
            m.cash_flow,
            m.cash_on_cash,
            m.dscr,
            m.cap_rate,
            m.debt_service_annual,
        )?;
    }

    println!("\nFull results written to: {}", cli.output.display());
    Ok(())
}
