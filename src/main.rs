//! 8-Plex Model CLI
//!
//! Applies assumption overrides to the baseline and prints the headline
//! metrics, the annual income/expense breakdown and the 12-month projection.

use anyhow::{Context, Result};
use clap::Parser;
use plex_model::assumptions::{default_baseline, AssumptionOverrides, BaselineSnapshot};
use plex_model::format::{format_currency, format_multiple, format_percentage};
use plex_model::{ScenarioResult, ScenarioRunner};
use std::fs::File;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "plex_model", version, about = "8-Plex investment metrics and cash-flow projection")]
struct Cli {
    /// Workbook export to build the baseline from (defaults to the bundled export)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Purchase price
    #[arg(long)]
    purchase_price: Option<f64>,

    /// Monthly rent for the 3 bedroom upper units
    #[arg(long)]
    upper_rent: Option<f64>,

    /// Monthly rent for the 2 bedroom lower units
    #[arg(long)]
    lower_rent: Option<f64>,

    /// Annual operating expenses (categories are rescaled proportionally)
    #[arg(long)]
    opex: Option<f64>,

    /// Annual interest rate in percent
    #[arg(long)]
    interest_rate_pct: Option<f64>,

    /// Loan-to-value in percent
    #[arg(long)]
    ltv_pct: Option<f64>,

    /// Write the monthly projection to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the full scenario as JSON instead of tables
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn overrides(&self) -> AssumptionOverrides {
        AssumptionOverrides {
            purchase_price: self.purchase_price,
            upper_rent: self.upper_rent,
            lower_rent: self.lower_rent,
            operating_expense_total: self.opex,
            interest_rate_pct: self.interest_rate_pct,
            loan_to_value_pct: self.ltv_pct,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let baseline = match &cli.data {
        Some(path) => BaselineSnapshot::from_workbook_path(path)
            .with_context(|| format!("Unable to build baseline from {}", path.display()))?,
        None => default_baseline()
            .context("Unable to build baseline from the bundled workbook")?
            .clone(),
    };

    let runner = ScenarioRunner::with_baseline(baseline);
    let result = runner.run(&cli.overrides());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result);
    }

    if let Some(path) = &cli.csv {
        let file = File::create(path).with_context(|| format!("Unable to create {}", path.display()))?;
        result.projection.write_csv(file)?;
        println!("\nMonthly projection written to: {}", path.display());
    }

    Ok(())
}

fn print_report(result: &ScenarioResult) {
    let a = &result.assumptions;
    let m = &result.metrics;

    println!("8-Plex Investment Model");
    println!("=======================\n");

    println!("Assumptions:");
    println!("  Purchase Price: {}", format_currency(a.purchase_price));
    for unit in &a.unit_mix {
        println!("  {}: {} units @ {}", unit.name, unit.units, format_currency(unit.rent));
    }
    println!("  Operating Expenses: {}", format_currency(a.annual_operating_expenses()));
    println!("  Interest Rate: {}", format_percentage(a.interest_rate));
    println!("  Loan to Value: {}", format_percentage(a.effective_loan_to_value()));
    println!("  Amortization: {} years", a.amort_years);
    println!();

    println!("Metrics:");
    println!("  {:<14} {:>14}", "NOI", format_currency(m.noi));
    println!("  {:<14} {:>14}", "Cash Flow", format_currency(m.cash_flow));
    println!("  {:<14} {:>14}", "Cash on Cash", format_percentage(m.cash_on_cash));
    println!("  {:<14} {:>14}", "DSCR", format_multiple(m.dscr));
    println!("  {:<14} {:>14}", "Cap Rate", format_percentage(m.cap_rate));
    println!();

    println!("Income vs Expense Breakdown (Annual):");
    println!("  {:<20} {:>14}", "Gross Rent", format_currency(m.gross_rent_annual));
    println!("  {:<20} {:>14}", "Other Income", format_currency(m.other_income_annual));
    println!("  {:<20} {:>14}", "Operating Expenses", format_currency(-m.operating_expenses_annual));
    println!("  {:<20} {:>14}", "Debt Service", format_currency(-m.debt_service_annual));
    println!();

    println!("Monthly Cash Flow Projection:");
    println!(
        "{:>5} {:>12} {:>12} {:>12} {:>12} {:>14}",
        "Month", "Gross Rent", "Other Inc", "OpEx", "Debt Svc", "Net Cash Flow"
    );
    println!("{}", "-".repeat(72));
    for row in &result.projection.rows {
        println!(
            "{:>5} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
            row.month,
            row.gross_rent,
            row.other_income,
            row.operating_expenses,
            row.debt_service,
            row.net_cash_flow,
        );
    }

    let summary = result.projection.summary();
    println!("{}", "-".repeat(72));
    println!(
        "{:>5} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
        "Total",
        summary.total_gross_rent,
        summary.total_other_income,
        summary.total_operating_expenses,
        summary.total_debt_service,
        summary.total_net_cash_flow,
    );
}
