//! Household Projection CLI
//!
//! Command-line interface for projecting a household scenario

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use log::info;

use household_projection::export::save_projection_csv;
use household_projection::scenario::{load_scenario, Scenario};
use household_projection::Horizon;

/// Project net worth and cash flow for a household scenario
#[derive(Debug, Parser)]
#[command(name = "household_projection", version)]
struct Args {
    /// Scenario JSON file; the built-in sample household when omitted
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// First projected year (overrides the scenario horizon)
    #[arg(long)]
    start_year: Option<i32>,

    /// Last projected year (overrides the scenario horizon)
    #[arg(long)]
    end_year: Option<i32>,

    /// Annual inflation rate for real-terms figures, e.g. 0.025
    #[arg(long)]
    inflation: Option<f64>,

    /// CSV output path
    #[arg(short, long, default_value = "household_projection.csv")]
    output: PathBuf,

    /// Number of years to print to the console
    #[arg(long, default_value_t = 15)]
    rows: usize,
}

fn resolve_horizon(args: &Args, scenario: &Scenario) -> Horizon {
    let current_year = chrono::Local::now().year();
    let base = scenario
        .horizon
        .unwrap_or_else(|| Horizon::new(current_year, current_year + 30));

    Horizon::new(
        args.start_year.unwrap_or(base.start_year),
        args.end_year.unwrap_or(base.end_year),
    )
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Household Projection v{}", env!("CARGO_PKG_VERSION"));
    println!("=========================\n");

    let mut scenario = match &args.scenario {
        Some(path) => load_scenario(path)
            .with_context(|| format!("failed to load scenario {}", path.display()))?,
        None => Scenario::sample_household(),
    };
    if let Some(rate) = args.inflation {
        scenario.model.set_inflation(rate);
    }

    let horizon = resolve_horizon(&args, &scenario);
    info!("Running '{}' over {}-{}", scenario.name, horizon.start_year, horizon.end_year);

    println!("Scenario: {}", scenario.name);
    println!("  Assets: {}", scenario.model.balance_sheet.assets.len());
    println!("  Liabilities: {}", scenario.model.balance_sheet.liabilities.len());
    println!("  Incomes: {}", scenario.model.cash_flow.incomes.len());
    println!("  Expenses: {}", scenario.model.cash_flow.expenses.len());
    println!("  Life events: {}", scenario.model.events.len());
    println!();

    let output = scenario.model.run(horizon).context("projection failed")?;

    println!("Projection Results ({} years):", output.balance_sheet.len());
    println!(
        "{:>5} {:>16} {:>16} {:>16} {:>14} {:>14} {:>14}",
        "Year", "Assets", "Liabilities", "Net Worth", "Inflow", "Outflow", "Net Flow"
    );
    println!("{}", "-".repeat(101));

    for row in output.combined_rows().iter().take(args.rows) {
        println!(
            "{:>5} {:>16.2} {:>16.2} {:>16.2} {:>14.2} {:>14.2} {:>14.2}",
            row.year,
            row.total_assets,
            row.total_liabilities,
            row.net_worth,
            row.inflow,
            row.outflow,
            row.net_flow,
        );
    }
    if output.balance_sheet.len() > args.rows {
        println!("... ({} more years)", output.balance_sheet.len() - args.rows);
    }

    if !output.events.is_empty() {
        println!("\nLife events:");
        for (year, name) in output.event_years() {
            println!("  {}: {}", year, name);
        }
    }

    save_projection_csv(&output, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    println!("\nFull results written to: {}", args.output.display());

    let summary = output.summary();
    println!("\nSummary:");
    println!("  Total Years: {}", summary.total_years);
    println!("  Final Net Worth: ${:.2}", summary.final_net_worth);
    println!("  Peak Net Worth: ${:.2} ({})", summary.peak_net_worth, summary.peak_net_worth_year);
    println!("  Cumulative Net Cash Flow: ${:.2}", summary.cumulative_net_flow);
    match summary.first_deficit_year {
        Some(year) => println!("  First Cash Flow Deficit: {}", year),
        None => println!("  First Cash Flow Deficit: none"),
    }

    Ok(())
}
