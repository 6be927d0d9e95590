//! Project revenue forward under a compound annual growth assumption
//!
//! Prints the year-by-year series, optionally runs a growth-rate
//! sensitivity sweep, and optionally writes the series as CSV.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use findash::projection::{
    ProjectionRequest, ProjectionResult, DEFAULT_GROWTH_RATE_PCT, DEFAULT_HORIZON_YEARS,
    DEFAULT_STARTING_VALUE,
};
use findash::report::format_usd;
use findash::scenario;

#[derive(Parser, Debug)]
#[command(name = "project_revenue", about = "Compound-growth revenue projection")]
struct Args {
    /// Current annual revenue in dollars
    #[arg(long, default_value_t = DEFAULT_STARTING_VALUE)]
    revenue: f64,

    /// Expected annual growth rate in percent
    #[arg(long, default_value_t = DEFAULT_GROWTH_RATE_PCT)]
    growth: f64,

    /// Years to project
    #[arg(long, default_value_t = DEFAULT_HORIZON_YEARS)]
    years: u32,

    /// Read the request from a JSON file instead of the flags above
    #[arg(long)]
    params: Option<PathBuf>,

    /// Comma-separated growth rates to project as a sensitivity sweep
    #[arg(long, value_delimiter = ',')]
    sweep: Vec<f64>,

    /// Write the projected series to this CSV path
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let request = match &args.params {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            serde_json::from_reader(file)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => ProjectionRequest {
            starting_value: args.revenue,
            annual_growth_rate_pct: args.growth,
            horizon_years: args.years,
        },
    };

    let result = request.project()?;

    println!(
        "Projected revenue at {}% annual growth:",
        request.annual_growth_rate_pct
    );
    println!("{:<6} {:>18}", "Year", "Revenue");
    for point in &result.points {
        println!("{:<6} {:>18}", point.year, format_usd(point.value));
    }

    if !args.sweep.is_empty() {
        let requests = scenario::rate_sweep(&request, &args.sweep);
        let results = scenario::run_all(&requests)?;

        println!("\nSensitivity sweep (year {} revenue):", request.horizon_years);
        for swept in &results {
            let last = swept.final_value().unwrap_or(request.starting_value);
            println!(
                "{:>7.2}%  {:>18}",
                swept.request.annual_growth_rate_pct,
                format_usd(last)
            );
        }
    }

    if let Some(path) = &args.output {
        write_series(path, &result)?;
        println!("\nOutput written to {}", path.display());
    }

    Ok(())
}

fn write_series(path: &Path, result: &ProjectionResult) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record(["Year", "ProjectedRevenue"])?;
    for point in &result.points {
        writer.write_record([point.year.to_string(), format!("{:.2}", point.value)])?;
    }
    writer.flush()?;
    Ok(())
}
