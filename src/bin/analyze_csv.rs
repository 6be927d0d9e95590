//! Summarize a financial CSV and optionally total a value column by group

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use findash::report::format_usd;
use findash::{aggregate, load_table_from_path, summarize};

#[derive(Parser, Debug)]
#[command(
    name = "analyze_csv",
    about = "Descriptive statistics and group totals for a CSV file"
)]
struct Args {
    /// CSV file to analyze
    csv: PathBuf,

    /// Column to group by
    #[arg(long, requires = "value")]
    group: Option<String>,

    /// Numeric column to total per group
    #[arg(long, requires = "group")]
    value: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let table = load_table_from_path(&args.csv)?;
    println!("{} rows x {} columns", table.n_rows(), table.n_cols());

    let summaries = summarize(&table);
    if summaries.is_empty() {
        println!("No numeric columns found.");
    } else {
        println!(
            "\n{:<20} {:>8} {:>14} {:>14} {:>14} {:>14}",
            "Column", "Count", "Mean", "Std", "Min", "Max"
        );
        for s in &summaries {
            println!(
                "{:<20} {:>8} {:>14.2} {:>14.2} {:>14.2} {:>14.2}",
                s.column, s.count, s.mean, s.std_dev, s.min, s.max
            );
        }
    }

    if let (Some(group), Some(value)) = (&args.group, &args.value) {
        let totals = aggregate(&table, group, value)?;

        println!("\nTotal {value} by {group}:");
        for row in &totals {
            println!("{:<20} {:>18}", row.group, format_usd(row.total));
        }
    }

    Ok(())
}
