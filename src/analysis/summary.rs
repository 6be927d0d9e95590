//! Per-column descriptive statistics
//!
//! Mirrors the count/mean/std/quartile summary a data-frame `describe()`
//! produces for the numeric columns of an uploaded file.

use serde::Serialize;

use crate::table::{Cell, Table};

/// Descriptive statistics for one numeric column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    /// Number of numeric cells; blank cells are not counted
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator); 0.0 for a single value
    pub std_dev: f64,
    pub min: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub max: f64,
}

/// Summarize every numeric column of `table`.
///
/// A column qualifies when every non-blank cell is a number and at least one
/// such cell exists. Text columns are skipped rather than rejected, so the
/// summary of a mixed table covers exactly its numeric part.
pub fn summarize(table: &Table) -> Vec<ColumnSummary> {
    let mut summaries = Vec::new();

    'columns: for (idx, name) in table.headers().iter().enumerate() {
        let mut values = Vec::with_capacity(table.n_rows());
        for row in table.rows() {
            match &row[idx] {
                Cell::Number(n) => values.push(*n),
                cell if cell.is_blank() => continue,
                Cell::Text(_) => continue 'columns,
            }
        }
        if values.is_empty() {
            continue;
        }
        summaries.push(summarize_column(name, values));
    }

    summaries
}

fn summarize_column(name: &str, mut values: Vec<f64>) -> ColumnSummary {
    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;

    let std_dev = if count > 1 {
        let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (sum_sq / (count - 1) as f64).sqrt()
    } else {
        0.0
    };

    values.sort_by(f64::total_cmp);

    ColumnSummary {
        column: name.to_string(),
        count,
        mean,
        std_dev,
        min: values[0],
        p25: percentile(&values, 0.25),
        median: percentile(&values, 0.50),
        p75: percentile(&values, 0.75),
        max: values[count - 1],
    }
}

/// Linear interpolation between the two nearest order statistics
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let rank = q * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (rank - lo as f64) * (sorted[hi] - sorted[lo])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::load_table_from_reader;
    use approx::assert_relative_eq;

    #[test]
    fn test_quartiles_interpolate() {
        let csv = "v\n1\n2\n3\n4\n";
        let table = load_table_from_reader(csv.as_bytes()).unwrap();

        let summary = &summarize(&table)[0];
        assert_eq!(summary.count, 4);
        assert_relative_eq!(summary.mean, 2.5);
        assert_relative_eq!(summary.std_dev, (5.0f64 / 3.0).sqrt(), max_relative = 1e-12);
        assert_relative_eq!(summary.min, 1.0);
        assert_relative_eq!(summary.p25, 1.75);
        assert_relative_eq!(summary.median, 2.5);
        assert_relative_eq!(summary.p75, 3.25);
        assert_relative_eq!(summary.max, 4.0);
    }

    #[test]
    fn test_text_columns_skipped() {
        let csv = "Mes,Ingresos\nEne,180\nFeb,210\nMar,220\n";
        let table = load_table_from_reader(csv.as_bytes()).unwrap();

        let summaries = summarize(&table);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].column, "Ingresos");
        assert_relative_eq!(summaries[0].mean, 610.0 / 3.0, max_relative = 1e-12);
    }

    #[test]
    fn test_blank_cells_ignored_in_count() {
        let csv = "k,v\na,10\nb,\nc,30\n";
        let table = load_table_from_reader(csv.as_bytes()).unwrap();

        let summary = &summarize(&table)[0];
        assert_eq!(summary.count, 2);
        assert_relative_eq!(summary.mean, 20.0);
        assert_relative_eq!(summary.min, 10.0);
        assert_relative_eq!(summary.max, 30.0);
    }

    #[test]
    fn test_single_value_column() {
        let csv = "v\n7.5\n";
        let table = load_table_from_reader(csv.as_bytes()).unwrap();

        let summary = &summarize(&table)[0];
        assert_eq!(summary.count, 1);
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.min, 7.5);
        assert_eq!(summary.median, 7.5);
        assert_eq!(summary.max, 7.5);
    }

    #[test]
    fn test_empty_table_yields_no_summaries() {
        let table = load_table_from_reader("a,b\n".as_bytes()).unwrap();
        assert!(summarize(&table).is_empty());
    }
}
