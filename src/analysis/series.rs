//! X/Y point extraction for line and scatter charts

use crate::error::Error;
use crate::table::Table;

/// Pair two numeric columns into chart points, row by row.
///
/// Both cells of every row must be numeric; a text cell under either column
/// is rejected rather than coerced or skipped.
pub fn xy_points(table: &Table, x_column: &str, y_column: &str) -> Result<Vec<(f64, f64)>, Error> {
    let xs = table.column(x_column)?;
    let ys = table.column(y_column)?;

    xs.iter()
        .zip(ys.iter())
        .enumerate()
        .map(|(row, (x, y))| {
            let x = x.as_number().ok_or_else(|| non_numeric(row, x_column))?;
            let y = y.as_number().ok_or_else(|| non_numeric(row, y_column))?;
            Ok((x, y))
        })
        .collect()
}

fn non_numeric(row: usize, column: &str) -> Error {
    Error::InvalidArgument(format!("row {}: column '{column}' is not numeric", row + 1))
}
