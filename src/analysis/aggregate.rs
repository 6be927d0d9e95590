//! Group-and-sum aggregation over table columns

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::debug;
use serde::Serialize;

use crate::error::Error;
use crate::table::Table;

/// Sum of one value column within one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupAggregate {
    /// Distinct value of the grouping column
    pub group: String,
    /// Sum of the value column across the group's rows
    pub total: f64,
}

/// Partition the rows of `table` by `group_column` and sum `value_column`
/// within each partition.
///
/// Groups come back in first-seen order. A non-numeric cell under
/// `value_column` is rejected rather than skipped, so a successful result
/// always conserves the column sum. An empty table yields an empty result;
/// no data is a valid state, not an error.
pub fn aggregate(
    table: &Table,
    group_column: &str,
    value_column: &str,
) -> Result<Vec<GroupAggregate>, Error> {
    let groups = table.column(group_column)?;
    let values = table.column(value_column)?;

    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, f64> = HashMap::new();

    for (row, (group, value)) in groups.iter().zip(values.iter()).enumerate() {
        let key = group.label();
        let value = value.as_number().ok_or_else(|| {
            Error::InvalidArgument(format!(
                "row {}: column '{}' is not numeric",
                row + 1,
                value_column
            ))
        })?;

        match totals.entry(key) {
            Entry::Occupied(mut entry) => *entry.get_mut() += value,
            Entry::Vacant(entry) => {
                order.push(entry.key().clone());
                entry.insert(value);
            }
        }
    }

    debug!(
        "aggregated {} rows into {} groups of '{}'",
        table.n_rows(),
        order.len(),
        group_column
    );

    Ok(order
        .into_iter()
        .map(|group| {
            let total = totals[&group];
            GroupAggregate { group, total }
        })
        .collect())
}
