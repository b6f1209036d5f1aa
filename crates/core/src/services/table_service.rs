use std::cmp::Ordering;

use tracing::debug;

use crate::errors::CoreError;
use crate::models::table::{SortDirection, SortState, TableRow};

/// Sorts result-table rows by a column's pre-extracted numeric value.
pub struct TableService;

impl TableService {
    pub fn new() -> Self {
        Self
    }

    /// Sort `rows` by `column` and return them with the next sort state.
    ///
    /// Clicking the active column flips its direction; any other column
    /// starts ascending. The sort is stable, so rows with equal values keep
    /// their relative order. `rows` is never modified: on error nothing is
    /// reordered and the caller keeps its current state.
    pub fn sort(
        &self,
        rows: &[TableRow],
        column: &str,
        current: &SortState,
    ) -> Result<(Vec<TableRow>, SortState), CoreError> {
        let direction = match &current.active_column {
            Some(active) if active == column => current.direction.flipped(),
            _ => SortDirection::Ascending,
        };

        // Resolve every key up front so a bad row fails before any reordering.
        let mut keyed = Vec::with_capacity(rows.len());
        for row in rows {
            let value = row.key(column).ok_or_else(|| CoreError::MissingKey {
                row: row.id.clone(),
                column: column.to_string(),
            })?;
            if !value.is_finite() {
                return Err(CoreError::InvalidSortKey {
                    row: row.id.clone(),
                    column: column.to_string(),
                    value: value.to_string(),
                });
            }
            keyed.push((value, row));
        }

        // slice::sort_by is stable; ties (including 0.0 and -0.0) compare Equal
        // in both directions. Keys are finite here, so partial_cmp never fails.
        keyed.sort_by(|(a, _), (b, _)| {
            let ordering = a.partial_cmp(b).unwrap_or(Ordering::Equal);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        let ordered: Vec<TableRow> = keyed.into_iter().map(|(_, row)| row.clone()).collect();
        debug!(column, %direction, rows = ordered.len(), "sorted table");

        Ok((
            ordered,
            SortState {
                active_column: Some(column.to_string()),
                direction,
            },
        ))
    }
}

impl Default for TableService {
    fn default() -> Self {
        Self::new()
    }
}
