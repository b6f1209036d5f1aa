use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::CoreError;

/// One row of a results table, with its sort values already extracted.
///
/// The row's display text is never re-parsed while sorting; `keys` is the
/// only source of ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Opaque identifier of the rendered row
    pub id: String,

    /// Numeric sort value per sortable column key
    pub keys: BTreeMap<String, f64>,
}

impl TableRow {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            keys: BTreeMap::new(),
        }
    }

    /// Builder-style setter for one column's sort value.
    #[must_use]
    pub fn with_key(mut self, column: impl Into<String>, value: f64) -> Self {
        self.keys.insert(column.into(), value);
        self
    }

    /// Build a row from the raw `data-<column>` attribute strings of a rendered row.
    ///
    /// Every value must parse as a finite number; anything else is rejected
    /// with `CoreError::InvalidSortKey` instead of becoming NaN.
    pub fn from_attributes<I, K, V>(
        id: impl Into<String>,
        attributes: I,
    ) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut row = Self::new(id);
        for (column, raw) in attributes {
            let column = column.into();
            let raw = raw.as_ref();
            let value = raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| CoreError::InvalidSortKey {
                    row: row.id.clone(),
                    column: column.clone(),
                    value: raw.to_string(),
                })?;
            row.keys.insert(column, value);
        }
        Ok(row)
    }

    /// Sort value for a column, if the row has one.
    #[must_use]
    pub fn key(&self, column: &str) -> Option<f64> {
        self.keys.get(column).copied()
    }
}

/// Ordering applied to the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "ascending"),
            SortDirection::Descending => write!(f, "descending"),
        }
    }
}

/// Sort state of one table. At most one column is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    /// Column currently sorted by; `None` until the first header click
    pub active_column: Option<String>,

    /// Direction of the active column (meaningless while unsorted)
    pub direction: SortDirection,
}

impl SortState {
    /// The indicator a column header should display for this state.
    #[must_use]
    pub fn indicator(&self, column: &str) -> SortIndicator {
        match &self.active_column {
            Some(active) if active == column => match self.direction {
                SortDirection::Ascending => SortIndicator::Ascending,
                SortDirection::Descending => SortIndicator::Descending,
            },
            _ => SortIndicator::Unsorted,
        }
    }
}

/// What a sortable column header shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

impl SortIndicator {
    /// Arrow glyph rendered in the header.
    #[must_use]
    pub fn arrow(self) -> &'static str {
        match self {
            SortIndicator::Unsorted => "↕",
            SortIndicator::Ascending => "↑",
            SortIndicator::Descending => "↓",
        }
    }

    /// CSS class added to the header, if any.
    #[must_use]
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            SortIndicator::Unsorted => None,
            SortIndicator::Ascending => Some("asc"),
            SortIndicator::Descending => Some("desc"),
        }
    }
}
