use serde::{Deserialize, Serialize};

use super::metric::Metric;

/// The analysis payload exactly as the server hands it to the results page.
///
/// Field names follow the page's `plotData` object: `dates` plus a
/// `total_<metric>` (cumulative) and `daily_<metric>` array per metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPayload {
    pub dates: Vec<String>,

    pub total_cost: Vec<f64>,
    pub daily_cost: Vec<f64>,

    pub total_emissions: Vec<f64>,
    pub daily_emissions: Vec<f64>,

    pub total_energy: Vec<f64>,
    pub daily_energy: Vec<f64>,
}

impl RawPayload {
    /// Parse a payload from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, crate::errors::CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The `(total, daily)` arrays for a metric.
    #[must_use]
    pub fn arrays(&self, metric: Metric) -> (&[f64], &[f64]) {
        match metric {
            Metric::Cost => (self.total_cost.as_slice(), self.daily_cost.as_slice()),
            Metric::Emissions => (
                self.total_emissions.as_slice(),
                self.daily_emissions.as_slice(),
            ),
            Metric::Energy => (self.total_energy.as_slice(), self.daily_energy.as_slice()),
        }
    }
}

/// Cumulative and per-day values of one metric, parallel to `DataSeries::dates`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricSeries {
    /// Running total up to and including each date
    pub cumulative: Vec<f64>,

    /// Non-accumulated value for each date
    pub daily: Vec<f64>,
}

/// Typed, shape-checked time series for every metric.
///
/// Values built through `SeriesService` always satisfy
/// `cumulative.len() == daily.len() == dates.len()` with at least one date.
/// Fields stay public so aggregation can be exercised on hand-made series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataSeries {
    /// Date labels in chronological order
    pub dates: Vec<String>,

    pub cost: MetricSeries,
    pub emissions: MetricSeries,
    pub energy: MetricSeries,
}

impl DataSeries {
    /// Series for a single metric.
    #[must_use]
    pub fn metric(&self, metric: Metric) -> &MetricSeries {
        match metric {
            Metric::Cost => &self.cost,
            Metric::Emissions => &self.emissions,
            Metric::Energy => &self.energy,
        }
    }

    /// Number of dates (and of values in every metric sequence).
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
