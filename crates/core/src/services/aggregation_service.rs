use tracing::debug;

use crate::errors::CoreError;
use crate::models::metric::Metric;
use crate::models::series::DataSeries;
use crate::models::summary::AggregateSummary;

/// Derives summary figures from a `DataSeries`.
///
/// All calculations are O(N) per metric and deterministic.
pub struct AggregationService;

impl AggregationService {
    pub fn new() -> Self {
        Self
    }

    /// Mean of each metric's daily values.
    ///
    /// Does not trust the series to be non-empty: an empty daily sequence
    /// fails with `CoreError::EmptySeries` for that metric.
    pub fn summarize(&self, series: &DataSeries) -> Result<AggregateSummary, CoreError> {
        let summary = AggregateSummary {
            cost: Self::mean(Metric::Cost, &series.cost.daily)?,
            emissions: Self::mean(Metric::Emissions, &series.emissions.daily)?,
            energy: Self::mean(Metric::Energy, &series.energy.daily)?,
        };
        debug!(
            cost = summary.cost,
            emissions = summary.emissions,
            energy = summary.energy,
            "summarized daily averages"
        );
        Ok(summary)
    }

    /// Arithmetic mean, `sum / count`.
    ///
    /// A NaN or infinite result (non-finite input, or a sum that overflows)
    /// fails with `CoreError::NonFiniteAverage`.
    pub fn mean(metric: Metric, values: &[f64]) -> Result<f64, CoreError> {
        if values.is_empty() {
            return Err(CoreError::EmptySeries { metric });
        }
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        if !mean.is_finite() {
            return Err(CoreError::NonFiniteAverage { metric });
        }
        Ok(mean)
    }

    /// Running totals: element `i` is the sum of `daily[0..=i]`.
    #[must_use]
    pub fn cumulate(daily: &[f64]) -> Vec<f64> {
        daily
            .iter()
            .scan(0.0, |total, v| {
                *total += v;
                Some(*total)
            })
            .collect()
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}
