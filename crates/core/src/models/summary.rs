use serde::{Deserialize, Serialize};

use super::metric::Metric;

/// Mean of each metric's daily values over the whole analysis period.
///
/// This is the literal mean of the `daily` array, not `cumulative[last] / N`;
/// the two only agree when the cumulative series starts from zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateSummary {
    pub cost: f64,
    pub emissions: f64,
    pub energy: f64,
}

impl AggregateSummary {
    /// Average daily value for a metric.
    #[must_use]
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Cost => self.cost,
            Metric::Emissions => self.emissions,
            Metric::Energy => self.energy,
        }
    }
}
