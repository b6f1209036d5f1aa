use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::metric::Metric;
use crate::models::series::{DataSeries, MetricSeries, RawPayload};
use crate::services::aggregation_service::AggregationService;

/// Turns the raw analysis payload into a shape-checked `DataSeries`.
pub struct SeriesService;

impl SeriesService {
    pub fn new() -> Self {
        Self
    }

    /// Validate and normalize a raw payload.
    ///
    /// Fails with `CoreError::Shape` when there are no dates, when any
    /// metric's cumulative or daily array length differs from the number of
    /// dates, or when any value is NaN or infinite.
    pub fn build(&self, raw: RawPayload) -> Result<DataSeries, CoreError> {
        let n = raw.dates.len();
        if n == 0 {
            return Err(CoreError::Shape("payload contains no dates".into()));
        }

        for metric in Metric::ALL {
            let (cumulative, daily) = raw.arrays(metric);
            if cumulative.len() != n || daily.len() != n {
                return Err(CoreError::Shape(format!(
                    "{metric}: {} cumulative and {} daily values for {n} dates",
                    cumulative.len(),
                    daily.len(),
                )));
            }
            if let Some(i) = cumulative.iter().position(|v| !v.is_finite()) {
                return Err(CoreError::Shape(format!(
                    "{metric}: cumulative value at index {i} is not a finite number"
                )));
            }
            if let Some(i) = daily.iter().position(|v| !v.is_finite()) {
                return Err(CoreError::Shape(format!(
                    "{metric}: daily value at index {i} is not a finite number"
                )));
            }
        }

        Self::check_date_order(&raw.dates);

        let RawPayload {
            dates,
            total_cost,
            daily_cost,
            total_emissions,
            daily_emissions,
            total_energy,
            daily_energy,
        } = raw;

        let series = DataSeries {
            dates,
            cost: MetricSeries {
                cumulative: total_cost,
                daily: daily_cost,
            },
            emissions: MetricSeries {
                cumulative: total_emissions,
                daily: daily_emissions,
            },
            energy: MetricSeries {
                cumulative: total_energy,
                daily: daily_energy,
            },
        };

        for metric in Metric::ALL {
            Self::check_monotonic(metric, &series.metric(metric).cumulative);
        }

        debug!(dates = n, "built data series");
        Ok(series)
    }

    /// Build a series from per-day values only, deriving each cumulative
    /// array as the running total of its daily array.
    pub fn build_from_daily(
        &self,
        dates: Vec<String>,
        daily_cost: Vec<f64>,
        daily_emissions: Vec<f64>,
        daily_energy: Vec<f64>,
    ) -> Result<DataSeries, CoreError> {
        let raw = RawPayload {
            dates,
            total_cost: AggregationService::cumulate(&daily_cost),
            daily_cost,
            total_emissions: AggregationService::cumulate(&daily_emissions),
            daily_emissions,
            total_energy: AggregationService::cumulate(&daily_energy),
            daily_energy,
        };
        self.build(raw)
    }

    /// Dates are labels, so an out-of-order ISO date is logged, not rejected.
    fn check_date_order(dates: &[String]) {
        let parsed: Option<Vec<NaiveDate>> = dates
            .iter()
            .map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .collect();
        let Some(parsed) = parsed else {
            return;
        };
        if let Some(i) = parsed.windows(2).position(|w| w[1] < w[0]) {
            warn!(
                index = i + 1,
                previous = %parsed[i],
                date = %parsed[i + 1],
                "dates are not in chronological order"
            );
        }
    }

    fn check_monotonic(metric: Metric, cumulative: &[f64]) {
        if let Some(i) = cumulative.windows(2).position(|w| w[1] < w[0]) {
            warn!(
                %metric,
                index = i + 1,
                "cumulative series decreases"
            );
        }
    }
}

impl Default for SeriesService {
    fn default() -> Self {
        Self::new()
    }
}
