use serde::{Deserialize, Serialize};

use super::metric::{Metric, MetricDefinition};
use crate::errors::CoreError;

/// Presentation settings for the results page.
///
/// Every field has a default, so a partial JSON document only overrides
/// what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Metric definitions. Each metric must appear exactly once; charts are
    /// always laid out in canonical metric order regardless of list order.
    pub metrics: Vec<MetricDefinition>,

    /// Dataset label of the daily averages bar chart
    pub averages_label: String,

    /// Title of the daily averages bar chart
    pub averages_title: String,

    /// Line smoothing of the cumulative charts
    pub line_tension: f64,

    /// Fill the area under cumulative lines
    pub fill_area: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            metrics: MetricDefinition::builtins(),
            averages_label: "Средние дневные показатели".to_string(),
            averages_title: "Средние дневные показатели".to_string(),
            line_tension: 0.1,
            fill_area: true,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that every metric is declared exactly once.
    pub fn validate(&self) -> Result<(), CoreError> {
        for metric in Metric::ALL {
            let count = self.metrics.iter().filter(|d| d.metric == metric).count();
            match count {
                1 => {}
                0 => {
                    return Err(CoreError::InvalidSettings(format!(
                        "no definition for metric '{metric}'"
                    )))
                }
                n => {
                    return Err(CoreError::InvalidSettings(format!(
                        "metric '{metric}' is defined {n} times"
                    )))
                }
            }
        }
        Ok(())
    }

    /// Definition for a metric, looked up by key rather than position.
    #[must_use]
    pub fn definition(&self, metric: Metric) -> Option<&MetricDefinition> {
        self.metrics.iter().find(|d| d.metric == metric)
    }
}
