use tracing::debug;

use crate::errors::CoreError;
use crate::models::chart::{ChartKind, ChartSeries, ChartSpec, Paint, SeriesStyle};
use crate::models::metric::{Metric, MetricDefinition};
use crate::models::series::DataSeries;
use crate::models::settings::Settings;
use crate::models::summary::AggregateSummary;

const LINE_BACKGROUND_ALPHA: f64 = 0.1;
const BAR_BACKGROUND_ALPHA: f64 = 0.6;
const BAR_BORDER_ALPHA: f64 = 1.0;

/// Maps series and summaries to chart specifications.
///
/// The core computes all the numbers; the frontend only renders.
/// `present` produces, in this order:
/// - one cumulative line chart per metric (cost, emissions, energy)
/// - one bar chart of daily averages, one bar per metric
pub struct ChartService {
    /// Resolved definitions, one per metric, in `Metric::ALL` order
    definitions: Vec<MetricDefinition>,
    averages_label: String,
    averages_title: String,
    line_tension: f64,
    fill_area: bool,
}

impl ChartService {
    /// Create a presenter from settings, rejecting settings that do not
    /// define every metric exactly once.
    pub fn new(settings: &Settings) -> Result<Self, CoreError> {
        settings.validate()?;
        let definitions = Metric::ALL
            .into_iter()
            .map(|metric| {
                settings.definition(metric).cloned().ok_or_else(|| {
                    CoreError::InvalidSettings(format!("no definition for metric '{metric}'"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            definitions,
            averages_label: settings.averages_label.clone(),
            averages_title: settings.averages_title.clone(),
            line_tension: settings.line_tension,
            fill_area: settings.fill_area,
        })
    }

    /// Build the four chart specs for an analysis result.
    #[must_use]
    pub fn present(&self, series: &DataSeries, summary: &AggregateSummary) -> Vec<ChartSpec> {
        let mut charts: Vec<ChartSpec> = self
            .definitions
            .iter()
            .map(|def| self.cumulative_chart(def, series))
            .collect();
        charts.push(self.averages_chart(summary));

        debug!(charts = charts.len(), dates = series.len(), "presented charts");
        charts
    }

    fn cumulative_chart(&self, def: &MetricDefinition, series: &DataSeries) -> ChartSpec {
        ChartSpec {
            kind: ChartKind::Line,
            title: def.chart_title.clone(),
            labels: series.dates.clone(),
            series: vec![ChartSeries {
                label: def.series_label.clone(),
                values: series.metric(def.metric).cumulative.clone(),
                style: SeriesStyle {
                    border_color: Paint::Single(def.color.css()),
                    background_color: Paint::Single(def.color.css_alpha(LINE_BACKGROUND_ALPHA)),
                    tension: Some(self.line_tension),
                    fill: self.fill_area,
                    border_width: None,
                },
            }],
            begin_at_zero: false,
        }
    }

    fn averages_chart(&self, summary: &AggregateSummary) -> ChartSpec {
        let labels = self.definitions.iter().map(|d| d.name.clone()).collect();
        let values = self.definitions.iter().map(|d| summary.get(d.metric)).collect();
        let backgrounds = self
            .definitions
            .iter()
            .map(|d| d.color.css_alpha(BAR_BACKGROUND_ALPHA))
            .collect();
        let borders = self
            .definitions
            .iter()
            .map(|d| d.color.css_alpha(BAR_BORDER_ALPHA))
            .collect();

        ChartSpec {
            kind: ChartKind::Bar,
            title: self.averages_title.clone(),
            labels,
            series: vec![ChartSeries {
                label: self.averages_label.clone(),
                values,
                style: SeriesStyle {
                    border_color: Paint::PerPoint(borders),
                    background_color: Paint::PerPoint(backgrounds),
                    tension: None,
                    fill: false,
                    border_width: Some(1),
                },
            }],
            // every metric is a non-negative quantity
            begin_at_zero: true,
        }
    }
}

impl Default for ChartService {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            definitions: MetricDefinition::builtins(),
            averages_label: settings.averages_label,
            averages_title: settings.averages_title,
            line_tension: settings.line_tension,
            fill_area: settings.fill_area,
        }
    }
}
