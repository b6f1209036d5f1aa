pub mod errors;
pub mod models;
pub mod services;

use models::{
    chart::ChartSpec,
    series::{DataSeries, RawPayload},
    settings::Settings,
    summary::AggregateSummary,
    table::{SortIndicator, SortState, TableRow},
};
use services::{
    aggregation_service::AggregationService, chart_service::ChartService,
    series_service::SeriesService, table_service::TableService,
};

use errors::CoreError;

/// Main entry point for one analysis result shown on the results page.
/// Holds the normalized series, its daily averages and the chart presenter.
#[must_use]
pub struct VehicleAnalysis {
    series: DataSeries,
    summary: AggregateSummary,
    chart_service: ChartService,
}

impl std::fmt::Debug for VehicleAnalysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VehicleAnalysis")
            .field("dates", &self.series.len())
            .field("summary", &self.summary)
            .finish()
    }
}

impl VehicleAnalysis {
    /// Build an analysis from an already-parsed payload.
    pub fn from_payload(raw: RawPayload, settings: &Settings) -> Result<Self, CoreError> {
        let chart_service = ChartService::new(settings)?;
        let series = SeriesService::new().build(raw)?;
        let summary = AggregationService::new().summarize(&series)?;
        Ok(Self {
            series,
            summary,
            chart_service,
        })
    }

    /// Build an analysis from the payload's JSON text.
    pub fn from_json(json: &str, settings: &Settings) -> Result<Self, CoreError> {
        Self::from_payload(RawPayload::from_json(json)?, settings)
    }

    #[must_use]
    pub fn series(&self) -> &DataSeries {
        &self.series
    }

    #[must_use]
    pub fn summary(&self) -> &AggregateSummary {
        &self.summary
    }

    /// The four chart specs: cumulative cost, emissions, energy, then daily averages.
    #[must_use]
    pub fn charts(&self) -> Vec<ChartSpec> {
        self.chart_service.present(&self.series, &self.summary)
    }

    /// Chart specs already rendered into the chart library's config shape.
    #[must_use]
    pub fn renderer_configs(&self) -> Vec<serde_json::Value> {
        self.charts().iter().map(ChartSpec::to_renderer_config).collect()
    }
}

/// A results table together with its sort state.
///
/// Each header click goes through `click`; rows and state are only
/// replaced when the sort succeeds.
#[derive(Debug, Clone, Default)]
pub struct ResultsTable {
    rows: Vec<TableRow>,
    state: SortState,
}

impl ResultsTable {
    pub fn new(rows: Vec<TableRow>) -> Self {
        Self {
            rows,
            state: SortState::default(),
        }
    }

    /// Rows in their current display order.
    #[must_use]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    #[must_use]
    pub fn state(&self) -> &SortState {
        &self.state
    }

    /// Indicator to render on a column header.
    #[must_use]
    pub fn indicator(&self, column: &str) -> SortIndicator {
        self.state.indicator(column)
    }

    /// Sort by `column` as if its header was clicked.
    pub fn click(&mut self, column: &str) -> Result<&[TableRow], CoreError> {
        let (rows, state) = TableService::new().sort(&self.rows, column, &self.state)?;
        self.rows = rows;
        self.state = state;
        Ok(&self.rows)
    }
}
