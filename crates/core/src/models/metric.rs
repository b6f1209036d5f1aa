use serde::{Deserialize, Serialize};

/// One of the quantities the simulation reports per day.
///
/// The set is closed: every payload carries all three, and every chart or
/// summary is keyed by this enum rather than by array position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Running cost of ownership (rubles)
    Cost,
    /// CO₂ emissions (grams)
    Emissions,
    /// Energy consumption (megajoules)
    Energy,
}

impl Metric {
    /// All metrics in their canonical order.
    pub const ALL: [Metric; 3] = [Metric::Cost, Metric::Emissions, Metric::Energy];

    /// Lowercase key used in payload field names (`total_<key>`, `daily_<key>`).
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Metric::Cost => "cost",
            Metric::Emissions => "emissions",
            Metric::Energy => "energy",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// An opaque RGB colour; alpha is chosen per use site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgb(r, g, b)` form.
    #[must_use]
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// CSS `rgba(r, g, b, a)` form.
    #[must_use]
    pub fn css_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Display metadata for a metric: labels and colour used by every chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDefinition {
    /// Which metric this definition describes
    pub metric: Metric,

    /// Short name, used as the bar label in the averages chart
    pub name: String,

    /// Dataset label of the cumulative line chart
    pub series_label: String,

    /// Title of the cumulative line chart
    pub chart_title: String,

    /// Base colour for lines and bars
    pub color: Rgb,
}

impl MetricDefinition {
    /// The built-in definition for a metric, with the results page's labels.
    #[must_use]
    pub fn builtin(metric: Metric) -> Self {
        let (name, series_label, chart_title, color) = match metric {
            Metric::Cost => (
                "Стоимость",
                "Накопленная стоимость (руб)",
                "Динамика стоимости владения",
                Rgb::new(75, 192, 192),
            ),
            Metric::Emissions => (
                "Выбросы",
                "Накопленные выбросы CO₂ (г)",
                "Динамика выбросов CO₂",
                Rgb::new(255, 99, 132),
            ),
            Metric::Energy => (
                "Энергия",
                "Накопленное энергопотребление (МДж)",
                "Динамика энергопотребления",
                Rgb::new(54, 162, 235),
            ),
        };
        Self {
            metric,
            name: name.to_string(),
            series_label: series_label.to_string(),
            chart_title: chart_title.to_string(),
            color,
        }
    }

    /// Built-in definitions for all metrics, in canonical order.
    #[must_use]
    pub fn builtins() -> Vec<Self> {
        Metric::ALL.into_iter().map(Self::builtin).collect()
    }
}
