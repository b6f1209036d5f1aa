use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Kind of chart the renderer should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartKind::Line => write!(f, "line"),
            ChartKind::Bar => write!(f, "bar"),
        }
    }
}

/// A colour for a whole dataset, or one colour per data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Paint {
    Single(String),
    PerPoint(Vec<String>),
}

/// Cosmetic settings of a dataset. Not part of the functional contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub border_color: Paint,
    pub background_color: Paint,

    /// Line smoothing; `None` for bar datasets
    pub tension: Option<f64>,

    /// Fill the area under a line
    pub fill: bool,

    pub border_width: Option<u32>,
}

/// One dataset of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub values: Vec<f64>,
    pub style: SeriesStyle,
}

/// Declarative, renderer-agnostic description of a chart.
///
/// The core computes every number and label; the frontend only draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,

    /// Chart title shown above the plot
    pub title: String,

    /// X-axis labels (dates for line charts, metric names for bars)
    pub labels: Vec<String>,

    pub series: Vec<ChartSeries>,

    /// Y axis starts at zero instead of the smallest value
    pub begin_at_zero: bool,
}

impl ChartSpec {
    /// Render this spec into the configuration object the page's chart
    /// library consumes (`{type, data: {labels, datasets}, options}`).
    #[must_use]
    pub fn to_renderer_config(&self) -> Value {
        let datasets: Vec<Value> = self
            .series
            .iter()
            .map(|s| {
                let mut dataset = json!({
                    "label": s.label,
                    "data": s.values,
                    "borderColor": s.style.border_color,
                    "backgroundColor": s.style.background_color,
                });
                if let Some(obj) = dataset.as_object_mut() {
                    if let Some(tension) = s.style.tension {
                        obj.insert("tension".into(), json!(tension));
                    }
                    if s.style.fill {
                        obj.insert("fill".into(), json!(true));
                    }
                    if let Some(width) = s.style.border_width {
                        obj.insert("borderWidth".into(), json!(width));
                    }
                }
                dataset
            })
            .collect();

        let mut options = json!({
            "responsive": true,
            "plugins": {
                "title": { "display": true, "text": self.title }
            }
        });
        if self.begin_at_zero {
            if let Some(obj) = options.as_object_mut() {
                obj.insert("scales".into(), json!({ "y": { "beginAtZero": true } }));
            }
        }

        json!({
            "type": self.kind,
            "data": {
                "labels": self.labels,
                "datasets": datasets,
            },
            "options": options,
        })
    }
}
