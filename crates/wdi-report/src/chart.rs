//! Chart specifications.
//!
//! A [`ChartSpec`] is what the dashboard hands to its charting collaborator.
//! It carries no styling beyond chart type, titles and trace mode; the
//! Plotly figure produced by [`ChartSpec::to_plotly`] leaves everything else
//! to the renderer's defaults.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use wdi_model::FilteredSeries;

const X_AXIS_TITLE: &str = "Year";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
}

impl ChartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceMode {
    Lines,
    LinesMarkers,
}

impl TraceMode {
    fn plotly_mode(self) -> &'static str {
        match self {
            TraceMode::Lines => "lines",
            TraceMode::LinesMarkers => "lines+markers",
        }
    }
}

/// One named line or bar set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub name: String,
    pub mode: TraceMode,
    pub x: Vec<i32>,
    pub y: Vec<f64>,
}

impl Trace {
    pub fn from_series(series: &FilteredSeries, mode: TraceMode) -> Self {
        Self {
            name: series.country.clone(),
            mode,
            x: series.years(),
            y: series.values(),
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub traces: Vec<Trace>,
}

impl ChartSpec {
    /// Plotly figure (`data` and `layout`) for this chart.
    pub fn to_plotly(&self) -> Value {
        let data: Vec<Value> = self
            .traces
            .iter()
            .map(|trace| match self.kind {
                ChartKind::Line => json!({
                    "type": "scatter",
                    "mode": trace.mode.plotly_mode(),
                    "name": trace.name,
                    "x": trace.x,
                    "y": trace.y,
                }),
                ChartKind::Bar => json!({
                    "type": "bar",
                    "name": trace.name,
                    "x": trace.x,
                    "y": trace.y,
                }),
            })
            .collect();
        json!({
            "data": data,
            "layout": {
                "title": { "text": self.title },
                "xaxis": { "title": { "text": self.x_title } },
                "yaxis": { "title": { "text": self.y_title } },
                "showlegend": self.traces.len() > 1,
            },
        })
    }
}

/// Line and bar chart of one country's series, or `None` when the series
/// is empty and a notice should be shown instead.
pub fn series_charts(series: &FilteredSeries) -> Option<[ChartSpec; 2]> {
    if series.is_empty() {
        return None;
    }
    let title = format!("{} over Years for {}", series.indicator, series.country);
    let line = ChartSpec {
        kind: ChartKind::Line,
        title: title.clone(),
        x_title: X_AXIS_TITLE.to_string(),
        y_title: series.indicator.clone(),
        traces: vec![Trace::from_series(series, TraceMode::Lines)],
    };
    let bar = ChartSpec {
        kind: ChartKind::Bar,
        title: format!("{title} - Bar Chart"),
        ..line.clone()
    };
    Some([line, bar])
}

/// One line chart with a `lines+markers` trace per non-empty series, in
/// input order. `None` when every series is empty.
pub fn comparison_chart(indicator: &str, series: &[FilteredSeries]) -> Option<ChartSpec> {
    let traces: Vec<Trace> = series
        .iter()
        .filter(|series| !series.is_empty())
        .map(|series| Trace::from_series(series, TraceMode::LinesMarkers))
        .collect();
    if traces.is_empty() {
        return None;
    }
    Some(ChartSpec {
        kind: ChartKind::Line,
        title: format!("Comparison of {indicator} over Years"),
        x_title: X_AXIS_TITLE.to_string(),
        y_title: indicator.to_string(),
        traces,
    })
}
