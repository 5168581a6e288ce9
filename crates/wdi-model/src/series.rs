use serde::{Deserialize, Serialize};

/// One observation of an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub year: i32,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }
}

/// The non-null (Year, value) pairs of one indicator for one country, in
/// stored row order.
///
/// An empty series is a valid result: it means "no data available" for the
/// pair and is rendered as a notice rather than a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredSeries {
    pub country: String,
    pub indicator: String,
    pub points: Vec<SeriesPoint>,
}

impl FilteredSeries {
    pub fn new(
        country: impl Into<String>,
        indicator: impl Into<String>,
        points: Vec<SeriesPoint>,
    ) -> Self {
        Self {
            country: country.into(),
            indicator: indicator.into(),
            points,
        }
    }

    pub fn empty(country: impl Into<String>, indicator: impl Into<String>) -> Self {
        Self::new(country, indicator, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn years(&self) -> Vec<i32> {
        self.points.iter().map(|point| point.year).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.value).collect()
    }

    /// First and last year of the series.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some((first.year, last.year))
    }
}
