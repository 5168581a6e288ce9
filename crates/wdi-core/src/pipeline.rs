//! Country/indicator filter pipeline.
//!
//! `project` narrows the wide table to one country's (Year, value) pairs for
//! one indicator; `compare` does the same for up to three countries. Neither
//! can fail: an unknown country, an unknown indicator, or a column Polars
//! cannot read all produce an empty series, which the presentation layer
//! shows as "no data available".

use polars::prelude::PolarsResult;
use tracing::debug;
use wdi_common::{cell_number, cell_year};
use wdi_model::{FilteredSeries, Selection, SeriesPoint, View};

use crate::store::DatasetStore;
use crate::table::IndicatorValueTable;

/// Projects the table to the non-null (Year, value) pairs of `indicator`
/// for `country`, in stored row order.
pub fn project(table: &IndicatorValueTable, country: &str, indicator: &str) -> FilteredSeries {
    match project_points(table, country, indicator) {
        Ok(points) => {
            debug!(country, indicator, points = points.len(), "projected series");
            FilteredSeries::new(country, indicator, points)
        }
        Err(error) => {
            debug!(country, indicator, %error, "projection failed, using empty series");
            FilteredSeries::empty(country, indicator)
        }
    }
}

fn project_points(
    table: &IndicatorValueTable,
    country: &str,
    indicator: &str,
) -> PolarsResult<Vec<SeriesPoint>> {
    let Some(values) = table.column(indicator) else {
        return Ok(Vec::new());
    };
    let mask = table.country_mask(country)?;
    let years = table.year_column()?.filter(&mask)?;
    let values = values.filter(&mask)?;

    let mut points = Vec::with_capacity(values.len() - values.null_count());
    for idx in 0..years.len() {
        let (Some(year), Some(value)) = (cell_year(years.get(idx)?), cell_number(values.get(idx)?))
        else {
            continue;
        };
        points.push(SeriesPoint::new(year, value));
    }
    Ok(points)
}

/// Projects each country in turn. Output order follows `countries`; empty
/// series are kept so callers can tell which slot had no data.
pub fn compare<S: AsRef<str>>(
    table: &IndicatorValueTable,
    countries: &[S],
    indicator: &str,
) -> Vec<FilteredSeries> {
    countries
        .iter()
        .map(|country| project(table, country.as_ref(), indicator))
        .collect()
}

/// Series a selection asks for: one on Check Indicators, one per country on
/// Comparisons, none on Home.
pub fn project_selection(store: &DatasetStore, selection: &Selection) -> Vec<FilteredSeries> {
    match selection.view() {
        View::Home => Vec::new(),
        View::CheckIndicators => selection
            .country()
            .map(|country| vec![project(store.values(), country, selection.indicator())])
            .unwrap_or_default(),
        View::Comparisons => compare(store.values(), selection.countries(), selection.indicator()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};
    use wdi_model::columns::{COUNTRY_NAME, YEAR};

    fn table_with_string_values() -> IndicatorValueTable {
        // Columns that are blank in the first rows can be inferred as text.
        let columns = vec![
            Series::new(COUNTRY_NAME.into(), &["France", "France", "France"]).into_column(),
            Series::new(YEAR.into(), &[Some(2000.0), None, Some(2002.0)]).into_column(),
            Series::new("IND".into(), &[Some("1.5"), Some("2.5"), Some("n/a")]).into_column(),
        ];
        IndicatorValueTable::new(DataFrame::new(columns).unwrap())
    }

    #[test]
    fn text_values_and_float_years_are_coerced() {
        let series = project(&table_with_string_values(), "France", "IND");
        // 2001 has no year, 2002 has no numeric value.
        assert_eq!(series.points, vec![SeriesPoint::new(2000, 1.5)]);
    }

    #[test]
    fn key_column_as_indicator_is_empty() {
        let series = project(&table_with_string_values(), "France", YEAR);
        assert!(series.is_empty());
    }
}
