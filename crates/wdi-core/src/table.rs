//! The wide indicator value table.
//!
//! Wraps the loaded [`DataFrame`] and turns the dynamic "column named by the
//! user's indicator code" access into explicit lookups with a defined miss:
//! [`IndicatorValueTable::column`] returns `None` for an unknown code or for
//! one of the key columns.

use std::collections::BTreeSet;

use polars::prelude::{
    BooleanChunked, Column, DataFrame, DataType, NewChunkedArray, PolarsResult, StringChunked,
};
use wdi_model::columns::{COUNTRY_NAME, YEAR, is_key_column};

#[derive(Debug, Clone)]
pub struct IndicatorValueTable {
    data: DataFrame,
}

impl IndicatorValueTable {
    pub fn new(data: DataFrame) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn height(&self) -> usize {
        self.data.height()
    }

    /// Values column for an indicator code.
    pub fn column(&self, indicator: &str) -> Option<&Column> {
        if is_key_column(indicator) {
            return None;
        }
        self.data.column(indicator).ok()
    }

    pub fn year_column(&self) -> PolarsResult<&Column> {
        self.data.column(YEAR)
    }

    /// Every non-key column name, in table order.
    pub fn indicator_codes(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .into_iter()
            .filter(|name| !is_key_column(name.as_str()))
            .map(|name| name.to_string())
            .collect()
    }

    /// Distinct country names in order of first appearance.
    pub fn countries(&self) -> Vec<String> {
        let Ok(names) = self.country_names() else {
            return Vec::new();
        };
        let mut seen = BTreeSet::new();
        names
            .iter()
            .flatten()
            .filter(|name| seen.insert(*name))
            .map(str::to_string)
            .collect()
    }

    /// Row mask selecting `country`.
    pub fn country_mask(&self, country: &str) -> PolarsResult<BooleanChunked> {
        let names = self.country_names()?;
        let keep: Vec<bool> = names.iter().map(|name| name == Some(country)).collect();
        Ok(BooleanChunked::from_slice("country".into(), &keep))
    }

    /// Every stored row of `country`; an unknown country yields zero rows
    /// with the full schema.
    pub fn country_rows(&self, country: &str) -> DataFrame {
        self.country_mask(country)
            .and_then(|mask| self.data.filter(&mask))
            .unwrap_or_else(|_| self.data.clear())
    }

    /// Leading rows of the table.
    pub fn head(&self, rows: usize) -> DataFrame {
        self.data.head(Some(rows))
    }

    fn country_names(&self) -> PolarsResult<StringChunked> {
        let column = self.data.column(COUNTRY_NAME)?.cast(&DataType::String)?;
        Ok(column.as_materialized_series().str()?.clone())
    }
}
