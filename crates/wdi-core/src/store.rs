//! Process-wide dataset store.
//!
//! Built once at startup and then only borrowed. Nothing here is mutated
//! after construction, so a render pass can take `&DatasetStore` without any
//! locking.

use polars::prelude::DataFrame;
use tracing::{debug, info};
use wdi_ingest::{DataPaths, read_indicator_catalog, read_value_table};
use wdi_model::{IndicatorCatalog, IndicatorInfo};

use crate::table::IndicatorValueTable;

/// Country preselected in every country picker when present.
pub const DEFAULT_COUNTRY: &str = "Egypt, Arab Rep.";

#[derive(Debug, Clone)]
pub struct DatasetStore {
    values: IndicatorValueTable,
    catalog: IndicatorCatalog,
    countries: Vec<String>,
}

impl DatasetStore {
    /// Loads both source tables.
    pub fn load(paths: &DataPaths) -> wdi_ingest::Result<Self> {
        let values = read_value_table(&paths.values)?;
        let catalog = read_indicator_catalog(&paths.metadata)?;
        let store = Self::new(values, catalog);
        info!(
            countries = store.countries.len(),
            rows = store.values.height(),
            indicators = store.catalog.len(),
            "dataset store ready"
        );
        Ok(store)
    }

    pub fn new(values: DataFrame, catalog: IndicatorCatalog) -> Self {
        let values = IndicatorValueTable::new(values);
        let countries = values.countries();
        let unmatched = catalog
            .codes()
            .filter(|code| values.column(code).is_none())
            .count();
        if unmatched > 0 {
            debug!(
                unmatched,
                "catalog indicators without a value column project to empty series"
            );
        }
        Self {
            values,
            catalog,
            countries,
        }
    }

    pub fn values(&self) -> &IndicatorValueTable {
        &self.values
    }

    pub fn catalog(&self) -> &IndicatorCatalog {
        &self.catalog
    }

    /// Country picker options, in order of first appearance.
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn has_country(&self, country: &str) -> bool {
        self.countries.iter().any(|known| known == country)
    }

    pub fn indicator(&self, code: &str) -> Option<&IndicatorInfo> {
        self.catalog.get(code)
    }

    /// [`DEFAULT_COUNTRY`] when loaded, otherwise the first country.
    pub fn default_country(&self) -> Option<&str> {
        if self.has_country(DEFAULT_COUNTRY) {
            return Some(DEFAULT_COUNTRY);
        }
        self.countries.first().map(String::as_str)
    }

    /// First indicator of the metadata table.
    pub fn default_indicator(&self) -> Option<&str> {
        self.catalog.first().map(|info| info.code.as_str())
    }

    /// Stored rows of one country, for the per-country table view.
    pub fn country_rows(&self, country: &str) -> DataFrame {
        self.values.country_rows(country)
    }

    /// Leading rows of the value table, for the sample toggle.
    pub fn sample(&self, rows: usize) -> DataFrame {
        self.values.head(rows)
    }
}
