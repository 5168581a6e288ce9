//! Source table loading.
//!
//! The dashboard reads two tables once at startup:
//!
//! - **Indicator values**: a wide table with one row per (`Country Name`,
//!   `Year`) and one numeric column per indicator code, loaded into a Polars
//!   [`DataFrame`](polars::prelude::DataFrame)
//! - **Indicator metadata**: `Series Code`, `Indicator Name` and
//!   `Arabic Indicator Name`, loaded into an
//!   [`IndicatorCatalog`](wdi_model::IndicatorCatalog)
//!
//! Both are UTF-8 CSV exports of the source spreadsheets.
//!
//! # Example
//!
//! ```ignore
//! use wdi_ingest::{DataPaths, read_indicator_catalog, read_value_table};
//!
//! let paths = DataPaths::default();
//! let values = read_value_table(&paths.values)?;
//! let catalog = read_indicator_catalog(&paths.metadata)?;
//! ```

mod error;
mod metadata;
mod paths;
mod values;

pub use error::{IngestError, Result};
pub use metadata::read_indicator_catalog;
pub use paths::{DEFAULT_METADATA_FILE, DEFAULT_VALUES_FILE, DataPaths};
pub use values::read_value_table;
