//! Dataset store and filter pipeline.
//!
//! [`DatasetStore`] owns the two source tables for the lifetime of the
//! process. The pipeline functions borrow its [`IndicatorValueTable`] and
//! turn a country and an indicator code into a [`FilteredSeries`]:
//!
//! ```ignore
//! use wdi_core::{DatasetStore, compare, project};
//! use wdi_ingest::DataPaths;
//!
//! let store = DatasetStore::load(&DataPaths::default())?;
//! let egypt = project(store.values(), "Egypt, Arab Rep.", "SP.POP.TOTL");
//! let all = compare(store.values(), &["Egypt, Arab Rep.", "France"], "SP.POP.TOTL");
//! ```
//!
//! [`FilteredSeries`]: wdi_model::FilteredSeries

pub mod pipeline;
pub mod store;
pub mod table;

pub use pipeline::{compare, project, project_selection};
pub use store::{DEFAULT_COUNTRY, DatasetStore};
pub use table::IndicatorValueTable;
