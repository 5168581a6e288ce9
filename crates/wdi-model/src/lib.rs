//! Data model for the World Bank indicator explorer.
//!
//! - [`Selection`]: what the user picked for one interaction
//! - [`FilteredSeries`]: the (Year, value) pairs projected for one country
//! - [`IndicatorCatalog`]: Series Code to English/Arabic display names

pub mod columns;
pub mod error;
pub mod indicator;
pub mod selection;
pub mod series;

pub use error::{ModelError, Result};
pub use indicator::{IndicatorCatalog, IndicatorInfo};
pub use selection::{Action, MAX_COMPARED_COUNTRIES, Selection, View};
pub use series::{FilteredSeries, SeriesPoint};
