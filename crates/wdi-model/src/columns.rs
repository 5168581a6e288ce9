//! Column names of the two source tables.

/// Value table: country key.
pub const COUNTRY_NAME: &str = "Country Name";
/// Value table: year key.
pub const YEAR: &str = "Year";

/// Metadata table: indicator code, also the value table's column name.
pub const SERIES_CODE: &str = "Series Code";
pub const INDICATOR_NAME: &str = "Indicator Name";
pub const ARABIC_INDICATOR_NAME: &str = "Arabic Indicator Name";

/// Whether `name` is one of the value table's key columns rather than an
/// indicator.
pub fn is_key_column(name: &str) -> bool {
    name == COUNTRY_NAME || name == YEAR
}
