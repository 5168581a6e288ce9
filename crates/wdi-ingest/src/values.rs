//! Wide indicator value table.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use wdi_model::columns::{COUNTRY_NAME, YEAR};

use crate::error::{IngestError, Result, check_readable, normalize_header};

/// Reads the wide indicator table into a [`DataFrame`].
///
/// The whole file is scanned for schema inference: indicator columns are
/// often blank for the first countries, and a short inference window would
/// type them as strings. Header cells are trimmed (and a BOM removed) so the
/// key columns match [`COUNTRY_NAME`] and [`YEAR`] exactly.
///
/// # Errors
///
/// Fails when the file is missing or unparseable, or lacks either key column.
pub fn read_value_table(path: &Path) -> Result<DataFrame> {
    check_readable(path)?;

    let parse_error = |e: polars::error::PolarsError| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(parse_error)?
        .finish()
        .map_err(parse_error)?;

    let renames: Vec<(String, String)> = df
        .get_column_names()
        .iter()
        .filter_map(|name| {
            let normalized = normalize_header(name.as_str());
            (normalized != name.as_str()).then(|| (name.to_string(), normalized))
        })
        .collect();
    for (old, new) in renames {
        df.rename(&old, new.into()).map_err(parse_error)?;
    }

    for column in [COUNTRY_NAME, YEAR] {
        if df.column(column).is_err() {
            return Err(IngestError::MissingColumn {
                column: column.to_string(),
                path: path.to_path_buf(),
            });
        }
    }

    if df.height() == 0 {
        tracing::warn!(path = %path.display(), "indicator value table has no rows");
    }
    tracing::info!(
        path = %path.display(),
        rows = df.height(),
        indicator_columns = df.width().saturating_sub(2),
        "loaded indicator values"
    );
    Ok(df)
}
