//! Indicator metadata table.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use wdi_model::columns::{ARABIC_INDICATOR_NAME, INDICATOR_NAME, SERIES_CODE};
use wdi_model::{IndicatorCatalog, IndicatorInfo};

use crate::error::{IngestError, Result, check_readable, normalize_header};

#[derive(Debug, Deserialize)]
struct SeriesRecord {
    #[serde(rename = "Series Code")]
    code: String,
    #[serde(rename = "Indicator Name")]
    name: String,
    #[serde(rename = "Arabic Indicator Name")]
    arabic_name: String,
}

/// Reads the Series Code lookup table into an [`IndicatorCatalog`].
///
/// Rows keep file order. Rows with a blank code are skipped; a repeated code
/// keeps its first row and is logged.
///
/// # Errors
///
/// Fails when the file is missing, a required column is absent, or a record
/// cannot be decoded.
pub fn read_indicator_catalog(path: &Path) -> Result<IndicatorCatalog> {
    check_readable(path)?;

    let record_error = |source: csv::Error| IngestError::Record {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(record_error)?;

    let headers: StringRecord = reader
        .headers()
        .map_err(record_error)?
        .iter()
        .map(normalize_header)
        .collect();
    for column in [SERIES_CODE, INDICATOR_NAME, ARABIC_INDICATOR_NAME] {
        if !headers.iter().any(|header| header == column) {
            return Err(IngestError::MissingColumn {
                column: column.to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    reader.set_headers(headers);

    let mut catalog = IndicatorCatalog::new();
    let mut skipped = 0usize;
    for record in reader.deserialize::<SeriesRecord>() {
        let record = record.map_err(record_error)?;
        if record.code.is_empty() {
            skipped += 1;
            continue;
        }
        let code = record.code.clone();
        if !catalog.insert(IndicatorInfo::new(
            record.code,
            record.name,
            record.arabic_name,
        )) {
            tracing::warn!(
                path = %path.display(),
                series_code = %code,
                "duplicate series code, keeping the first entry"
            );
        }
    }

    tracing::info!(
        path = %path.display(),
        indicators = catalog.len(),
        skipped,
        "loaded indicator metadata"
    );
    Ok(catalog)
}
