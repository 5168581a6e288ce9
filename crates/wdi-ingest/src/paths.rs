use std::path::{Path, PathBuf};

/// Value table location relative to the working directory.
pub const DEFAULT_VALUES_FILE: &str = "dataset/ESGData_imputed.csv";
/// Metadata table location relative to the working directory.
pub const DEFAULT_METADATA_FILE: &str = "dataset/ESG_translated_Series.csv";

/// Locations of the two source tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub values: PathBuf,
    pub metadata: PathBuf,
}

impl DataPaths {
    pub fn new(values: impl Into<PathBuf>, metadata: impl Into<PathBuf>) -> Self {
        Self {
            values: values.into(),
            metadata: metadata.into(),
        }
    }

    /// Both tables under `dir`, using the default file names.
    pub fn in_dir(dir: &Path) -> Self {
        let file_name = |default: &str| {
            Path::new(default)
                .file_name()
                .map(|name| dir.join(name))
                .unwrap_or_else(|| dir.join(default))
        };
        Self {
            values: file_name(DEFAULT_VALUES_FILE),
            metadata: file_name(DEFAULT_METADATA_FILE),
        }
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::new(DEFAULT_VALUES_FILE, DEFAULT_METADATA_FILE)
    }
}
