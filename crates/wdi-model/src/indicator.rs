//! Indicator metadata.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Display names for one Series Code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorInfo {
    pub code: String,
    pub name: String,
    pub arabic_name: String,
}

impl IndicatorInfo {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        arabic_name: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            arabic_name: arabic_name.into(),
        }
    }
}

/// Ordered lookup of indicator metadata keyed by Series Code.
///
/// Entries keep the order of the source file, which is also the order of
/// the indicator picker. A code seen twice keeps its first entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndicatorCatalog {
    entries: Vec<IndicatorInfo>,
    #[serde(skip)]
    by_code: BTreeMap<String, usize>,
}

impl IndicatorCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry. Returns `false` (and drops the entry) when the code is
    /// already present.
    pub fn insert(&mut self, info: IndicatorInfo) -> bool {
        if self.by_code.contains_key(&info.code) {
            return false;
        }
        self.by_code.insert(info.code.clone(), self.entries.len());
        self.entries.push(info);
        true
    }

    pub fn get(&self, code: &str) -> Option<&IndicatorInfo> {
        self.by_code.get(code).map(|&idx| &self.entries[idx])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|info| info.code.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IndicatorInfo> {
        self.entries.iter()
    }

    pub fn first(&self) -> Option<&IndicatorInfo> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<IndicatorInfo> for IndicatorCatalog {
    fn from_iter<I: IntoIterator<Item = IndicatorInfo>>(iter: I) -> Self {
        let mut catalog = IndicatorCatalog::new();
        for info in iter {
            catalog.insert(info);
        }
        catalog
    }
}

impl<'a> IntoIterator for &'a IndicatorCatalog {
    type Item = &'a IndicatorInfo;
    type IntoIter = std::slice::Iter<'a, IndicatorInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
