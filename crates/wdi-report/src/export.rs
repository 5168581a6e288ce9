//! Chart export for the external charting renderer.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{ReportError, Result};
use crate::page::Page;

/// File name for the `index`-th chart of a page, e.g.
/// `01-sp-pop-totl-over-years-for-france.json`.
pub fn chart_file_name(index: usize, title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for ch in title.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    format!("{:02}-{}.json", index + 1, if slug.is_empty() { "chart" } else { slug })
}

/// Writes every chart of `page` into `dir` as a pretty-printed Plotly
/// figure and returns the written paths in page order. `dir` is only created
/// when the page has charts.
pub fn export_charts(page: &Page, dir: &Path) -> Result<Vec<PathBuf>> {
    if page.charts().next().is_none() {
        return Ok(Vec::new());
    }
    fs::create_dir_all(dir).map_err(|source| ReportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut written = Vec::new();
    for (index, chart) in page.charts().enumerate() {
        let path = dir.join(chart_file_name(index, &chart.title));
        let json = serde_json::to_string_pretty(&chart.to_plotly()).map_err(|source| {
            ReportError::Serialize {
                title: chart.title.clone(),
                source,
            }
        })?;
        fs::write(&path, json).map_err(|source| ReportError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), traces = chart.traces.len(), "chart exported");
        written.push(path);
    }
    Ok(written)
}
