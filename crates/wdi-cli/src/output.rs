//! Page output for the CLI and the session loop.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment};
use serde_json::json;
use tracing::info;
use wdi_core::DatasetStore;
use wdi_report::{Page, TerminalRenderer, export_charts};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Text with `comfy-table` tables.
    #[default]
    Pretty,
    /// One JSON document per page, on a single line.
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// Directory receiving the Plotly figures of each page.
    pub chart_dir: Option<PathBuf>,
    /// Colors and bold table headers in pretty output.
    pub styled: bool,
}

impl OutputOptions {
    pub fn renderer(&self) -> TerminalRenderer {
        if self.styled {
            TerminalRenderer::default()
        } else {
            TerminalRenderer::default().plain()
        }
    }
}

/// Writes `page` to `out` and exports its charts when a chart directory is
/// configured. Returns the exported chart paths.
pub fn write_page<W: Write>(
    out: &mut W,
    page: &Page,
    options: &OutputOptions,
) -> Result<Vec<PathBuf>> {
    match options.format {
        OutputFormat::Pretty => write!(out, "{}", options.renderer().render(page))?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, page).context("serialize page")?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    let Some(dir) = &options.chart_dir else {
        return Ok(Vec::new());
    };
    let written = export_charts(page, dir)
        .with_context(|| format!("export charts to {}", dir.display()))?;
    if !written.is_empty() {
        info!(dir = %dir.display(), charts = written.len(), "charts written");
    }
    Ok(written)
}

/// Writes a rejected session line: an `{"error", "line"}` object in JSON
/// mode so the stream stays one JSON document per line.
pub fn write_rejection<W: Write>(
    out: &mut W,
    line_no: usize,
    message: &str,
    options: &OutputOptions,
) -> Result<()> {
    match options.format {
        OutputFormat::Pretty => writeln!(out, "error: line {line_no}: {message}")?,
        OutputFormat::Json => writeln!(out, "{}", json!({ "error": message, "line": line_no }))?,
    }
    Ok(())
}

/// Country picker options, numbered in first-appearance order.
pub fn write_countries<W: Write>(
    out: &mut W,
    store: &DatasetStore,
    options: &OutputOptions,
) -> Result<()> {
    match options.format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(store.countries())?)?,
        OutputFormat::Pretty => {
            let renderer = options.renderer();
            let mut table = renderer.table();
            table.set_header(vec![
                renderer.header_cell("#"),
                renderer.header_cell("Country Name"),
            ]);
            for (index, country) in store.countries().iter().enumerate() {
                table.add_row(vec![
                    Cell::new(index + 1).set_alignment(CellAlignment::Right),
                    Cell::new(country),
                ]);
            }
            writeln!(out, "{table}")?;
        }
    }
    Ok(())
}

/// Described indicators with their English and Arabic names.
pub fn write_indicators<W: Write>(
    out: &mut W,
    store: &DatasetStore,
    options: &OutputOptions,
) -> Result<()> {
    match options.format {
        OutputFormat::Json => {
            let entries: Vec<_> = store.catalog().iter().collect();
            writeln!(out, "{}", serde_json::to_string(&entries)?)?;
        }
        OutputFormat::Pretty => {
            let renderer = options.renderer();
            let mut table = renderer.table();
            table.set_header(vec![
                renderer.header_cell("Series Code"),
                renderer.header_cell("Indicator Name"),
                renderer.header_cell("Arabic Indicator Name"),
            ]);
            for info in store.catalog() {
                table.add_row(vec![
                    Cell::new(&info.code),
                    Cell::new(&info.name),
                    Cell::new(&info.arabic_name).set_alignment(CellAlignment::Right),
                ]);
            }
            writeln!(out, "{table}")?;
        }
    }
    Ok(())
}
