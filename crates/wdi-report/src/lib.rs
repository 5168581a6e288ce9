//! Presentation layer for the indicator explorer.
//!
//! This crate turns filtered series into something a person can look at:
//!
//! - **Charts**: [`ChartSpec`] values exported as Plotly figures
//! - **Pages**: one [`Page`] per view, composed by [`render`] from the
//!   dataset store and the current selection
//! - **Terminal**: [`TerminalRenderer`] draws a page with `comfy-table`
//! - **Export**: [`export_charts`] writes every chart of a page as JSON

mod chart;
mod error;
mod export;
mod page;
mod terminal;
mod views;

pub use chart::{ChartKind, ChartSpec, Trace, TraceMode, comparison_chart, series_charts};
pub use error::{ReportError, Result};
pub use export::{chart_file_name, export_charts};
pub use page::{Block, Page, TableBlock};
pub use terminal::TerminalRenderer;
pub use views::{
    NO_DATA_COMPARISON, NO_DATA_SINGLE, SAMPLE_ROWS, render, render_check, render_comparisons,
    render_home,
};
