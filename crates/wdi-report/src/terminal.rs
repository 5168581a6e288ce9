//! Terminal rendering of pages.

use std::fmt::Write;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use wdi_common::{format_value, parse_number};
use wdi_model::IndicatorInfo;

use crate::chart::ChartSpec;
use crate::page::{Block, Page, TableBlock};

/// Draws pages as plain text with `comfy-table` tables.
///
/// Charts are not drawn; each chart is listed with one row per trace so the
/// terminal output still shows what would be plotted.
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    width: u16,
    styled: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self {
            width: 120,
            styled: true,
        }
    }
}

impl TerminalRenderer {
    pub fn new(width: u16) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Disable colors and bold text (for logs, files and tests).
    #[must_use]
    pub fn plain(mut self) -> Self {
        self.styled = false;
        self
    }

    pub fn render(&self, page: &Page) -> String {
        let mut out = String::new();
        self.underline(&mut out, &page.title, '=');
        for block in &page.blocks {
            out.push('\n');
            match block {
                Block::Heading { level, text } => {
                    self.underline(&mut out, text, if *level <= 1 { '=' } else { '-' });
                }
                Block::Paragraph { text } => {
                    let _ = writeln!(out, "{text}");
                }
                Block::Bullets { items } => {
                    for item in items {
                        let _ = writeln!(out, "  - {item}");
                    }
                }
                Block::Indicator { info } => self.indicator(&mut out, info),
                Block::Table { table } => {
                    let _ = writeln!(out, "{}", self.data_table(table));
                }
                Block::Chart { chart } => {
                    let _ = writeln!(out, "{}", self.chart_table(chart));
                }
                Block::Notice { text } => {
                    let _ = writeln!(out, "Note: {text}");
                }
            }
        }
        out
    }

    fn underline(&self, out: &mut String, text: &str, mark: char) {
        let rule: String = std::iter::repeat_n(mark, text.chars().count()).collect();
        let _ = writeln!(out, "{text}\n{rule}");
    }

    fn indicator(&self, out: &mut String, info: &IndicatorInfo) {
        let width = usize::from(self.width);
        let _ = writeln!(out, "{}: {}", info.code, info.name);
        if !info.arabic_name.is_empty() {
            let _ = writeln!(out, "{:>width$}", info.arabic_name);
        }
    }

    fn data_table(&self, block: &TableBlock) -> Table {
        let mut table = self.table();
        table.set_header(block.headers.iter().map(|header| self.header_cell(header)));
        for row in &block.rows {
            table.add_row(row.iter().map(|value| {
                let cell = Cell::new(value);
                if parse_number(value).is_some() {
                    cell.set_alignment(CellAlignment::Right)
                } else {
                    cell
                }
            }));
        }
        table
    }

    fn chart_table(&self, chart: &ChartSpec) -> Table {
        let mut table = self.table();
        table.set_header(vec![
            self.header_cell(&format!("{} chart: {}", chart.kind.as_str(), chart.title)),
            self.header_cell("Points"),
            self.header_cell("Years"),
            self.header_cell("Latest value"),
        ]);
        for trace in &chart.traces {
            let years = match (trace.x.first(), trace.x.last()) {
                (Some(first), Some(last)) => format!("{first}-{last}"),
                _ => "-".to_string(),
            };
            let latest = trace
                .y
                .last()
                .map(|value| format_value(*value))
                .unwrap_or_else(|| "-".to_string());
            table.add_row(vec![
                Cell::new(&trace.name),
                Cell::new(trace.len()).set_alignment(CellAlignment::Right),
                Cell::new(years),
                Cell::new(latest).set_alignment(CellAlignment::Right),
            ]);
        }
        table
    }

    /// Empty table in the explorer's style, at this renderer's width.
    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_width(self.width);
        if !self.styled {
            table.force_no_tty();
        }
        table
    }

    /// Header cell, bold cyan unless the renderer is plain.
    pub fn header_cell(&self, label: &str) -> Cell {
        let cell = Cell::new(label);
        if self.styled {
            cell.fg(Color::Cyan).add_attribute(Attribute::Bold)
        } else {
            cell
        }
    }
}
