//! Renderer-independent page model.

use polars::prelude::DataFrame;
use serde::Serialize;
use wdi_common::cell_text;
use wdi_model::IndicatorInfo;

use crate::chart::ChartSpec;

/// Cell-level snapshot of a frame, already formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableBlock {
    pub caption: Option<String>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableBlock {
    pub fn from_frame(df: &DataFrame) -> Self {
        let headers = df
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect();
        let columns = df.get_columns();
        let rows = (0..df.height())
            .map(|idx| {
                columns
                    .iter()
                    .map(|column| column.get(idx).map(cell_text).unwrap_or_default())
                    .collect()
            })
            .collect();
        Self {
            caption: None,
            headers,
            rows,
        }
    }

    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    Bullets { items: Vec<String> },
    /// Series Code with its English name and right-to-left Arabic name.
    Indicator { info: IndicatorInfo },
    Table { table: TableBlock },
    Chart { chart: ChartSpec },
    /// Shown in place of content that could not be produced, such as a
    /// chart for a series with no data.
    Notice { text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn heading(&mut self, level: u8, text: impl Into<String>) -> &mut Self {
        self.blocks.push(Block::Heading {
            level,
            text: text.into(),
        });
        self
    }

    pub fn paragraph(&mut self, text: impl Into<String>) -> &mut Self {
        self.blocks.push(Block::Paragraph { text: text.into() });
        self
    }

    pub fn bullets<I, S>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocks.push(Block::Bullets {
            items: items.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn indicator(&mut self, info: IndicatorInfo) -> &mut Self {
        self.blocks.push(Block::Indicator { info });
        self
    }

    pub fn table(&mut self, table: TableBlock) -> &mut Self {
        self.blocks.push(Block::Table { table });
        self
    }

    pub fn chart(&mut self, chart: ChartSpec) -> &mut Self {
        self.blocks.push(Block::Chart { chart });
        self
    }

    pub fn notice(&mut self, text: impl Into<String>) -> &mut Self {
        self.blocks.push(Block::Notice { text: text.into() });
        self
    }

    pub fn charts(&self) -> impl Iterator<Item = &ChartSpec> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Chart { chart } => Some(chart),
            _ => None,
        })
    }

    pub fn notices(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Notice { text } => Some(text.as_str()),
            _ => None,
        })
    }
}
