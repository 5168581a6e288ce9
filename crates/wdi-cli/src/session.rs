//! Interactive session over JSON lines.
//!
//! Each non-blank input line is one [`Selection`], for example
//!
//! ```text
//! {"view":"comparisons","countries":["Egypt, Arab Rep.","France"],"indicator":"SP.POP.TOTL","action":"visualize"}
//! ```
//!
//! and produces one page on the output. A line that does not describe a
//! valid selection produces an error line instead (`error: line N: ...`, or
//! an `{"error", "line"}` object with `--format json`) and the session goes
//! on with the next one.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};
use wdi_core::DatasetStore;
use wdi_model::{Selection, View};
use wdi_report::render;

use crate::output::{OutputOptions, write_page, write_rejection};

/// Counts reported when the input is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub rendered: usize,
    pub rejected: usize,
}

/// Runs the session until `input` reaches end of file.
///
/// Only I/O failures end the session early; malformed selections are
/// reported on `output` and counted in [`SessionStats::rejected`].
pub fn run_session<R, W>(
    store: &DatasetStore,
    input: R,
    output: &mut W,
    options: &OutputOptions,
) -> Result<SessionStats>
where
    R: BufRead,
    W: Write,
{
    let span = info_span!("session");
    let _guard = span.enter();
    let mut stats = SessionStats::default();

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("read session line {line_no}"))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let selection = match serde_json::from_str::<Selection>(line) {
            Ok(selection) => fill_indicator(store, selection),
            Err(error) => {
                warn!(line = line_no, %error, "selection rejected");
                write_rejection(output, line_no, &error.to_string(), options)?;
                stats.rejected += 1;
                continue;
            }
        };

        let page = render(store, &selection);
        let page_options = OutputOptions {
            chart_dir: options
                .chart_dir
                .as_ref()
                .map(|dir| page_chart_dir(dir, line_no)),
            ..options.clone()
        };
        write_page(output, &page, &page_options)?;
        stats.rendered += 1;
    }

    info!(
        rendered = stats.rendered,
        rejected = stats.rejected,
        "session ended"
    );
    Ok(stats)
}

/// A selection without an indicator uses the first described indicator,
/// as the dashboard's indicator selector does.
fn fill_indicator(store: &DatasetStore, selection: Selection) -> Selection {
    if selection.view() == View::Home || !selection.indicator().is_empty() {
        return selection;
    }
    let Some(indicator) = store.default_indicator() else {
        return selection;
    };
    let filled = Selection::new(
        selection.view(),
        selection.countries().to_vec(),
        indicator,
    );
    match (filled, selection.action()) {
        (Ok(filled), Some(action)) => filled.with_action(action),
        (Ok(filled), None) => filled,
        (Err(_), _) => selection,
    }
}

/// Charts of the page rendered for `line_no` go to their own directory so
/// later lines do not overwrite them.
fn page_chart_dir(root: &std::path::Path, line_no: usize) -> PathBuf {
    root.join(format!("line-{line_no:04}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_dirs_are_numbered_by_line() {
        let dir = page_chart_dir(std::path::Path::new("charts"), 7);
        assert_eq!(dir, PathBuf::from("charts/line-0007"));
    }
}
