//! View composition.
//!
//! Each interaction calls [`render`] with the store and a fresh selection;
//! the page is rebuilt from the source tables every time and nothing is kept
//! between calls.

use tracing::{debug, info_span};
use wdi_core::{DatasetStore, compare, project};
use wdi_model::{Action, Selection, View};

use crate::chart::{comparison_chart, series_charts};
use crate::page::{Page, TableBlock};

/// Rows shown by the Home sample toggle.
pub const SAMPLE_ROWS: usize = 5;

pub const NO_DATA_SINGLE: &str = "No data available for the selected indicator and country.";
pub const NO_DATA_COMPARISON: &str =
    "No data available for the selected indicator and countries.";

const BANNER: &str = "Data Visualization of the World Bank Group";

const DESCRIPTION: &str = "The World Bank provides a comprehensive set of indicators that \
cover various aspects of global development. These indicators are used to monitor and analyze \
economic, social, and environmental trends across countries. They help policymakers, \
researchers, and the public understand development challenges and track progress towards \
global goals such as poverty reduction, education, health, and sustainability.";

const CATEGORIES: [&str; 6] = [
    "Economic Indicators: GDP, inflation rates, trade balances, and employment statistics.",
    "Social Indicators: Education enrollment rates, literacy rates, health outcomes, and demographic data.",
    "Environmental Indicators: Data on natural resources, pollution levels, and climate change impacts.",
    "Poverty and Inequality Indicators: Measures of income distribution, poverty rates, and social inclusion.",
    "Infrastructure Indicators: Access to clean water, sanitation, electricity, and transportation networks.",
    "Governance Indicators: Data on political stability, government effectiveness, and regulatory quality.",
];

/// Builds the page for `selection`.
pub fn render(store: &DatasetStore, selection: &Selection) -> Page {
    let span = info_span!("render", view = selection.view().as_str());
    let _guard = span.enter();
    match selection.view() {
        View::Home => render_home(store, selection.triggered(Action::ShowSamples)),
        View::CheckIndicators => render_check(
            store,
            selection.country().unwrap_or_default(),
            selection.indicator(),
            selection.triggered(Action::Visualize),
        ),
        View::Comparisons => render_comparisons(
            store,
            selection.countries(),
            selection.indicator(),
            selection.triggered(Action::Visualize),
        ),
    }
}

pub fn render_home(store: &DatasetStore, show_samples: bool) -> Page {
    let mut page = Page::new(BANNER);
    page.heading(1, "Description of the World Bank Indicators")
        .paragraph(DESCRIPTION)
        .paragraph("Some key categories of World Bank indicators include:")
        .bullets(CATEGORIES)
        .paragraph(
            "Our implementation includes a selection of these indicators to provide insights \
             into global development trends and challenges. The selected indicators and their \
             translation are presented below:",
        );
    for info in store.catalog() {
        page.indicator(info.clone());
    }

    if show_samples {
        let sample = store.sample(SAMPLE_ROWS);
        let values = store.values().data();
        page.heading(2, "Sample of the Data Used")
            .table(TableBlock::from_frame(&sample))
            .paragraph(format!(
                "The full table holds {} rows and {} columns covering {} countries and {} indicators.",
                values.height(),
                values.width(),
                store.countries().len(),
                store.values().indicator_codes().len(),
            ));
    }
    page
}

pub fn render_check(store: &DatasetStore, country: &str, indicator: &str, visualize: bool) -> Page {
    let mut page = Page::new(View::CheckIndicators.label());
    page.paragraph(
        "This page allows you to explore and visualize various World Bank indicators used in \
         the project.",
    );

    let rows = store.country_rows(country);
    page.heading(2, format!("Data for Country: {country}"));
    if rows.height() == 0 {
        page.notice(format!("No rows found for {country}."));
    } else {
        page.table(TableBlock::from_frame(&rows));
    }

    describe_indicator(&mut page, store, indicator);

    if visualize {
        let series = project(store.values(), country, indicator);
        match series_charts(&series) {
            Some([line, bar]) => {
                page.chart(line).chart(bar);
            }
            None => {
                debug!(country, indicator, "no data to chart");
                page.notice(NO_DATA_SINGLE);
            }
        }
    }
    page
}

pub fn render_comparisons(
    store: &DatasetStore,
    countries: &[String],
    indicator: &str,
    visualize: bool,
) -> Page {
    let mut page = Page::new(View::Comparisons.label());
    page.paragraph(
        "This page allows you to compare and visualize various World Bank indicators for 3 \
         countries.",
    )
    .heading(2, "Selected Countries")
    .bullets(countries.iter().map(String::as_str));

    describe_indicator(&mut page, store, indicator);

    if visualize {
        let series = compare(store.values(), countries, indicator);
        let skipped: Vec<&str> = series
            .iter()
            .filter(|series| series.is_empty())
            .map(|series| series.country.as_str())
            .collect();
        if !skipped.is_empty() {
            debug!(indicator, ?skipped, "countries without data left out of the chart");
        }
        match comparison_chart(indicator, &series) {
            Some(chart) => {
                page.chart(chart);
            }
            None => {
                page.notice(NO_DATA_COMPARISON);
            }
        }
    }
    page
}

fn describe_indicator(page: &mut Page, store: &DatasetStore, indicator: &str) {
    page.heading(2, format!("Data for Indicator: {indicator}"));
    match store.indicator(indicator) {
        Some(info) => {
            page.indicator(info.clone());
        }
        None => {
            page.notice(format!(
                "{indicator} is not described in the indicator metadata table."
            ));
        }
    }
}
