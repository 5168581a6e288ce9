//! Page composition for the three views.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use wdi_core::DatasetStore;
use wdi_model::columns::{COUNTRY_NAME, YEAR};
use wdi_model::{Action, IndicatorCatalog, IndicatorInfo, Selection};
use wdi_report::{
    Block, ChartKind, NO_DATA_COMPARISON, NO_DATA_SINGLE, SAMPLE_ROWS, TerminalRenderer,
    chart_file_name, export_charts, render,
};

const EGYPT: &str = "Egypt, Arab Rep.";
const POP: &str = "SP.POP.TOTL";
const CO2: &str = "EN.ATM.CO2E.PC";

fn store() -> DatasetStore {
    let cols: Vec<Column> = vec![
        Series::new(
            COUNTRY_NAME.into(),
            &[EGYPT, EGYPT, EGYPT, "France", "France", "Japan", "Japan"],
        )
        .into_column(),
        Series::new(YEAR.into(), &[2000i64, 2001, 2002, 2000, 2001, 2000, 2001]).into_column(),
        Series::new(
            POP.into(),
            &[
                Some(68.8),
                Some(70.2),
                None,
                Some(60.9),
                Some(61.4),
                None,
                None,
            ],
        )
        .into_column(),
        Series::new(
            CO2.into(),
            &[Some(1.9), Some(2.0), Some(2.1), None, None, None, None],
        )
        .into_column(),
    ];
    let catalog: IndicatorCatalog = [
        IndicatorInfo::new(POP, "Population, total", "إجمالي عدد السكان"),
        IndicatorInfo::new(CO2, "CO2 emissions (metric tons per capita)", "انبعاثات الكربون"),
    ]
    .into_iter()
    .collect();
    DatasetStore::new(DataFrame::new(cols).unwrap(), catalog)
}

#[test]
fn home_lists_every_indicator_and_hides_samples_by_default() {
    let page = render(&store(), &Selection::home());

    let indicators: Vec<&str> = page
        .blocks
        .iter()
        .filter_map(|block| match block {
            Block::Indicator { info } => Some(info.code.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(indicators, vec![POP, CO2]);
    assert!(!page.blocks.iter().any(|b| matches!(b, Block::Table { .. })));
}

#[test]
fn home_sample_toggle_adds_leading_rows() {
    let page = render(&store(), &Selection::home().with_action(Action::ShowSamples));

    let table = page
        .blocks
        .iter()
        .find_map(|block| match block {
            Block::Table { table } => Some(table),
            _ => None,
        })
        .expect("sample table");
    assert_eq!(table.rows.len(), SAMPLE_ROWS);
    assert_eq!(table.headers, vec![COUNTRY_NAME, YEAR, POP, CO2]);
    assert_eq!(table.rows[2], vec![EGYPT, "2002", "", "2.1"]);
}

#[test]
fn check_without_button_shows_table_only() {
    let page = render(&store(), &Selection::check("France", POP));

    assert_eq!(page.charts().count(), 0);
    assert_eq!(page.notices().count(), 0);
    assert!(page.blocks.iter().any(
        |b| matches!(b, Block::Heading { text, .. } if text == "Data for Country: France")
    ));
}

#[test]
fn check_visualize_builds_line_and_bar() {
    let selection = Selection::check(EGYPT, POP).with_action(Action::Visualize);
    let page = render(&store(), &selection);

    let charts: Vec<_> = page.charts().collect();
    assert_eq!(charts.len(), 2);
    assert_eq!(charts[0].kind, ChartKind::Line);
    assert_eq!(charts[1].kind, ChartKind::Bar);
    insta::assert_snapshot!(charts[0].title, @"SP.POP.TOTL over Years for Egypt, Arab Rep.");
    insta::assert_snapshot!(charts[1].title, @"SP.POP.TOTL over Years for Egypt, Arab Rep. - Bar Chart");
    // 2002 is null for Egypt.
    assert_eq!(charts[0].traces[0].x, vec![2000, 2001]);
}

#[test]
fn check_visualize_without_data_shows_notice() {
    let selection = Selection::check("Japan", POP).with_action(Action::Visualize);
    let page = render(&store(), &selection);

    assert_eq!(page.charts().count(), 0);
    assert_eq!(page.notices().collect::<Vec<_>>(), vec![NO_DATA_SINGLE]);
}

#[test]
fn unknown_indicator_is_noted_not_fatal() {
    let selection = Selection::check(EGYPT, "NY.GDP.MKTP.CD").with_action(Action::Visualize);
    let page = render(&store(), &selection);

    let notices: Vec<&str> = page.notices().collect();
    assert_eq!(notices.len(), 2);
    assert!(notices[0].contains("not described"));
    assert_eq!(notices[1], NO_DATA_SINGLE);
}

#[test]
fn comparison_skips_countries_without_data() {
    let selection = Selection::compare(
        vec!["Japan".into(), "France".into(), EGYPT.into()],
        POP,
    )
    .unwrap()
    .with_action(Action::Visualize);
    let page = render(&store(), &selection);

    let charts: Vec<_> = page.charts().collect();
    assert_eq!(charts.len(), 1);
    let names: Vec<&str> = charts[0].traces.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["France", EGYPT]);
    insta::assert_snapshot!(charts[0].title, @"Comparison of SP.POP.TOTL over Years");
}

#[test]
fn comparison_without_any_data_shows_notice() {
    let selection = Selection::compare(vec!["France".into(), "Japan".into()], CO2)
        .unwrap()
        .with_action(Action::Visualize);
    let page = render(&store(), &selection);

    assert_eq!(page.charts().count(), 0);
    assert_eq!(page.notices().collect::<Vec<_>>(), vec![NO_DATA_COMPARISON]);
}

#[test]
fn rendering_is_repeatable() {
    let store = store();
    let selection = Selection::compare(vec![EGYPT.into(); 3], CO2)
        .unwrap()
        .with_action(Action::Visualize);

    let first = render(&store, &selection);
    let second = render(&store, &selection);

    assert_eq!(first, second);
    let chart = first.charts().next().unwrap();
    assert_eq!(chart.traces.len(), 3);
    assert_eq!(chart.traces[0], chart.traces[2]);
}

#[test]
fn terminal_output_lists_chart_traces() {
    let selection = Selection::check(EGYPT, CO2).with_action(Action::Visualize);
    let text = TerminalRenderer::new(160)
        .plain()
        .render(&render(&store(), &selection));

    assert!(text.contains("Data for Country: Egypt, Arab Rep."));
    assert!(text.contains("line chart: EN.ATM.CO2E.PC over Years for Egypt, Arab Rep."));
    assert!(text.contains("2000-2002"));
}

#[test]
fn charts_export_as_plotly_json() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let selection = Selection::check(EGYPT, POP).with_action(Action::Visualize);
    let page = render(&store(), &selection);

    let written = export_charts(&page, dir.path()).expect("export charts");

    assert_eq!(written.len(), 2);
    assert!(written[0].ends_with("01-sp-pop-totl-over-years-for-egypt-arab-rep.json"));
    let figure: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&written[1]).unwrap()).unwrap();
    assert_eq!(figure["data"][0]["type"], "bar");
    assert_eq!(figure["data"][0]["y"], serde_json::json!([68.8, 70.2]));
}

#[test]
fn chart_file_names_are_slugged() {
    assert_eq!(
        chart_file_name(0, "Comparison of SP.POP.TOTL over Years"),
        "01-comparison-of-sp-pop-totl-over-years.json"
    );
    assert_eq!(chart_file_name(9, "***"), "10-chart.json");
}
