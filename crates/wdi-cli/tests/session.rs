//! Integration tests for the JSON-lines session.

use std::io::Cursor;

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use wdi_cli::output::{
    OutputFormat, OutputOptions, write_countries, write_indicators, write_page,
};
use wdi_cli::session::{SessionStats, run_session};
use wdi_core::DatasetStore;
use wdi_model::{IndicatorCatalog, IndicatorInfo, Selection};

const EGYPT: &str = "Egypt, Arab Rep.";

fn store() -> DatasetStore {
    let cols: Vec<Column> = vec![
        Series::new("Country Name".into(), &[EGYPT, EGYPT, "France", "France"]).into_column(),
        Series::new("Year".into(), &[2000i64, 2001, 2000, 2001]).into_column(),
        Series::new(
            "SP.POP.TOTL".into(),
            &[Some(68.8), Some(70.2), Some(60.9), None],
        )
        .into_column(),
    ];
    let catalog: IndicatorCatalog = [IndicatorInfo::new(
        "SP.POP.TOTL",
        "Population, total",
        "إجمالي عدد السكان",
    )]
    .into_iter()
    .collect();
    DatasetStore::new(DataFrame::new(cols).unwrap(), catalog)
}

fn json_options() -> OutputOptions {
    OutputOptions {
        format: OutputFormat::Json,
        ..OutputOptions::default()
    }
}

fn run(input: &str, options: &OutputOptions) -> (SessionStats, String) {
    let mut output = Vec::new();
    let stats = run_session(&store(), Cursor::new(input), &mut output, options).unwrap();
    (stats, String::from_utf8(output).unwrap())
}

#[test]
fn each_line_renders_one_page() {
    let input = r#"{"view":"home"}
{"view":"check-indicators","countries":["France"],"indicator":"SP.POP.TOTL","action":"visualize"}
"#;

    let (stats, output) = run(input, &json_options());

    assert_eq!(stats, SessionStats { rendered: 2, rejected: 0 });
    let pages: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(pages[0]["title"], "Data Visualization of the World Bank Group");
    assert_eq!(pages[1]["title"], "Check Indicators");
    let charts: Vec<_> = pages[1]["blocks"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|block| block["kind"] == "chart")
        .collect();
    assert_eq!(charts.len(), 2);
    assert_eq!(charts[0]["chart"]["traces"][0]["x"], serde_json::json!([2000]));
}

#[test]
fn malformed_lines_are_reported_and_skipped() {
    let input = r#"not json
{"view":"comparisons","countries":["France","Japan","Chile","Peru"],"indicator":"SP.POP.TOTL"}

{"view":"comparisons","countries":["France",""],"indicator":"SP.POP.TOTL","action":"visualize"}
"#;

    let (stats, output) = run(input, &json_options());

    assert_eq!(stats, SessionStats { rendered: 1, rejected: 2 });
    // Every output line stays a JSON document.
    let lines: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["line"], 1);
    assert_eq!(lines[1]["line"], 2);
    assert!(lines[1]["error"].as_str().unwrap().contains("at most 3"));
    assert_eq!(lines[2]["title"], "Comparisons");
}

#[test]
fn pretty_sessions_report_rejections_as_text() {
    let input = "{\"view\":\"nowhere\"}\n{\"view\":\"home\"}\n";

    let (stats, output) = run(input, &OutputOptions::default());

    assert_eq!(stats, SessionStats { rendered: 1, rejected: 1 });
    assert!(output.lines().next().unwrap().starts_with("error: line 1:"));
    assert!(output.contains("Data Visualization of the World Bank Group"));
}

#[test]
fn missing_indicator_falls_back_to_first_described() {
    let input = r#"{"view":"check-indicators","countries":["Egypt, Arab Rep."],"action":"visualize"}"#;
    let options = OutputOptions::default();

    let (stats, output) = run(input, &options);

    assert_eq!(stats.rendered, 1);
    assert!(output.contains("SP.POP.TOTL over Years for Egypt, Arab Rep."));
}

#[test]
fn session_charts_are_exported_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let options = OutputOptions {
        chart_dir: Some(dir.path().to_path_buf()),
        ..json_options()
    };
    let input = r#"{"view":"home"}
{"view":"check-indicators","countries":["Egypt, Arab Rep."],"indicator":"SP.POP.TOTL","action":"visualize"}
"#;

    run(input, &options);

    assert!(!dir.path().join("line-0001").exists());
    let line_dir = dir.path().join("line-0002");
    assert!(line_dir.join("01-sp-pop-totl-over-years-for-egypt-arab-rep.json").is_file());
    assert!(line_dir.join("02-sp-pop-totl-over-years-for-egypt-arab-rep-bar-chart.json").is_file());
}

#[test]
fn pretty_pages_are_plain_text() {
    let page = wdi_report::render(&store(), &Selection::check(EGYPT, "SP.POP.TOTL"));
    let mut out = Vec::new();

    let written = write_page(&mut out, &page, &OutputOptions::default()).unwrap();

    assert!(written.is_empty());
    let text = String::from_utf8(out).unwrap();
    insta::assert_snapshot!(text.lines().next().unwrap(), @"Check Indicators");
    assert!(text.contains("Data for Country: Egypt, Arab Rep."));
    assert!(!text.contains('\u{1b}'));
}

#[test]
fn plain_listings_have_no_color_codes() {
    let store = store();
    let mut out = Vec::new();

    write_countries(&mut out, &store, &OutputOptions::default()).unwrap();
    write_indicators(&mut out, &store, &OutputOptions::default()).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("France"));
    assert!(text.contains("Population, total"));
    assert!(!text.contains('\u{1b}'));
}

#[test]
fn json_listings_keep_first_appearance_order() {
    let mut out = Vec::new();

    write_countries(&mut out, &store(), &json_options()).unwrap();

    let countries: Vec<String> = serde_json::from_slice(&out).unwrap();
    assert_eq!(countries, vec![EGYPT, "France"]);
}
