//! Tests for wdi-model types.

use wdi_model::{
    Action, FilteredSeries, IndicatorCatalog, IndicatorInfo, MAX_COMPARED_COUNTRIES, ModelError,
    Selection, SeriesPoint, View,
};

#[test]
fn comparison_keeps_country_order() {
    let countries = vec![
        "Japan".to_string(),
        "Egypt, Arab Rep.".to_string(),
        "France".to_string(),
    ];
    let selection = Selection::compare(countries.clone(), "SP.POP.TOTL").unwrap();
    assert_eq!(selection.view(), View::Comparisons);
    assert_eq!(selection.countries(), countries.as_slice());
    assert_eq!(selection.country(), Some("Japan"));
}

#[test]
fn comparison_bounds() {
    assert_eq!(
        Selection::compare(Vec::new(), "SP.POP.TOTL").unwrap_err(),
        ModelError::NoCountries {
            view: "Comparisons"
        }
    );
    let four = vec!["A".to_string(); MAX_COMPARED_COUNTRIES + 1];
    assert!(matches!(
        Selection::compare(four, "SP.POP.TOTL"),
        Err(ModelError::TooManyCountries { count: 4, max: 3, .. })
    ));
    let duplicates = vec!["France".to_string(); MAX_COMPARED_COUNTRIES];
    assert!(Selection::compare(duplicates, "SP.POP.TOTL").is_ok());
}

#[test]
fn selection_reads_json_lines() {
    let line = r#"{"view":"comparisons","countries":["France","Japan"],"indicator":"SP.POP.TOTL","action":"visualize"}"#;
    let selection: Selection = serde_json::from_str(line).unwrap();
    assert_eq!(selection.countries().len(), 2);
    assert!(selection.triggered(Action::Visualize));
    assert!(!selection.triggered(Action::ShowSamples));

    let home: Selection = serde_json::from_str(r#"{"view":"home"}"#).unwrap();
    assert_eq!(home, Selection::home());
}

#[test]
fn selection_json_enforces_bounds() {
    let line = r#"{"view":"check-indicators","countries":[],"indicator":"SP.POP.TOTL"}"#;
    let err = serde_json::from_str::<Selection>(line).unwrap_err();
    assert!(err.to_string().contains("at least one country"));
}

#[test]
fn selection_serializes_without_empty_action() {
    let json = serde_json::to_value(Selection::check("France", "SP.POP.TOTL")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "view": "check-indicators",
            "countries": ["France"],
            "indicator": "SP.POP.TOTL"
        })
    );
}

#[test]
fn series_span_and_columns() {
    let series = FilteredSeries::new(
        "France",
        "SP.POP.TOTL",
        vec![SeriesPoint::new(2000, 1.0), SeriesPoint::new(2003, 4.0)],
    );
    assert_eq!(series.year_span(), Some((2000, 2003)));
    assert_eq!(series.years(), vec![2000, 2003]);
    assert_eq!(series.values(), vec![1.0, 4.0]);
    assert!(FilteredSeries::empty("France", "X").year_span().is_none());
}

#[test]
fn catalog_keeps_first_duplicate_and_file_order() {
    let catalog: IndicatorCatalog = [
        IndicatorInfo::new("SP.POP.TOTL", "Population, total", "عدد السكان"),
        IndicatorInfo::new("NY.GDP.MKTP.CD", "GDP (current US$)", "الناتج المحلي"),
        IndicatorInfo::new("SP.POP.TOTL", "Duplicate", "مكرر"),
    ]
    .into_iter()
    .collect();

    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.codes().collect::<Vec<_>>(),
        vec!["SP.POP.TOTL", "NY.GDP.MKTP.CD"]
    );
    assert_eq!(
        catalog.get("SP.POP.TOTL").map(|info| info.name.as_str()),
        Some("Population, total")
    );
    assert!(catalog.get("EN.ATM.CO2E.PC").is_none());
}
