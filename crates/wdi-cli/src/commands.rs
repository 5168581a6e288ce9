use std::io;

use anyhow::{Context, Result, anyhow};
use tracing::info_span;
use wdi_core::DatasetStore;
use wdi_ingest::DataPaths;
use wdi_model::{Action, MAX_COMPARED_COUNTRIES, Selection};
use wdi_report::render;

use wdi_cli::output::{OutputOptions, write_countries, write_indicators, write_page};
use wdi_cli::session::{SessionStats, run_session};

use crate::cli::{CheckArgs, CompareArgs, HomeArgs};

pub fn load_store(paths: &DataPaths) -> Result<DatasetStore> {
    let span = info_span!("load", values = %paths.values.display());
    let _guard = span.enter();
    DatasetStore::load(paths).context("load dataset")
}

pub fn run_home(store: &DatasetStore, args: &HomeArgs, options: &OutputOptions) -> Result<()> {
    let mut selection = Selection::home();
    if args.samples {
        selection = selection.with_action(Action::ShowSamples);
    }
    show(store, &selection, options)
}

pub fn run_check(store: &DatasetStore, args: &CheckArgs, options: &OutputOptions) -> Result<()> {
    let country = match &args.country {
        Some(country) => country.clone(),
        None => default_country(store)?,
    };
    let indicator = indicator_or_default(store, args.indicator.as_deref())?;
    let mut selection = Selection::check(country, indicator);
    if args.visualize {
        selection = selection.with_action(Action::Visualize);
    }
    show(store, &selection, options)
}

pub fn run_compare(
    store: &DatasetStore,
    args: &CompareArgs,
    options: &OutputOptions,
) -> Result<()> {
    let countries = compared_countries(&args.countries, store.default_country())?;
    let indicator = indicator_or_default(store, args.indicator.as_deref())?;
    let mut selection = Selection::compare(countries, indicator)?;
    if args.visualize {
        selection = selection.with_action(Action::Visualize);
    }
    show(store, &selection, options)
}

pub fn run_countries(store: &DatasetStore, options: &OutputOptions) -> Result<()> {
    write_countries(&mut io::stdout().lock(), store, options)
}

pub fn run_indicators(store: &DatasetStore, options: &OutputOptions) -> Result<()> {
    write_indicators(&mut io::stdout().lock(), store, options)
}

pub fn run_interactive(store: &DatasetStore, options: &OutputOptions) -> Result<SessionStats> {
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    run_session(store, stdin, &mut stdout, options)
}

fn show(store: &DatasetStore, selection: &Selection, options: &OutputOptions) -> Result<()> {
    let page = render(store, selection);
    let mut stdout = io::stdout().lock();
    write_page(&mut stdout, &page, options)?;
    Ok(())
}

fn default_country(store: &DatasetStore) -> Result<String> {
    store
        .default_country()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("the value table has no countries"))
}

fn indicator_or_default(store: &DatasetStore, indicator: Option<&str>) -> Result<String> {
    match indicator {
        Some(indicator) => Ok(indicator.to_string()),
        None => store
            .default_indicator()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("the metadata table describes no indicators")),
    }
}

/// Countries given on the command line, or the default country in every
/// selector when none are given.
fn compared_countries(given: &[String], default: Option<&str>) -> Result<Vec<String>> {
    if !given.is_empty() {
        return Ok(given.to_vec());
    }
    let default = default.ok_or_else(|| anyhow!("the value table has no countries"))?;
    Ok(vec![default.to_string(); MAX_COMPARED_COUNTRIES])
}
