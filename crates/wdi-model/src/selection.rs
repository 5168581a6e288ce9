//! User selections.
//!
//! A [`Selection`] is rebuilt on every interaction and never stored. It is
//! the only input the view renderer takes besides the dataset itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Maximum number of countries on the Comparisons view.
pub const MAX_COMPARED_COUNTRIES: usize = 3;

/// Page of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Home,
    CheckIndicators,
    Comparisons,
}

impl View {
    pub const ALL: [View; 3] = [View::Home, View::CheckIndicators, View::Comparisons];

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::CheckIndicators => "Check Indicators",
            View::Comparisons => "Comparisons",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            View::Home => "home",
            View::CheckIndicators => "check-indicators",
            View::Comparisons => "comparisons",
        }
    }

    /// Country count bounds accepted by this view.
    fn country_bounds(self) -> (usize, usize) {
        match self {
            View::Home => (0, MAX_COMPARED_COUNTRIES),
            View::CheckIndicators => (1, 1),
            View::Comparisons => (1, MAX_COMPARED_COUNTRIES),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for View {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self> {
        let normalized = value.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        match normalized.as_str() {
            "home" => Ok(View::Home),
            "check-indicators" | "check" => Ok(View::CheckIndicators),
            "comparisons" | "compare" => Ok(View::Comparisons),
            _ => Err(ModelError::UnknownView(value.to_string())),
        }
    }
}

/// Button pressed during the interaction, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// Home: show a sample of the loaded data.
    ShowSamples,
    /// Check Indicators / Comparisons: chart the selection.
    Visualize,
}

/// The user's choices for one render pass.
///
/// Home ignores countries and indicator and may carry none. Check Indicators
/// takes exactly one country; Comparisons takes one to
/// [`MAX_COMPARED_COUNTRIES`], in the order they are charted. Duplicates are
/// allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SelectionRecord")]
pub struct Selection {
    view: View,
    countries: Vec<String>,
    indicator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<Action>,
}

impl Selection {
    pub fn new(view: View, countries: Vec<String>, indicator: impl Into<String>) -> Result<Self> {
        let (min, max) = view.country_bounds();
        if countries.len() < min {
            return Err(ModelError::NoCountries {
                view: view.label(),
            });
        }
        if countries.len() > max {
            return Err(ModelError::TooManyCountries {
                view: view.label(),
                count: countries.len(),
                max,
            });
        }
        Ok(Self {
            view,
            countries,
            indicator: indicator.into(),
            action: None,
        })
    }

    pub fn home() -> Self {
        Self {
            view: View::Home,
            countries: Vec::new(),
            indicator: String::new(),
            action: None,
        }
    }

    pub fn check(country: impl Into<String>, indicator: impl Into<String>) -> Self {
        Self {
            view: View::CheckIndicators,
            countries: vec![country.into()],
            indicator: indicator.into(),
            action: None,
        }
    }

    pub fn compare(countries: Vec<String>, indicator: impl Into<String>) -> Result<Self> {
        Self::new(View::Comparisons, countries, indicator)
    }

    #[must_use]
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// First selected country (the only one on Check Indicators).
    pub fn country(&self) -> Option<&str> {
        self.countries.first().map(String::as_str)
    }

    pub fn indicator(&self) -> &str {
        &self.indicator
    }

    pub fn action(&self) -> Option<Action> {
        self.action
    }

    pub fn triggered(&self, action: Action) -> bool {
        self.action == Some(action)
    }
}

#[derive(Deserialize)]
struct SelectionRecord {
    view: View,
    #[serde(default)]
    countries: Vec<String>,
    #[serde(default)]
    indicator: String,
    #[serde(default)]
    action: Option<Action>,
}

impl TryFrom<SelectionRecord> for Selection {
    type Error = ModelError;

    fn try_from(record: SelectionRecord) -> Result<Self> {
        let selection = Selection::new(record.view, record.countries, record.indicator)?;
        Ok(match record.action {
            Some(action) => selection.with_action(action),
            None => selection,
        })
    }
}
