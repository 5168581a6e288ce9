use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("the {view} view needs at least one country")]
    NoCountries { view: &'static str },
    #[error("the {view} view accepts at most {max} countries, got {count}")]
    TooManyCountries {
        view: &'static str,
        count: usize,
        max: usize,
    },
    #[error("unknown view '{0}' (expected home, check-indicators or comparisons)")]
    UnknownView(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
