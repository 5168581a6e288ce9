//! CLI library components for the indicator explorer.

pub mod logging;
pub mod output;
pub mod session;
