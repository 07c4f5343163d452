use std::fmt;

use crate::{ForecastState, WeatherEntry};

pub const LOADING_TEXT: &str = "Loading...";
pub const HEADING: &str = "Weather Forecast";
pub const SEPARATOR: &str = " • ";

/// One forecast entry ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryBlock {
    pub date: String,
    pub temperature: String,
    pub summary: String,
}

impl From<&WeatherEntry> for EntryBlock {
    fn from(entry: &WeatherEntry) -> Self {
        Self {
            date: entry.date.clone(),
            temperature: entry.temperature_label(),
            summary: entry.summary.clone(),
        }
    }
}

/// What the forecast list shows for a given state. Exactly one of the
/// three is ever produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Loading,
    Error { message: String },
    Forecast { entries: Vec<EntryBlock> },
}

impl View {
    pub fn from_state(state: &ForecastState) -> Self {
        match state {
            ForecastState::Loading => View::Loading,
            ForecastState::Failed { message } => View::Error {
                message: message.clone(),
            },
            ForecastState::Loaded { entries } => View::Forecast {
                entries: entries.iter().map(EntryBlock::from).collect(),
            },
        }
    }

    /// Number of rendered forecast entries; zero for loading and error views.
    pub fn entry_count(&self) -> usize {
        match self {
            View::Forecast { entries } => entries.len(),
            _ => 0,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Loading => f.write_str(LOADING_TEXT),
            View::Error { message } => write!(f, "Error: {message}"),
            View::Forecast { entries } => {
                f.write_str(HEADING)?;
                for (index, entry) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(f, "\n{SEPARATOR}")?;
                    }
                    write!(
                        f,
                        "\nDate: {}\nTemperature: {}\nSummary: {}",
                        entry.date, entry.temperature, entry.summary
                    )?;
                }
                Ok(())
            }
        }
    }
}
