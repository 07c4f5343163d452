//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - The forecast data model and its single failure kind
//! - Abstraction over where the forecast comes from, plus the HTTP source
//! - The forecast list component: load once per mount, render one of three views
//! - Configuration handling
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod component;
pub mod config;
pub mod error;
pub mod model;
pub mod source;
pub mod view;

pub use component::{ForecastList, ForecastState};
pub use config::Config;
pub use error::FetchError;
pub use model::WeatherEntry;
pub use source::{DEFAULT_ENDPOINT, ForecastSource, HttpForecastSource};
pub use view::{EntryBlock, View};
