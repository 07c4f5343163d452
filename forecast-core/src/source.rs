use crate::{FetchError, WeatherEntry};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod http;

pub use http::HttpForecastSource;

/// Endpoint the forecast is read from unless configured otherwise.
pub const DEFAULT_ENDPOINT: &str = "https://localhost:7250/weatherforecast";

/// Where a forecast list comes from.
///
/// Each call to `fetch` is one outbound read; callers decide how often to call it.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    async fn fetch(&self) -> Result<Vec<WeatherEntry>, FetchError>;
}

#[async_trait]
impl<T: ForecastSource + ?Sized> ForecastSource for std::sync::Arc<T> {
    async fn fetch(&self) -> Result<Vec<WeatherEntry>, FetchError> {
        (**self).fetch().await
    }
}
