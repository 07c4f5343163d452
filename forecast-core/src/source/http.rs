use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::{Config, FetchError, WeatherEntry};

use super::ForecastSource;

/// Reads the forecast list with a plain `GET` against a single endpoint.
#[derive(Debug, Clone)]
pub struct HttpForecastSource {
    endpoint: String,
    http: Client,
}

impl HttpForecastSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(endpoint, Client::new())
    }

    pub fn with_client(endpoint: impl Into<String>, http: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }

    /// Build a source from the on-disk configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_client(config.endpoint(), http))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ForecastSource for HttpForecastSource {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch(&self) -> Result<Vec<WeatherEntry>, FetchError> {
        debug!("Requesting forecast");

        let res = self.http.get(&self.endpoint).send().await?;

        let status = res.status();
        if !status.is_success() {
            warn!(%status, "Forecast request rejected");
            return Err(FetchError::status(status.as_u16()));
        }

        let body = res.text().await?;
        let entries: Vec<WeatherEntry> = serde_json::from_str(&body)?;

        debug!(count = entries.len(), "Forecast received");
        Ok(entries)
    }
}
