use thiserror::Error;

/// Fallback text for a failure that carries no usable message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Failure to obtain the forecast.
///
/// Transport failures, non-success statuses and undecodable bodies all end
/// up here; only the presence of a message is tracked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("{0}")]
    Failed(String),

    #[error("{}", UNKNOWN_ERROR)]
    Unknown,
}

impl FetchError {
    /// Build from a message, falling back to [`FetchError::Unknown`] when it is blank.
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            FetchError::Unknown
        } else {
            FetchError::Failed(message)
        }
    }

    /// Failure for a response that arrived with a non-success status.
    pub fn status(code: u16) -> Self {
        FetchError::Failed(format!("Request failed with status code {code}"))
    }

    /// Text shown after `Error: ` in the rendered view.
    pub fn display_message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::from_message(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::from_message(err.to_string())
    }
}
