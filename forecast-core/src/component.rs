//! The forecast list: loads the forecast once per mount and renders one of
//! three views.
//!
//! Mounting spawns a single fetch on the tokio runtime and returns
//! immediately in the loading state. The fetch task and the component share
//! a cancellation token; dropping the component cancels it, so a response
//! arriving after unmount never touches anything.

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::{FetchError, ForecastSource, View, WeatherEntry};

#[derive(Debug, Clone, PartialEq)]
pub enum ForecastState {
    Loading,
    Failed { message: String },
    Loaded { entries: Vec<WeatherEntry> },
}

impl ForecastState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ForecastState::Loading)
    }

    /// Move out of `Loading` with the fetch outcome. Returns `false` and
    /// leaves the state alone if it has already settled.
    pub fn settle(&mut self, outcome: Result<Vec<WeatherEntry>, FetchError>) -> bool {
        if !self.is_loading() {
            return false;
        }

        *self = match outcome {
            Ok(entries) => ForecastState::Loaded { entries },
            Err(err) => ForecastState::Failed {
                message: err.display_message(),
            },
        };
        true
    }
}

#[derive(Debug)]
pub struct ForecastList {
    state: watch::Receiver<ForecastState>,
    cancel: CancellationToken,
}

impl ForecastList {
    /// Mount the component and start its one fetch.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount<S>(source: S) -> Self
    where
        S: ForecastSource + 'static,
    {
        let (tx, rx) = watch::channel(ForecastState::Loading);
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        debug!(?source, "Mounting forecast list");

        tokio::spawn(async move {
            // A panicking source surfaces as a join error instead of killing this task.
            let mut fetch = tokio::spawn(async move { source.fetch().await });

            let outcome = tokio::select! {
                _ = token.cancelled() => {
                    fetch.abort();
                    debug!("Forecast list unmounted before the fetch settled");
                    return;
                }
                joined = &mut fetch => joined.unwrap_or_else(|err| {
                    warn!(error = %err, "Forecast fetch task did not complete");
                    Err(FetchError::Unknown)
                }),
            };

            if let Err(err) = &outcome {
                warn!(error = %err, "Forecast fetch failed");
            }

            if token.is_cancelled() {
                debug!("Discarding forecast result for unmounted list");
                return;
            }

            tx.send_if_modified(|state| state.settle(outcome));
        });

        Self { state: rx, cancel }
    }

    /// Current state snapshot.
    pub fn state(&self) -> ForecastState {
        self.state.borrow().clone()
    }

    pub fn is_settled(&self) -> bool {
        !self.state.borrow().is_loading()
    }

    /// Render the current state. Never triggers a fetch.
    pub fn render(&self) -> View {
        View::from_state(&self.state.borrow())
    }

    /// Wait until the fetch has settled and return the terminal state.
    pub async fn settled(&mut self) -> ForecastState {
        let settled = self
            .state
            .wait_for(|state| !state.is_loading())
            .await
            .map(|state| (*state).clone());

        settled.unwrap_or_else(|_| self.state.borrow().clone())
    }

    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for ForecastList {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
