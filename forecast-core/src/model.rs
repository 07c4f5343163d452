use serde::{Deserialize, Serialize};

/// One forecast record as served by the forecast endpoint.
///
/// The date is opaque and shown verbatim. Both temperatures come from the
/// server; neither is derived from the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherEntry {
    pub date: String,
    pub temperature_c: f64,
    pub temperature_f: f64,
    pub summary: String,
}

impl WeatherEntry {
    /// Combined temperature text, e.g. `32°C / 89°F`.
    pub fn temperature_label(&self) -> String {
        // Adding zero folds -0.0 into 0.0.
        format!("{}°C / {}°F", self.temperature_c + 0.0, self.temperature_f + 0.0)
    }
}
