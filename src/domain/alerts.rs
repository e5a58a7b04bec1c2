use serde::{Deserialize, Serialize};

/// Per-account daily spending alert configuration. Singleton.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSettings {
    pub enabled: bool,
    pub daily_limit: f64,
    pub warn_percentage: f64,
}

impl AlertSettings {
    /// Spend level at which an `Approaching` warning fires.
    pub fn warn_threshold(&self) -> f64 {
        self.daily_limit * self.warn_percentage / 100.0
    }
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            daily_limit: 100.0,
            warn_percentage: 75.0,
        }
    }
}

/// At most one event per evaluation; `Exceeded` wins over `Approaching`.
#[derive(Debug, Clone, PartialEq)]
pub enum AlertEvent {
    Exceeded { spent: f64, limit: f64 },
    Approaching { spent: f64, remaining: f64 },
}
