//! Daily spending alert evaluation and settings persistence.

use chrono::NaiveDate;

use crate::domain::{AlertEvent, AlertSettings, Transaction};
use crate::errors::ValidationError;
use crate::store::Singleton;

/// Today's spend compared against the configured daily limit. Emits at most
/// one event; exceeding the limit outranks approaching it.
pub fn evaluate(
    transactions: &[Transaction],
    settings: &AlertSettings,
    today: NaiveDate,
) -> Option<AlertEvent> {
    if !settings.enabled {
        return None;
    }

    let spent: f64 = transactions
        .iter()
        .filter(|txn| txn.is_expense() && txn.date == today)
        .map(Transaction::magnitude)
        .sum();

    if spent > settings.daily_limit {
        Some(AlertEvent::Exceeded {
            spent,
            limit: settings.daily_limit,
        })
    } else if spent > settings.warn_threshold() {
        Some(AlertEvent::Approaching {
            spent,
            remaining: settings.daily_limit - spent,
        })
    } else {
        None
    }
}

/// Holds the singleton alert settings and validates updates at the boundary.
pub struct AlertCenter {
    settings: AlertSettings,
    store: Singleton<AlertSettings>,
}

impl AlertCenter {
    pub fn new(store: Singleton<AlertSettings>) -> Self {
        let settings = store.get_or_default();
        Self { settings, store }
    }

    pub fn settings(&self) -> &AlertSettings {
        &self.settings
    }

    pub fn update(&mut self, settings: AlertSettings) -> Result<(), ValidationError> {
        if settings.daily_limit <= 0.0 {
            return Err(ValidationError::NonPositiveAmount("daily limit"));
        }
        if !(0.0..=100.0).contains(&settings.warn_percentage) {
            return Err(ValidationError::PercentageOutOfRange);
        }
        self.settings = settings;
        self.store.set(&self.settings);
        Ok(())
    }

    pub fn evaluate(&self, transactions: &[Transaction], today: NaiveDate) -> Option<AlertEvent> {
        evaluate(transactions, &self.settings, today)
    }

    pub fn refresh(&mut self) {
        self.settings = self.store.get_or_default();
    }

    pub fn clear(&mut self) {
        self.settings = AlertSettings::default();
        self.store.clear();
    }
}
