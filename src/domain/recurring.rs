use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Recurrence cadence of a bill, mapped to a fixed day-count approximation.
///
/// Month-sized cadences deliberately use flat day counts (monthly = 30 days)
/// instead of calendar month arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Frequency {
    pub fn day_count(self) -> i64 {
        match self {
            Frequency::Daily => 1,
            Frequency::Weekly => 7,
            Frequency::Biweekly => 14,
            Frequency::Monthly => 30,
            Frequency::Quarterly => 90,
            Frequency::Yearly => 365,
        }
    }

    /// Multiplier that converts one bill amount into a monthly-equivalent
    /// cost. Quarterly and yearly cadences are excluded from the estimate.
    pub fn monthly_factor(self) -> Option<f64> {
        match self {
            Frequency::Daily => Some(30.0),
            Frequency::Weekly => Some(4.33),
            Frequency::Biweekly => Some(2.17),
            Frequency::Monthly => Some(1.0),
            Frequency::Quarterly | Frequency::Yearly => None,
        }
    }

    pub fn next_date(self, from: NaiveDate) -> NaiveDate {
        from + Duration::days(self.day_count())
    }

    pub fn label(self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Biweekly => "Bi-weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::Yearly => "Yearly",
        }
    }
}

/// A bill that recurs on a fixed cadence.
///
/// `next_due_date` is derived at creation time as `start_date` plus one
/// cadence; it is not rolled forward once it passes. Overdue handling is the
/// caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringBill {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    pub next_due_date: NaiveDate,
    pub is_active: bool,
}

impl RecurringBill {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        frequency: Frequency,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description: description.into(),
            amount: amount.abs(),
            category: category.into(),
            frequency,
            start_date,
            next_due_date: frequency.next_date(start_date),
            is_active: true,
        }
    }

    pub fn is_due(&self, as_of: NaiveDate) -> bool {
        self.is_active && self.next_due_date <= as_of
    }

    pub fn monthly_equivalent(&self) -> Option<f64> {
        self.frequency.monthly_factor().map(|f| self.amount * f)
    }
}
