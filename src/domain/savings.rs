use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named monetary goal tracked against a deadline.
///
/// `current_amount` is an absolute running total set by the caller, not an
/// increment; completion is `current_amount >= target_amount`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: NaiveDate,
    pub category: String,
    pub priority: Priority,
    pub created_date: NaiveDate,
}

impl SavingsGoal {
    pub fn new(
        name: impl Into<String>,
        target_amount: f64,
        deadline: NaiveDate,
        category: impl Into<String>,
        priority: Priority,
        created_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            target_amount: target_amount.abs(),
            current_amount: 0.0,
            deadline,
            category: category.into(),
            priority,
            created_date,
        }
    }

    /// Progress toward the target in percent, unclamped. Callers clamp for
    /// display when a goal is overfunded.
    pub fn progress_percent(&self) -> f64 {
        if self.target_amount == 0.0 {
            return 0.0;
        }
        self.current_amount / self.target_amount * 100.0
    }

    pub fn is_completed(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Days until the deadline. Negative means overdue.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.deadline - today).num_days()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal() -> SavingsGoal {
        SavingsGoal::new(
            "Vacation",
            1000.0,
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            "Other",
            Priority::Medium,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        )
    }

    #[test]
    fn progress_is_unclamped() {
        let mut goal = goal();
        goal.current_amount = 1200.0;
        assert_eq!(goal.progress_percent(), 120.0);
        assert!(goal.is_completed());
    }

    #[test]
    fn days_remaining_goes_negative_when_overdue() {
        let goal = goal();
        let after = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(goal.days_remaining(after), -5);
    }

    #[test]
    fn new_goal_starts_at_zero() {
        assert_eq!(goal().current_amount, 0.0);
        assert_eq!(goal().progress_percent(), 0.0);
    }
}
