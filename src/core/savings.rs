//! Savings goal collection and progress aggregates.

use chrono::NaiveDate;

use crate::domain::{Priority, SavingsGoal};
use crate::store::Collection;

pub struct GoalTracker {
    goals: Vec<SavingsGoal>,
    store: Collection<SavingsGoal>,
}

impl GoalTracker {
    pub fn new(store: Collection<SavingsGoal>) -> Self {
        let goals = store.get();
        Self { goals, store }
    }

    pub fn add(
        &mut self,
        name: impl Into<String>,
        target_amount: f64,
        deadline: NaiveDate,
        category: impl Into<String>,
        priority: Priority,
        today: NaiveDate,
    ) -> &SavingsGoal {
        let goal = SavingsGoal::new(name, target_amount, deadline, category, priority, today);
        tracing::debug!(id = %goal.id, "savings goal added");
        self.goals.push(goal);
        self.flush();
        self.goals.last().expect("goal just pushed")
    }

    /// Replaces the goal's running total with an absolute value. This is a
    /// set, not an increment; callers add deltas to the prior value first.
    /// No-op for unknown ids.
    pub fn set_amount(&mut self, id: &str, amount: f64) {
        let Some(goal) = self.goals.iter_mut().find(|goal| goal.id == id) else {
            tracing::debug!(id, "amount update of unknown goal ignored");
            return;
        };
        goal.current_amount = amount;
        self.flush();
    }

    pub fn remove(&mut self, id: &str) {
        let before = self.goals.len();
        self.goals.retain(|goal| goal.id != id);
        if self.goals.len() != before {
            self.flush();
        }
    }

    pub fn total_saved(&self) -> f64 {
        self.goals.iter().map(|goal| goal.current_amount).sum()
    }

    pub fn total_target(&self) -> f64 {
        self.goals.iter().map(|goal| goal.target_amount).sum()
    }

    pub fn completed_count(&self) -> usize {
        self.goals.iter().filter(|goal| goal.is_completed()).count()
    }

    pub fn goals(&self) -> &[SavingsGoal] {
        &self.goals
    }

    pub fn refresh(&mut self) {
        self.goals = self.store.get();
    }

    pub fn clear(&mut self) {
        self.goals.clear();
        self.store.clear();
    }

    fn flush(&self) {
        self.store.set(&self.goals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{collections, Collection, MemoryStore};
    use std::sync::Arc;

    fn tracker() -> GoalTracker {
        let backend = Arc::new(MemoryStore::new());
        GoalTracker::new(Collection::new(backend, collections::SAVINGS_GOALS))
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn set_amount_is_absolute_not_additive() {
        let mut tracker = tracker();
        let id = tracker
            .add(
                "Vacation",
                1000.0,
                date(2025, 12, 31),
                "Other",
                Priority::High,
                date(2025, 1, 1),
            )
            .id
            .clone();
        tracker.set_amount(&id, 300.0);
        tracker.set_amount(&id, 250.0);
        assert_eq!(tracker.goals()[0].current_amount, 250.0);
    }

    #[test]
    fn aggregates_track_all_goals() {
        let mut tracker = tracker();
        let first = tracker
            .add("A", 100.0, date(2025, 6, 1), "Other", Priority::Low, date(2025, 1, 1))
            .id
            .clone();
        tracker.add("B", 400.0, date(2025, 6, 1), "Other", Priority::Low, date(2025, 1, 1));
        tracker.set_amount(&first, 150.0);

        assert_eq!(tracker.total_saved(), 150.0);
        assert_eq!(tracker.total_target(), 500.0);
        assert_eq!(tracker.completed_count(), 1);
    }

    #[test]
    fn unknown_ids_are_tolerated() {
        let mut tracker = tracker();
        tracker.set_amount("missing", 10.0);
        tracker.remove("missing");
        assert!(tracker.goals().is_empty());
    }
}
