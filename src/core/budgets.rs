//! Per-category spending limits, recomputed from the ledger.

use crate::domain::{Budget, Transaction};
use crate::store::Collection;

/// Sum of absolute expense amounts in `category`.
pub fn derived_spent(category: &str, transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|txn| txn.is_expense() && txn.category == category)
        .map(Transaction::magnitude)
        .sum()
}

/// Maintains the budget collection. `spent` is never user-editable:
/// [`BudgetTracker::recompute`] is the single operation that sets it, and the
/// owning facade invokes it after every ledger mutation.
pub struct BudgetTracker {
    budgets: Vec<Budget>,
    store: Collection<Budget>,
}

impl BudgetTracker {
    pub fn new(store: Collection<Budget>) -> Self {
        let budgets = store.get();
        Self { budgets, store }
    }

    /// Creates or updates the budget for `category`. An existing budget keeps
    /// its recomputed `spent`; a new one starts from the currently derived
    /// value. Categories without a budget are never auto-created elsewhere.
    pub fn upsert(&mut self, category: &str, limit: f64, transactions: &[Transaction]) {
        if let Some(budget) = self.budgets.iter_mut().find(|b| b.category == category) {
            budget.limit = limit;
        } else {
            let spent = derived_spent(category, transactions);
            self.budgets.push(Budget::new(category, limit, spent));
        }
        self.flush();
    }

    pub fn remove(&mut self, category: &str) {
        let before = self.budgets.len();
        self.budgets.retain(|b| b.category != category);
        if self.budgets.len() != before {
            self.flush();
        }
    }

    /// Re-derives every budget's `spent` from the given transaction snapshot.
    pub fn recompute(&mut self, transactions: &[Transaction]) {
        for budget in &mut self.budgets {
            budget.spent = derived_spent(&budget.category, transactions);
        }
        self.flush();
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn refresh(&mut self) {
        self.budgets = self.store.get();
    }

    pub fn clear(&mut self) {
        self.budgets.clear();
        self.store.clear();
    }

    fn flush(&self) {
        self.store.set(&self.budgets);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionKind;
    use crate::store::{collections, Collection, MemoryStore};
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn tracker() -> BudgetTracker {
        let backend = Arc::new(MemoryStore::new());
        BudgetTracker::new(Collection::new(backend, collections::BUDGETS))
    }

    fn expense(category: &str, amount: f64) -> Transaction {
        Transaction::new(
            "expense",
            amount,
            TransactionKind::Expense,
            category,
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        )
    }

    #[test]
    fn recompute_sums_matching_expenses() {
        let mut tracker = tracker();
        let transactions = vec![expense("Food", 30.0), expense("Food", 20.0)];
        tracker.upsert("Food", 40.0, &transactions);
        tracker.recompute(&transactions);

        let budget = &tracker.budgets()[0];
        assert_eq!(budget.spent, 50.0);
        assert!(budget.status().exceeded);
    }

    #[test]
    fn upsert_replaces_limit_and_preserves_spent() {
        let mut tracker = tracker();
        let transactions = vec![expense("Food", 25.0)];
        tracker.upsert("Food", 40.0, &transactions);
        assert_eq!(tracker.budgets()[0].spent, 25.0);

        tracker.upsert("Food", 80.0, &[]);
        assert_eq!(tracker.budgets().len(), 1);
        assert_eq!(tracker.budgets()[0].limit, 80.0);
        assert_eq!(tracker.budgets()[0].spent, 25.0);
    }

    #[test]
    fn income_never_counts_as_spending() {
        let transactions = vec![Transaction::new(
            "salary",
            100.0,
            TransactionKind::Income,
            "Food",
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        )];
        assert_eq!(derived_spent("Food", &transactions), 0.0);
    }

    #[test]
    fn remove_drops_the_budget() {
        let mut tracker = tracker();
        tracker.upsert("Food", 40.0, &[]);
        tracker.remove("Food");
        assert!(tracker.budgets().is_empty());
        tracker.remove("Food");
        assert!(tracker.budgets().is_empty());
    }
}
