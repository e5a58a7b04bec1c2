//! Recurring bill collection and due-date bookkeeping.

use chrono::NaiveDate;

use crate::domain::{Frequency, RecurringBill};
use crate::store::Collection;

/// Owns the recurring bill collection. Due dates are fixed at creation time;
/// overdue bills are counted but never auto-advanced.
pub struct BillScheduler {
    bills: Vec<RecurringBill>,
    store: Collection<RecurringBill>,
}

impl BillScheduler {
    pub fn new(store: Collection<RecurringBill>) -> Self {
        let bills = store.get();
        Self { bills, store }
    }

    /// Adds a bill. The next due date is always derived here and the bill
    /// starts active, regardless of caller input.
    pub fn add(
        &mut self,
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        frequency: Frequency,
        start_date: NaiveDate,
    ) -> &RecurringBill {
        let bill = RecurringBill::new(description, amount, category, frequency, start_date);
        tracing::debug!(id = %bill.id, ?frequency, "recurring bill added");
        self.bills.push(bill);
        self.flush();
        self.bills.last().expect("bill just pushed")
    }

    pub fn remove(&mut self, id: &str) {
        let before = self.bills.len();
        self.bills.retain(|bill| bill.id != id);
        if self.bills.len() != before {
            self.flush();
        }
    }

    /// Flips a bill's active flag. No-op for unknown ids.
    pub fn toggle_active(&mut self, id: &str) {
        let Some(bill) = self.bills.iter_mut().find(|bill| bill.id == id) else {
            tracing::debug!(id, "toggle of unknown bill ignored");
            return;
        };
        bill.is_active = !bill.is_active;
        self.flush();
    }

    /// Number of active bills due on or before `as_of`.
    pub fn count_due(&self, as_of: NaiveDate) -> usize {
        self.bills.iter().filter(|bill| bill.is_due(as_of)).count()
    }

    /// Projected monthly cost of active bills. Quarterly and yearly bills
    /// carry no monthly factor and are excluded.
    pub fn estimate_monthly_cost(&self) -> f64 {
        self.bills
            .iter()
            .filter(|bill| bill.is_active)
            .filter_map(RecurringBill::monthly_equivalent)
            .sum()
    }

    pub fn bills(&self) -> &[RecurringBill] {
        &self.bills
    }

    pub fn refresh(&mut self) {
        self.bills = self.store.get();
    }

    pub fn clear(&mut self) {
        self.bills.clear();
        self.store.clear();
    }

    fn flush(&self) {
        self.store.set(&self.bills);
    }
}
