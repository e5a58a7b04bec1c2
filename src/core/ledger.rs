//! The authoritative transaction collection and its accessor operations.

use chrono::NaiveDate;

use crate::categories::categorize;
use crate::domain::{Transaction, TransactionKind};
use crate::store::Collection;

use super::summary::YearMonth;

/// Owns the transaction set. Every mutation flushes the full collection to
/// the injected store; all other components read snapshots from here.
pub struct Ledger {
    transactions: Vec<Transaction>,
    store: Collection<Transaction>,
}

impl Ledger {
    pub fn new(store: Collection<Transaction>) -> Self {
        let transactions = store.get();
        Self {
            transactions,
            store,
        }
    }

    /// Creates a transaction: sign-normalizes the amount, auto-categorizes
    /// the description, and prepends so the newest entry displays first.
    pub fn add(
        &mut self,
        description: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
        date: NaiveDate,
    ) -> &Transaction {
        let description = description.into();
        let category = categorize(&description);
        let txn = Transaction::new(description, amount, kind, category, date);
        tracing::debug!(id = %txn.id, category, "transaction added");
        self.transactions.insert(0, txn);
        self.flush();
        &self.transactions[0]
    }

    /// Removes by id. Silently tolerated when absent, to stay robust under
    /// racy edits from another tab.
    pub fn delete(&mut self, id: &str) {
        let before = self.transactions.len();
        self.transactions.retain(|txn| txn.id != id);
        if self.transactions.len() != before {
            self.flush();
        } else {
            tracing::debug!(id, "delete of unknown transaction ignored");
        }
    }

    /// Overrides the category of a transaction; the auto-tag flag drops
    /// because the user took over. No-op when the id is unknown.
    pub fn reclassify(&mut self, id: &str, new_category: &str) {
        let Some(txn) = self.transactions.iter_mut().find(|txn| txn.id == id) else {
            tracing::debug!(id, "reclassify of unknown transaction ignored");
            return;
        };
        txn.category = new_category.to_string();
        txn.auto_tagged = false;
        self.flush();
    }

    /// Conjunctive filter query; absent filters impose no constraint.
    pub fn query(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|txn| filter.matches(txn))
            .collect()
    }

    /// Income/expense totals over the full collection.
    pub fn aggregate(&self) -> LedgerTotals {
        let total_income: f64 = self
            .transactions
            .iter()
            .filter(|txn| txn.kind == TransactionKind::Income)
            .map(|txn| txn.amount)
            .sum();
        let total_expenses: f64 = self
            .transactions
            .iter()
            .filter(|txn| txn.is_expense())
            .map(Transaction::magnitude)
            .sum();
        LedgerTotals {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
        }
    }

    /// Categories observed across current transactions, first-seen order.
    pub fn distinct_categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for txn in &self.transactions {
            if !seen.iter().any(|c| c == &txn.category) {
                seen.push(txn.category.clone());
            }
        }
        seen
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Replaces the in-memory snapshot with the stored state. Called after a
    /// change notification or poll; never merges.
    pub fn refresh(&mut self) {
        self.transactions = self.store.get();
    }

    /// Wholesale replacement, used by data import.
    pub fn replace_all(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
        self.flush();
    }

    pub fn clear(&mut self) {
        self.transactions.clear();
        self.store.clear();
    }

    fn flush(&self) {
        self.store.set(&self.transactions);
    }
}

/// Optional constraints combined with AND.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub month: Option<YearMonth>,
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
}

impl TransactionFilter {
    fn matches(&self, txn: &Transaction) -> bool {
        if let Some(month) = self.month {
            if YearMonth::from_date(txn.date) != month {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &txn.category != category {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedgerTotals {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
}
