use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single income or expense entry in the ledger.
///
/// The stored amount is always sign-normalized: income is non-negative,
/// expenses are non-positive, regardless of the sign the caller supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub date: NaiveDate,
    pub auto_tagged: bool,
}

impl Transaction {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description: description.into(),
            amount: kind.normalize_amount(amount),
            kind,
            category: category.into(),
            date,
            auto_tagged: true,
        }
    }

    /// Magnitude of the transaction, independent of income/expense sign.
    pub fn magnitude(&self) -> f64 {
        self.amount.abs()
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Forces `amount` onto the sign this kind dictates.
    pub fn normalize_amount(self, amount: f64) -> f64 {
        match self {
            TransactionKind::Income => amount.abs(),
            TransactionKind::Expense => -amount.abs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn income_amount_is_forced_positive() {
        let txn = Transaction::new("Refund", -5.0, TransactionKind::Income, "Other", date());
        assert_eq!(txn.amount, 5.0);
    }

    #[test]
    fn expense_amount_is_forced_negative() {
        let txn = Transaction::new("Lunch", 12.5, TransactionKind::Expense, "Food", date());
        assert_eq!(txn.amount, -12.5);
        assert_eq!(txn.magnitude(), 12.5);
    }

    #[test]
    fn wire_shape_uses_original_field_names() {
        let txn = Transaction::new("Lunch", 12.5, TransactionKind::Expense, "Food", date());
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["type"], "expense");
        assert_eq!(json["autoTagged"], true);
        assert_eq!(json["date"], "2025-03-10");
    }
}
