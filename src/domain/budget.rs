use serde::{Deserialize, Serialize};

/// Spending fraction of the limit at which a budget starts warning.
pub const WARN_RATIO: f64 = 0.75;

/// A spending guardrail for a single category.
///
/// `spent` is derived from the ledger's expense transactions and recomputed
/// after every ledger mutation; it is never set independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub category: String,
    pub limit: f64,
    pub spent: f64,
}

impl Budget {
    pub fn new(category: impl Into<String>, limit: f64, spent: f64) -> Self {
        Self {
            category: category.into(),
            limit,
            spent,
        }
    }

    /// Display status derived on read, not stored.
    pub fn status(&self) -> BudgetStatus {
        let exceeded = self.spent > self.limit;
        let warning =
            !exceeded && self.limit > 0.0 && self.spent / self.limit >= WARN_RATIO;
        BudgetStatus { exceeded, warning }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetStatus {
    pub exceeded: bool,
    pub warning: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_reports_exceeded_over_limit() {
        let budget = Budget::new("Food", 40.0, 50.0);
        let status = budget.status();
        assert!(status.exceeded);
        assert!(!status.warning);
    }

    #[test]
    fn status_warns_at_three_quarters() {
        let budget = Budget::new("Food", 100.0, 75.0);
        assert!(budget.status().warning);
        let budget = Budget::new("Food", 100.0, 74.0);
        assert!(!budget.status().warning);
    }

    #[test]
    fn zero_limit_with_no_spending_is_quiet() {
        let budget = Budget::new("Food", 0.0, 0.0);
        let status = budget.status();
        assert!(!status.exceeded);
        assert!(!status.warning);
    }
}
