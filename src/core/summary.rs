//! Month-by-month reporting projection over the transaction set.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::domain::Transaction;

/// Composite calendar key. Keying on year and month together keeps January
/// of different years in separate buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Human-readable label, e.g. "Jan 2025".
    pub fn label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => first.format("%b %Y").to_string(),
            None => format!("{:04}-{:02}", self.year, self.month),
        }
    }
}

/// Aggregated totals for one calendar month. The category breakdown covers
/// expenses only; income is not broken out by category.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    pub month: YearMonth,
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
    pub categories: BTreeMap<String, f64>,
}

/// Groups transactions into chronological month buckets.
pub fn summarize(transactions: &[Transaction]) -> Vec<MonthSummary> {
    let mut buckets: BTreeMap<YearMonth, MonthSummary> = BTreeMap::new();

    for txn in transactions {
        let key = YearMonth::from_date(txn.date);
        let bucket = buckets.entry(key).or_insert_with(|| MonthSummary {
            month: key,
            income: 0.0,
            expenses: 0.0,
            net: 0.0,
            categories: BTreeMap::new(),
        });

        if txn.is_expense() {
            let magnitude = txn.magnitude();
            bucket.expenses += magnitude;
            *bucket.categories.entry(txn.category.clone()).or_insert(0.0) += magnitude;
        } else {
            bucket.income += txn.amount;
        }
    }

    let mut summaries: Vec<MonthSummary> = buckets.into_values().collect();
    for summary in &mut summaries {
        summary.net = summary.income - summary.expenses;
    }
    summaries
}
