//! Stateful services over the persisted collections, plus the read-side
//! projections recomputed from the ledger's transaction set.

pub mod alerts;
pub mod budgets;
pub mod export;
pub mod family;
pub mod ledger;
pub mod manager;
pub mod recurring;
pub mod savings;
pub mod summary;

pub use alerts::AlertCenter;
pub use budgets::BudgetTracker;
pub use export::{ExportPayload, ImportPayload};
pub use family::FamilyRoster;
pub use ledger::{Ledger, LedgerTotals, TransactionFilter};
pub use manager::FinanceManager;
pub use recurring::BillScheduler;
pub use savings::GoalTracker;
pub use summary::{summarize, MonthSummary, YearMonth};
