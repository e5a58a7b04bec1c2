//! Domain models with persistence-friendly, wire-exact serde shapes.

pub mod alerts;
pub mod budget;
pub mod family;
pub mod recurring;
pub mod savings;
pub mod transaction;
pub mod user;

pub use alerts::{AlertEvent, AlertSettings};
pub use budget::{Budget, BudgetStatus};
pub use family::{FamilyMember, MemberRole, MEMBER_COLORS};
pub use recurring::{Frequency, RecurringBill};
pub use savings::{Priority, SavingsGoal};
pub use transaction::{Transaction, TransactionKind};
pub use user::User;
