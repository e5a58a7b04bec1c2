//! Facade wiring every component to one injected store backend.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{AlertEvent, TransactionKind, User};
use crate::errors::{StoreError, ValidationError};
use crate::store::{collections, Collection, JsonFileStore, Singleton, StoreBackend, Watcher};

use super::alerts::AlertCenter;
use super::budgets::BudgetTracker;
use super::export::{ExportPayload, ImportPayload};
use super::family::FamilyRoster;
use super::ledger::Ledger;
use super::recurring::BillScheduler;
use super::savings::GoalTracker;
use super::summary::{summarize, MonthSummary};

const FALLBACK_PRIMARY_EMAIL: &str = "primary@family.local";

/// Coordinates the ledger, its projections, and the independent entity
/// collections over a shared backend. Transaction mutations go through here
/// so budget recomputation always follows them as an explicit step.
pub struct FinanceManager {
    pub ledger: Ledger,
    pub budgets: BudgetTracker,
    pub bills: BillScheduler,
    pub goals: GoalTracker,
    pub family: FamilyRoster,
    pub alerts: AlertCenter,
    user_store: Singleton<User>,
    user: Option<User>,
    watcher: Watcher,
}

impl FinanceManager {
    pub fn new(backend: Arc<dyn StoreBackend>) -> Self {
        let ledger = Ledger::new(Collection::new(backend.clone(), collections::TRANSACTIONS));
        let budgets = BudgetTracker::new(Collection::new(backend.clone(), collections::BUDGETS));
        let bills = BillScheduler::new(Collection::new(
            backend.clone(),
            collections::RECURRING_BILLS,
        ));
        let goals = GoalTracker::new(Collection::new(
            backend.clone(),
            collections::SAVINGS_GOALS,
        ));
        let family = FamilyRoster::new(Collection::new(
            backend.clone(),
            collections::FAMILY_MEMBERS,
        ));
        let alerts = AlertCenter::new(Singleton::new(
            backend.clone(),
            collections::ALERT_SETTINGS,
        ));
        let user_store = Singleton::new(backend.clone(), collections::USER);
        let user = user_store.get();
        let watcher = Watcher::new(backend);
        Self {
            ledger,
            budgets,
            bills,
            goals,
            family,
            alerts,
            user_store,
            user,
            watcher,
        }
    }

    /// Convenience constructor over the default on-disk store location.
    pub fn open_default() -> Result<Self, StoreError> {
        let backend = JsonFileStore::new_default()?;
        Ok(Self::new(Arc::new(backend)))
    }

    /// Account setup: records the user profile and seeds the primary family
    /// member. Idempotent once a user exists.
    pub fn setup(
        &mut self,
        name: &str,
        email: &str,
        today: NaiveDate,
    ) -> Result<&User, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }
        if self.user.is_none() {
            let email = if email.trim().is_empty() {
                FALLBACK_PRIMARY_EMAIL
            } else {
                email
            };
            let user = User::new(name, email);
            self.user_store.set(&user);
            self.family.ensure_primary(&user.name, &user.email, today);
            self.watcher.mark_seen();
            self.user = Some(user);
            tracing::info!("account set up");
        }
        Ok(self.user.as_ref().expect("user just set"))
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn add_transaction(
        &mut self,
        description: &str,
        amount: f64,
        kind: TransactionKind,
        date: NaiveDate,
    ) -> String {
        let id = self.ledger.add(description, amount, kind, date).id.clone();
        self.recompute_projections();
        id
    }

    pub fn delete_transaction(&mut self, id: &str) {
        self.ledger.delete(id);
        self.recompute_projections();
    }

    pub fn reclassify_transaction(&mut self, id: &str, new_category: &str) {
        self.ledger.reclassify(id, new_category);
        self.recompute_projections();
    }

    /// Creates or updates a budget against the current transaction snapshot.
    pub fn set_budget(&mut self, category: &str, limit: f64) -> Result<(), ValidationError> {
        if category.trim().is_empty() {
            return Err(ValidationError::EmptyField("category"));
        }
        if limit <= 0.0 {
            return Err(ValidationError::NonPositiveAmount("budget limit"));
        }
        self.budgets
            .upsert(category, limit, self.ledger.transactions());
        self.watcher.mark_seen();
        Ok(())
    }

    pub fn remove_budget(&mut self, category: &str) {
        self.budgets.remove(category);
        self.watcher.mark_seen();
    }

    pub fn daily_alert(&self, today: NaiveDate) -> Option<AlertEvent> {
        self.alerts.evaluate(self.ledger.transactions(), today)
    }

    pub fn monthly_summaries(&self) -> Vec<MonthSummary> {
        summarize(self.ledger.transactions())
    }

    /// Polling refresh: when the backend changed out-of-band, every in-memory
    /// snapshot is replaced wholesale and budget totals are re-derived from
    /// the fresh ledger. Returns whether anything was reloaded.
    pub fn refresh_all(&mut self) -> bool {
        if !self.watcher.poll() {
            return false;
        }
        self.ledger.refresh();
        self.bills.refresh();
        self.goals.refresh();
        self.family.refresh();
        self.alerts.refresh();
        self.user = self.user_store.get();
        self.budgets.refresh();
        self.budgets.recompute(self.ledger.transactions());
        self.watcher.mark_seen();
        tracing::debug!("snapshots reloaded after external change");
        true
    }

    pub fn export_data(&self) -> ExportPayload {
        ExportPayload::new(self.user.clone(), self.ledger.transactions().to_vec())
    }

    pub fn import_data(&mut self, payload: ImportPayload) {
        if let Some(user) = payload.user {
            self.user_store.set(&user);
            self.user = Some(user);
        }
        if let Some(transactions) = payload.transactions {
            self.ledger.replace_all(transactions);
        }
        self.recompute_projections();
    }

    /// Wipes every collection, the user profile, and the alert settings.
    pub fn clear_all(&mut self) {
        self.ledger.clear();
        self.budgets.clear();
        self.bills.clear();
        self.goals.clear();
        self.family.clear();
        self.alerts.clear();
        self.user_store.clear();
        self.user = None;
        self.watcher.mark_seen();
        tracing::info!("all account data cleared");
    }

    /// Seeds the demo transactions shown on a fresh account. No-op when the
    /// ledger already has entries.
    pub fn seed_demo_data(&mut self, today: NaiveDate) {
        if !self.ledger.transactions().is_empty() {
            return;
        }
        let samples: [(&str, f64, TransactionKind, i64); 5] = [
            ("Monthly Salary", 5000.0, TransactionKind::Income, 0),
            ("Grocery Shopping at Walmart", -150.0, TransactionKind::Expense, 2),
            ("Netflix Subscription", -15.0, TransactionKind::Expense, 3),
            ("Uber to Airport", -45.0, TransactionKind::Expense, 5),
            ("Freelance Project Payment", 800.0, TransactionKind::Income, 7),
        ];
        for (description, amount, kind, days_ago) in samples {
            let date = today - chrono::Duration::days(days_ago);
            self.ledger.add(description, amount, kind, date);
        }
        self.recompute_projections();
    }

    /// Budget spent-totals follow every ledger mutation as an explicit step,
    /// never as a side effect of reading.
    fn recompute_projections(&mut self) {
        self.budgets.recompute(self.ledger.transactions());
        self.watcher.mark_seen();
    }
}
