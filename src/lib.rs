//! Finance Core provides the transaction ledger, budgeting, and analytics
//! primitives that power a personal finance tracker. The UI layer submits
//! mutations to the [`core::Ledger`]; budgets, daily alerts, and monthly
//! summaries are read-side projections recomputed from its transaction set.

pub mod categories;
pub mod core;
pub mod domain;
pub mod errors;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}
