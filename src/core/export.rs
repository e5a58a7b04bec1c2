//! Whole-account export and import in the original wire shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Transaction, User};

/// Everything a backup carries: the user profile, the transaction set, and
/// the export timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    pub user: Option<User>,
    pub transactions: Vec<Transaction>,
    pub exported_at: DateTime<Utc>,
}

impl ExportPayload {
    pub fn new(user: Option<User>, transactions: Vec<Transaction>) -> Self {
        Self {
            user,
            transactions,
            exported_at: Utc::now(),
        }
    }
}

/// Import accepts partial payloads: absent fields leave current data alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportPayload {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub transactions: Option<Vec<Transaction>>,
}

impl From<ExportPayload> for ImportPayload {
    fn from(payload: ExportPayload) -> Self {
        Self {
            user: payload.user,
            transactions: Some(payload.transactions),
        }
    }
}
