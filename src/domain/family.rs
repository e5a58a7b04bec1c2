use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display color palette offered when adding members. The first entry is the
/// default assigned to the auto-created primary member.
pub const MEMBER_COLORS: [&str; 6] = [
    "#14b8a6", "#06b6d4", "#8b5cf6", "#ec4899", "#f59e0b", "#ef4444",
];

/// A co-member of the account. Exactly one `primary` member exists per
/// account; it is created at setup and cannot be removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: MemberRole,
    pub join_date: NaiveDate,
    pub color: String,
}

impl FamilyMember {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: MemberRole,
        join_date: NaiveDate,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            role,
            join_date,
            color: color.into(),
        }
    }

    pub fn is_primary(&self) -> bool {
        self.role == MemberRole::Primary
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Primary,
    Secondary,
}
