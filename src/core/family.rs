//! Family co-member roster.

use chrono::NaiveDate;

use crate::domain::{FamilyMember, MemberRole, MEMBER_COLORS};
use crate::errors::ValidationError;
use crate::store::Collection;

/// Manages account co-members. One primary member exists per account; it is
/// seeded at setup and shielded from removal.
pub struct FamilyRoster {
    members: Vec<FamilyMember>,
    store: Collection<FamilyMember>,
}

impl FamilyRoster {
    pub fn new(store: Collection<FamilyMember>) -> Self {
        let members = store.get();
        Self { members, store }
    }

    /// Seeds the primary member if the roster has none yet. Called during
    /// account setup.
    pub fn ensure_primary(&mut self, name: &str, email: &str, today: NaiveDate) {
        if self.members.iter().any(FamilyMember::is_primary) {
            return;
        }
        let member = FamilyMember::new(
            name,
            email,
            MemberRole::Primary,
            today,
            MEMBER_COLORS[0],
        );
        tracing::debug!(id = %member.id, "primary member seeded");
        self.members.push(member);
        self.flush();
    }

    pub fn add(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        role: MemberRole,
        color: impl Into<String>,
        today: NaiveDate,
    ) -> Result<&FamilyMember, ValidationError> {
        let email = email.into();
        if self.members.iter().any(|m| m.email == email) {
            return Err(ValidationError::DuplicateEmail(email));
        }
        if role == MemberRole::Primary && self.members.iter().any(FamilyMember::is_primary) {
            return Err(ValidationError::PrimaryAlreadyExists);
        }
        let member = FamilyMember::new(name, email, role, today, color);
        self.members.push(member);
        self.flush();
        Ok(self.members.last().expect("member just pushed"))
    }

    /// Removes a member by id. Primary members and unknown ids are left
    /// untouched.
    pub fn remove(&mut self, id: &str) {
        let before = self.members.len();
        self.members.retain(|m| m.id != id || m.is_primary());
        if self.members.len() != before {
            self.flush();
        }
    }

    pub fn members(&self) -> &[FamilyMember] {
        &self.members
    }

    pub fn refresh(&mut self) {
        self.members = self.store.get();
    }

    pub fn clear(&mut self) {
        self.members.clear();
        self.store.clear();
    }

    fn flush(&self) {
        self.store.set(&self.members);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{collections, Collection, MemoryStore};
    use std::sync::Arc;

    fn roster() -> FamilyRoster {
        let backend = Arc::new(MemoryStore::new());
        FamilyRoster::new(Collection::new(backend, collections::FAMILY_MEMBERS))
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn ensure_primary_seeds_exactly_once() {
        let mut roster = roster();
        roster.ensure_primary("Ada", "ada@family.local", today());
        roster.ensure_primary("Ada", "ada@family.local", today());
        assert_eq!(roster.members().len(), 1);
        assert!(roster.members()[0].is_primary());
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let mut roster = roster();
        roster.ensure_primary("Ada", "ada@family.local", today());
        let err = roster
            .add("Imposter", "ada@family.local", MemberRole::Secondary, "#06b6d4", today())
            .unwrap_err();
        assert_eq!(err, ValidationError::DuplicateEmail("ada@family.local".into()));
    }

    #[test]
    fn second_primary_is_rejected() {
        let mut roster = roster();
        roster.ensure_primary("Ada", "ada@family.local", today());
        let err = roster
            .add("Grace", "grace@family.local", MemberRole::Primary, "#06b6d4", today())
            .unwrap_err();
        assert_eq!(err, ValidationError::PrimaryAlreadyExists);
    }

    #[test]
    fn primary_member_cannot_be_removed() {
        let mut roster = roster();
        roster.ensure_primary("Ada", "ada@family.local", today());
        let secondary = roster
            .add("Grace", "grace@family.local", MemberRole::Secondary, "#06b6d4", today())
            .unwrap()
            .id
            .clone();
        let primary = roster.members()[0].id.clone();

        roster.remove(&primary);
        assert_eq!(roster.members().len(), 2);

        roster.remove(&secondary);
        assert_eq!(roster.members().len(), 1);
        assert!(roster.members()[0].is_primary());
    }
}
