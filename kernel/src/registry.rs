//! Storage for role records.
//!
//! The registry is a trusted internal store: it enforces no authorization
//! and reports plain facts. Mutation is reserved to the engine, which is the
//! single writer for the whole system.

use std::collections::{HashMap, HashSet};

use crate::identity::{AccountId, RoleId, ROOT_ROLE};

/// Record kept for a single role: its admin role and its member set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoleRecord {
    admin_role: RoleId,
    members: HashSet<AccountId>,
}

impl Default for RoleRecord {
    fn default() -> Self {
        Self { admin_role: ROOT_ROLE, members: HashSet::new() }
    }
}

impl RoleRecord {
    /// The role whose members may grant and revoke this role.
    #[must_use]
    pub fn admin_role(&self) -> RoleId {
        self.admin_role
    }

    /// Whether `account` is a member of this role.
    #[must_use]
    pub fn contains(&self, account: AccountId) -> bool {
        self.members.contains(&account)
    }
}

/// Mapping from role identifier to [`RoleRecord`].
///
/// Reads are lazily defaulted: a role that was never written behaves as if
/// it had admin role [`ROOT_ROLE`] and no members, so roles need not be
/// declared before they are queried.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoleRegistry {
    roles: HashMap<RoleId, RoleRecord>,
}

impl RoleRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the admin role of `role`; [`ROOT_ROLE`] if never reassigned.
    #[must_use]
    pub fn admin(&self, role: RoleId) -> RoleId {
        self.roles.get(&role).map_or(ROOT_ROLE, RoleRecord::admin_role)
    }

    /// Whether `account` is a member of `role`.
    #[must_use]
    pub fn is_member(&self, role: RoleId, account: AccountId) -> bool {
        self.roles.get(&role).is_some_and(|record| record.contains(account))
    }

    /// Number of members of `role`.
    #[must_use]
    pub fn member_count(&self, role: RoleId) -> usize {
        self.roles.get(&role).map_or(0, |record| record.members.len())
    }

    /// Iterates over the members of `role` in unspecified order.
    pub fn members(
        &self,
        role: RoleId,
    ) -> impl Iterator<Item = AccountId> + '_ {
        self.roles
            .get(&role)
            .into_iter()
            .flat_map(|record| record.members.iter().copied())
    }

    pub(crate) fn set_admin(&mut self, role: RoleId, new_admin: RoleId) {
        self.roles.entry(role).or_default().admin_role = new_admin;
    }

    /// Adds `account` to `role`'s member set, reporting whether the set
    /// changed.
    pub(crate) fn add_member(
        &mut self,
        role: RoleId,
        account: AccountId,
    ) -> bool {
        self.roles.entry(role).or_default().members.insert(account)
    }

    /// Removes `account` from `role`'s member set, reporting whether the set
    /// changed.
    pub(crate) fn remove_member(
        &mut self,
        role: RoleId,
        account: AccountId,
    ) -> bool {
        match self.roles.get_mut(&role) {
            Some(record) => record.members.remove(&account),
            None => false,
        }
    }
}
