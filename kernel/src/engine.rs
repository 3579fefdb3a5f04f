//! The public face of the kernel: authorization-gated role mutation.
//!
//! Every mutating operation follows the same order: check the gate, apply
//! the change to the registry, report the change to the sink. A failure
//! returns before the first mutation, so a failed call is indistinguishable
//! from a call that was never made.

use thiserror::Error as ThisError;

use crate::{
    events::{EventSink, RoleEvent},
    gate,
    identity::{AccountId, RoleId, ROOT_ROLE},
    registry::RoleRegistry,
};

/// An error from an [`AccessControlEngine`] operation.
///
/// Every failure aborts the whole operation: registry state and the event
/// stream are left exactly as they were before the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The caller may not act on the role: it lacks membership of the
    /// role's admin role, it attempted to renounce on another account's
    /// behalf, or it failed a [`check_role`](AccessControlEngine::check_role)
    /// guard.
    #[error("account {account} is not authorized for role {role}")]
    Unauthorized {
        /// The account that failed the check.
        account: AccountId,
        /// The role it attempted to act on.
        role: RoleId,
    },
    /// The root role must keep administering itself.
    #[error("the root role's admin role cannot be reassigned")]
    InvariantViolation,
}

/// The role-hierarchy and membership engine.
///
/// Owns the [`RoleRegistry`] as its single writer and reports every actual
/// state change to the [`EventSink`]. Caller identity is an explicit
/// argument on each mutating operation; the surrounding execution
/// environment is expected to have authenticated it, to run one operation
/// at a time, and to make each operation atomic with respect to the
/// surrounding transaction.
#[derive(Debug)]
pub struct AccessControlEngine<S> {
    registry: RoleRegistry,
    sink: S,
}

impl<S: EventSink> AccessControlEngine<S> {
    /// Creates the engine and grants [`ROOT_ROLE`] to `initializer`.
    ///
    /// This bootstrap grant bypasses the authorization gate and is the only
    /// implicit grant in the system's lifetime.
    ///
    /// # Events
    ///
    /// * [`RoleEvent::RoleGranted`] with `initializer` as both account and
    ///   sender.
    pub fn new(initializer: AccountId, sink: S) -> Self {
        let mut engine = Self { registry: RoleRegistry::new(), sink };
        engine.setup(ROOT_ROLE, initializer);
        engine
    }

    /// Read access to the underlying registry.
    #[must_use]
    pub fn registry(&self) -> &RoleRegistry {
        &self.registry
    }

    /// Read access to the event sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns `true` if `account` has been granted `role`.
    #[must_use]
    pub fn has_role(&self, role: RoleId, account: AccountId) -> bool {
        self.registry.is_member(role, account)
    }

    /// Returns the admin role that controls `role`; [`ROOT_ROLE`] unless
    /// reassigned via [`Self::set_role_admin`].
    #[must_use]
    pub fn get_role_admin(&self, role: RoleId) -> RoleId {
        self.registry.admin(role)
    }

    /// Number of members of `role`.
    #[must_use]
    pub fn role_member_count(&self, role: RoleId) -> usize {
        self.registry.member_count(role)
    }

    /// The members of `role`, in unspecified order.
    #[must_use]
    pub fn role_members(&self, role: RoleId) -> Vec<AccountId> {
        self.registry.members(role).collect()
    }

    /// Errors unless `account` holds `role`.
    ///
    /// This is the guard embedders place in front of their own operations:
    ///
    /// ```
    /// # use access_kernel::{AccessControlEngine, AccountId, Error, RoleId};
    /// const MINTER_ROLE: RoleId = RoleId::label(b"MINTER_ROLE");
    ///
    /// fn mint(
    ///     engine: &AccessControlEngine<Vec<access_kernel::RoleEvent>>,
    ///     caller: AccountId,
    /// ) -> Result<(), Error> {
    ///     engine.check_role(MINTER_ROLE, caller)?;
    ///     // ...
    ///     Ok(())
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// * [`Error::Unauthorized`] - If `account` has not been granted `role`.
    pub fn check_role(
        &self,
        role: RoleId,
        account: AccountId,
    ) -> Result<(), Error> {
        if self.has_role(role, account) {
            Ok(())
        } else {
            tracing::debug!(%account, %role, "role check failed");
            Err(Error::Unauthorized { account, role })
        }
    }

    /// Grants `role` to `account`.
    ///
    /// Idempotent: if `account` already holds `role`, the call succeeds
    /// without emitting.
    ///
    /// # Errors
    ///
    /// * [`Error::Unauthorized`] - If `caller` is not a member of `role`'s
    ///   admin role.
    ///
    /// # Events
    ///
    /// * [`RoleEvent::RoleGranted`] - If membership actually changed.
    pub fn grant_role(
        &mut self,
        caller: AccountId,
        role: RoleId,
        account: AccountId,
    ) -> Result<(), Error> {
        self.authorize(caller, role)?;
        self.apply_grant(role, account, caller);
        Ok(())
    }

    /// Revokes `role` from `account`.
    ///
    /// Idempotent: if `account` does not hold `role`, the call succeeds
    /// without emitting.
    ///
    /// # Errors
    ///
    /// * [`Error::Unauthorized`] - If `caller` is not a member of `role`'s
    ///   admin role.
    ///
    /// # Events
    ///
    /// * [`RoleEvent::RoleRevoked`] - If membership actually changed.
    pub fn revoke_role(
        &mut self,
        caller: AccountId,
        role: RoleId,
        account: AccountId,
    ) -> Result<(), Error> {
        self.authorize(caller, role)?;
        self.apply_revoke(role, account, caller);
        Ok(())
    }

    /// Revokes `role` from the calling account itself.
    ///
    /// Only the bearer may renounce: no admin, including the role's own
    /// admin, may renounce on another account's behalf. Otherwise behaves
    /// exactly like [`Self::revoke_role`], with the event's `sender` equal
    /// to `caller`.
    ///
    /// # Errors
    ///
    /// * [`Error::Unauthorized`] - If `account` is not `caller`.
    ///
    /// # Events
    ///
    /// * [`RoleEvent::RoleRevoked`] - If membership actually changed.
    pub fn renounce_role(
        &mut self,
        caller: AccountId,
        role: RoleId,
        account: AccountId,
    ) -> Result<(), Error> {
        if caller != account {
            tracing::debug!(%caller, %role, "renounce rejected for another account");
            return Err(Error::Unauthorized { account: caller, role });
        }

        self.apply_revoke(role, account, caller);
        Ok(())
    }

    /// Sets `new_admin` as `role`'s admin role.
    ///
    /// This is the privileged reassignment primitive: it consults no gate,
    /// so it belongs in system initialization or behind an embedder-side
    /// privilege check, never on an open call path.
    ///
    /// # Errors
    ///
    /// * [`Error::InvariantViolation`] - If `role` is [`ROOT_ROLE`] and
    ///   `new_admin` is not; the root role always administers itself.
    ///
    /// # Events
    ///
    /// * [`RoleEvent::RoleAdminChanged`] - If the admin role actually
    ///   changed.
    pub fn set_role_admin(
        &mut self,
        role: RoleId,
        new_admin: RoleId,
    ) -> Result<(), Error> {
        if role == ROOT_ROLE && new_admin != ROOT_ROLE {
            return Err(Error::InvariantViolation);
        }

        let previous_admin_role = self.registry.admin(role);
        if previous_admin_role != new_admin {
            self.registry.set_admin(role, new_admin);
            self.sink.emit(RoleEvent::RoleAdminChanged {
                role,
                previous_admin_role,
                new_admin_role: new_admin,
            });
        }
        Ok(())
    }

    fn authorize(
        &self,
        caller: AccountId,
        role: RoleId,
    ) -> Result<(), Error> {
        if gate::can_administer(&self.registry, caller, role) {
            Ok(())
        } else {
            tracing::debug!(%caller, %role, "authorization denied");
            Err(Error::Unauthorized { account: caller, role })
        }
    }

    /// Bootstrap seeding, reachable only from [`Self::new`].
    fn setup(&mut self, role: RoleId, account: AccountId) {
        self.apply_grant(role, account, account);
    }

    fn apply_grant(
        &mut self,
        role: RoleId,
        account: AccountId,
        sender: AccountId,
    ) -> bool {
        let changed = self.registry.add_member(role, account);
        if changed {
            self.sink.emit(RoleEvent::RoleGranted { role, account, sender });
        }
        changed
    }

    fn apply_revoke(
        &mut self,
        role: RoleId,
        account: AccountId,
        sender: AccountId,
    ) -> bool {
        let changed = self.registry.remove_member(role, account);
        if changed {
            self.sink.emit(RoleEvent::RoleRevoked { role, account, sender });
        }
        changed
    }
}
