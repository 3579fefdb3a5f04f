//! Role-change notifications and their observers.
//!
//! The kernel guarantees which events fire and in what order; what happens
//! to them afterwards (storage, indexing, delivery) is the sink's concern.

use crate::identity::{AccountId, RoleId};

/// A notification accompanying a successful role mutation.
///
/// Exactly one event fires per actual state change; an operation that finds
/// the registry already in the requested state fires nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoleEvent {
    /// `account` was granted `role` by `sender`.
    RoleGranted {
        /// The granted role.
        role: RoleId,
        /// The new member.
        account: AccountId,
        /// The caller that performed the grant.
        sender: AccountId,
    },
    /// `account` had `role` revoked.
    ///
    /// `sender` is the admin-role bearer for a revocation, and `account`
    /// itself for a renunciation.
    RoleRevoked {
        /// The revoked role.
        role: RoleId,
        /// The former member.
        account: AccountId,
        /// The caller that performed the revocation.
        sender: AccountId,
    },
    /// `role` is now administered by `new_admin_role` instead of
    /// `previous_admin_role`.
    RoleAdminChanged {
        /// The role whose admin changed.
        role: RoleId,
        /// The admin role before the change.
        previous_admin_role: RoleId,
        /// The admin role after the change.
        new_admin_role: RoleId,
    },
}

/// Observer receiving [`RoleEvent`]s as the engine applies mutations.
pub trait EventSink {
    /// Receives one event, after the corresponding state change has been
    /// applied.
    fn emit(&mut self, event: RoleEvent);
}

/// Recording sink: appends every event, in emission order.
impl EventSink for Vec<RoleEvent> {
    fn emit(&mut self, event: RoleEvent) {
        self.push(event);
    }
}

/// Discarding sink.
impl EventSink for () {
    fn emit(&mut self, _event: RoleEvent) {}
}

/// Sink forwarding each event to [`tracing`] as a structured record at
/// `info` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: RoleEvent) {
        match event {
            RoleEvent::RoleGranted { role, account, sender } => {
                tracing::info!(%role, %account, %sender, "role granted");
            }
            RoleEvent::RoleRevoked { role, account, sender } => {
                tracing::info!(%role, %account, %sender, "role revoked");
            }
            RoleEvent::RoleAdminChanged {
                role,
                previous_admin_role,
                new_admin_role,
            } => {
                tracing::info!(
                    %role,
                    %previous_admin_role,
                    %new_admin_role,
                    "role admin changed"
                );
            }
        }
    }
}
