//! The authorization predicate gating role mutation.

use crate::{
    identity::{AccountId, RoleId},
    registry::RoleRegistry,
};

/// Whether `caller` may grant or revoke `role`.
///
/// Defined as membership of `role`'s current admin role. This is the only
/// authorization rule in the kernel: there is no ownership override and no
/// bypass beyond [`ROOT_ROLE`](crate::ROOT_ROLE) being the default admin of
/// every role.
#[must_use]
pub fn can_administer(
    registry: &RoleRegistry,
    caller: AccountId,
    role: RoleId,
) -> bool {
    registry.is_member(registry.admin(role), caller)
}
