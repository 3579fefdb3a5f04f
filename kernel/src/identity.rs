//! Opaque identifiers for roles and accounts.
//!
//! The kernel never inspects these values: identifiers are compared, hashed,
//! and passed through to events, nothing else. [`ROOT_ROLE`] is the one
//! reserved identifier, the all-zero role that administers itself and, by
//! default, every other role.

use core::fmt;

use alloy_primitives::{Address, B256};
use keccak_const::Keccak256;

/// Identifier of a role: an opaque 32-byte value.
///
/// Well-known roles should be exposed as `pub const` identifiers. The best
/// way to keep them unique is deriving them from a human-readable name with
/// [`RoleId::label`]:
///
/// ```
/// use access_kernel::RoleId;
///
/// const MINTER_ROLE: RoleId = RoleId::label(b"MINTER_ROLE");
/// # let _ = MINTER_ROLE;
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoleId(B256);

impl RoleId {
    /// Creates a role identifier from its raw 32-byte value.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(B256::new(bytes))
    }

    /// Derives a role identifier as the Keccak-256 digest of `name`.
    ///
    /// Usable in `const` position, so named roles can be declared as
    /// constants without precomputing the digest by hand.
    #[must_use]
    pub const fn label(name: &[u8]) -> Self {
        Self::new(Keccak256::new().update(name).finalize())
    }

    /// The raw 32 bytes of the identifier.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0 .0
    }
}

impl From<[u8; 32]> for RoleId {
    fn from(bytes: [u8; 32]) -> Self {
        Self::new(bytes)
    }
}

impl From<B256> for RoleId {
    fn from(value: B256) -> Self {
        Self(value)
    }
}

impl From<RoleId> for B256 {
    fn from(role: RoleId) -> Self {
        role.0
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The self-administering root role, `[0; 32]`.
///
/// Unless reassigned, it is the admin role of every role, so its members may
/// grant and revoke anything. It always administers itself; no operation can
/// move its admin elsewhere.
pub const ROOT_ROLE: RoleId = RoleId::new([0; 32]);

/// Identifier of an account: an opaque 20-byte value.
///
/// The surrounding execution environment authenticates callers; the kernel
/// treats the identifier as already trusted and only compares it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccountId(Address);

impl AccountId {
    /// Creates an account identifier from its raw 20-byte value.
    #[must_use]
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(Address::new(bytes))
    }
}

impl From<[u8; 20]> for AccountId {
    fn from(bytes: [u8; 20]) -> Self {
        Self::new(bytes)
    }
}

impl From<Address> for AccountId {
    fn from(value: Address) -> Self {
        Self(value)
    }
}

impl From<AccountId> for Address {
    fn from(account: AccountId) -> Self {
        account.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
