//! End-to-end walkthroughs of the public surface, from bootstrap to
//! renunciation, asserting membership and the emitted event stream together.

use access_kernel::{
    AccessControlEngine, AccountId, Error, RoleEvent, RoleId, ROOT_ROLE,
};

const USER_ROLE: RoleId = RoleId::label(b"USER_ROLE");

const DEPLOYER: AccountId = AccountId::new([0xaa; 20]);
const ACCOUNT_B: AccountId = AccountId::new([0xbb; 20]);
const ACCOUNT_C: AccountId = AccountId::new([0xcc; 20]);
const ACCOUNT_D: AccountId = AccountId::new([0xdd; 20]);

fn deploy() -> AccessControlEngine<Vec<RoleEvent>> {
    AccessControlEngine::new(DEPLOYER, Vec::new())
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn root_role_is_the_zero_identifier() {
    assert_eq!(ROOT_ROLE.as_bytes(), &[0u8; 32]);
}

#[test]
fn deployer_holds_root_role_after_bootstrap() {
    let engine = deploy();
    assert!(engine.has_role(ROOT_ROLE, DEPLOYER));
    assert_eq!(
        engine.sink().as_slice(),
        &[RoleEvent::RoleGranted {
            role: ROOT_ROLE,
            account: DEPLOYER,
            sender: DEPLOYER,
        }]
    );
}

#[test]
fn root_role_is_its_own_admin() {
    assert_eq!(deploy().get_role_admin(ROOT_ROLE), ROOT_ROLE);
}

#[test]
fn unconfigured_roles_are_administered_by_root() {
    assert_eq!(deploy().get_role_admin(USER_ROLE), ROOT_ROLE);
}

// ============================================================================
// Granting
// ============================================================================

#[test]
fn deployer_grants_a_business_role() {
    let mut engine = deploy();
    engine.grant_role(DEPLOYER, USER_ROLE, ACCOUNT_B).unwrap();
    assert!(engine.has_role(USER_ROLE, ACCOUNT_B));
    assert_eq!(
        engine.sink().last(),
        Some(&RoleEvent::RoleGranted {
            role: USER_ROLE,
            account: ACCOUNT_B,
            sender: DEPLOYER,
        })
    );
}

#[test]
fn granting_an_existing_member_succeeds_without_emitting() {
    let mut engine = deploy();
    engine.grant_role(DEPLOYER, USER_ROLE, ACCOUNT_B).unwrap();
    let emitted = engine.sink().len();
    engine.grant_role(DEPLOYER, USER_ROLE, ACCOUNT_B).unwrap();
    assert!(engine.has_role(USER_ROLE, ACCOUNT_B));
    assert_eq!(engine.sink().len(), emitted);
}

#[test]
fn grant_by_non_admin_fails_and_leaves_no_trace() {
    let mut engine = deploy();
    let emitted = engine.sink().len();
    let err = engine.grant_role(ACCOUNT_C, USER_ROLE, ACCOUNT_D).unwrap_err();
    assert_eq!(
        err,
        Error::Unauthorized { account: ACCOUNT_C, role: USER_ROLE }
    );
    assert!(!engine.has_role(USER_ROLE, ACCOUNT_D));
    assert_eq!(engine.sink().len(), emitted);
}

// ============================================================================
// Revoking
// ============================================================================

#[test]
fn revoking_a_member_emits_once() {
    let mut engine = deploy();
    engine.grant_role(DEPLOYER, USER_ROLE, ACCOUNT_B).unwrap();
    engine.revoke_role(DEPLOYER, USER_ROLE, ACCOUNT_B).unwrap();
    assert!(!engine.has_role(USER_ROLE, ACCOUNT_B));
    assert_eq!(
        engine.sink().last(),
        Some(&RoleEvent::RoleRevoked {
            role: USER_ROLE,
            account: ACCOUNT_B,
            sender: DEPLOYER,
        })
    );
}

#[test]
fn revoking_a_non_member_succeeds_without_emitting() {
    let mut engine = deploy();
    let emitted = engine.sink().len();
    engine.revoke_role(DEPLOYER, USER_ROLE, ACCOUNT_B).unwrap();
    assert_eq!(engine.sink().len(), emitted);
}

#[test]
fn revoke_by_non_admin_fails() {
    let mut engine = deploy();
    engine.grant_role(DEPLOYER, USER_ROLE, ACCOUNT_B).unwrap();
    let err = engine.revoke_role(ACCOUNT_C, USER_ROLE, ACCOUNT_B).unwrap_err();
    assert_eq!(
        err,
        Error::Unauthorized { account: ACCOUNT_C, role: USER_ROLE }
    );
    assert!(engine.has_role(USER_ROLE, ACCOUNT_B));
}

// ============================================================================
// Renouncing
// ============================================================================

#[test]
fn renouncing_for_another_account_fails() {
    let mut engine = deploy();
    engine.grant_role(DEPLOYER, USER_ROLE, ACCOUNT_B).unwrap();
    let err =
        engine.renounce_role(DEPLOYER, USER_ROLE, ACCOUNT_B).unwrap_err();
    assert_eq!(
        err,
        Error::Unauthorized { account: DEPLOYER, role: USER_ROLE }
    );
    assert!(engine.has_role(USER_ROLE, ACCOUNT_B));
}

#[test]
fn bearer_renounces_their_own_role() {
    let mut engine = deploy();
    engine.grant_role(DEPLOYER, USER_ROLE, ACCOUNT_B).unwrap();
    engine.renounce_role(ACCOUNT_B, USER_ROLE, ACCOUNT_B).unwrap();
    assert!(!engine.has_role(USER_ROLE, ACCOUNT_B));
    assert_eq!(
        engine.sink().last(),
        Some(&RoleEvent::RoleRevoked {
            role: USER_ROLE,
            account: ACCOUNT_B,
            sender: ACCOUNT_B,
        })
    );
}

#[test]
fn renouncing_a_role_not_held_succeeds_without_emitting() {
    let mut engine = deploy();
    let emitted = engine.sink().len();
    engine.renounce_role(ACCOUNT_B, USER_ROLE, ACCOUNT_B).unwrap();
    assert_eq!(engine.sink().len(), emitted);
}

// ============================================================================
// Delegated administration
// ============================================================================

#[test]
fn delegated_admins_manage_without_root_membership() {
    const MODERATOR_ROLE: RoleId = RoleId::label(b"MODERATOR_ROLE");

    let mut engine = deploy();
    engine.set_role_admin(USER_ROLE, MODERATOR_ROLE).unwrap();
    engine.grant_role(DEPLOYER, MODERATOR_ROLE, ACCOUNT_B).unwrap();

    // Account B administers USER_ROLE through MODERATOR_ROLE alone.
    assert!(!engine.has_role(ROOT_ROLE, ACCOUNT_B));
    engine.grant_role(ACCOUNT_B, USER_ROLE, ACCOUNT_C).unwrap();
    assert!(engine.has_role(USER_ROLE, ACCOUNT_C));

    // The deployer, despite holding the root role, no longer passes the
    // gate for USER_ROLE.
    let err = engine.grant_role(DEPLOYER, USER_ROLE, ACCOUNT_D).unwrap_err();
    assert_eq!(
        err,
        Error::Unauthorized { account: DEPLOYER, role: USER_ROLE }
    );
}

#[test]
fn full_lifecycle_event_stream() {
    let mut engine = deploy();
    engine.grant_role(DEPLOYER, USER_ROLE, ACCOUNT_B).unwrap();
    engine.grant_role(DEPLOYER, USER_ROLE, ACCOUNT_C).unwrap();
    engine.revoke_role(DEPLOYER, USER_ROLE, ACCOUNT_C).unwrap();
    engine.renounce_role(ACCOUNT_B, USER_ROLE, ACCOUNT_B).unwrap();

    assert_eq!(
        engine.sink().as_slice(),
        &[
            RoleEvent::RoleGranted {
                role: ROOT_ROLE,
                account: DEPLOYER,
                sender: DEPLOYER,
            },
            RoleEvent::RoleGranted {
                role: USER_ROLE,
                account: ACCOUNT_B,
                sender: DEPLOYER,
            },
            RoleEvent::RoleGranted {
                role: USER_ROLE,
                account: ACCOUNT_C,
                sender: DEPLOYER,
            },
            RoleEvent::RoleRevoked {
                role: USER_ROLE,
                account: ACCOUNT_C,
                sender: DEPLOYER,
            },
            RoleEvent::RoleRevoked {
                role: USER_ROLE,
                account: ACCOUNT_B,
                sender: ACCOUNT_B,
            },
        ]
    );
}
