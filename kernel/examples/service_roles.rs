//! Consumer-defined roles over the generic kernel: a service bootstraps its
//! deployer as administrator, delegates a business role, and streams every
//! membership change to `tracing`.

use access_kernel::{AccessControlEngine, AccountId, Error, RoleId, TracingSink};

const USER_ROLE: RoleId = RoleId::label(b"USER_ROLE");

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().init();

    let deployer = AccountId::new([0x11; 20]);
    let user = AccountId::new([0x22; 20]);

    let mut engine = AccessControlEngine::new(deployer, TracingSink);

    engine.grant_role(deployer, USER_ROLE, user)?;
    engine.check_role(USER_ROLE, user)?;

    // A compromised account can always shed its own privileges.
    engine.renounce_role(user, USER_ROLE, user)?;
    assert!(!engine.has_role(USER_ROLE, user));

    Ok(())
}
