/*!
Role-based access control kernel for ledgered execution environments.

Roles are opaque 32-byte identifiers. Each role is administered by the
members of its *admin role*; the all-zero [`ROOT_ROLE`] administers itself
and, by default, every role whose admin was never reassigned. The
[`AccessControlEngine`] owns the role registry, consults the one
authorization predicate before every mutation, and reports each actual
state change to an [`EventSink`].

Operations are atomic and idempotent: a failed call leaves the registry and
the event stream untouched, and an operation that finds the membership set
already in the requested state succeeds without emitting.

The execution environment is the embedder's concern: callers arrive already
authenticated, operations run one at a time, and whatever the sink does
with events (storage, indexing, delivery) happens outside the kernel.

# Examples

```
use access_kernel::{AccessControlEngine, AccountId, RoleId, ROOT_ROLE};

const USER_ROLE: RoleId = RoleId::label(b"USER_ROLE");

let deployer = AccountId::new([1; 20]);
let user = AccountId::new([2; 20]);

let mut engine = AccessControlEngine::new(deployer, Vec::new());
assert!(engine.has_role(ROOT_ROLE, deployer));
assert_eq!(engine.get_role_admin(USER_ROLE), ROOT_ROLE);

engine.grant_role(deployer, USER_ROLE, user)?;
assert!(engine.has_role(USER_ROLE, user));

engine.renounce_role(user, USER_ROLE, user)?;
assert!(!engine.has_role(USER_ROLE, user));
# Ok::<(), access_kernel::Error>(())
```
*/

#![allow(clippy::module_name_repetitions)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod engine;
pub mod events;
pub mod gate;
pub mod identity;
pub mod registry;

pub use engine::{AccessControlEngine, Error};
pub use events::{EventSink, RoleEvent, TracingSink};
pub use gate::can_administer;
pub use identity::{AccountId, RoleId, ROOT_ROLE};
pub use registry::{RoleRecord, RoleRegistry};
