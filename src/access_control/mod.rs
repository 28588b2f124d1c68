//! Access control module
//!
//! Role-based access control shared by the dashboard and the API backend.
//!
//! ## Model
//!
//! ```text
//! RequestContext --resolve_role()--> Option<Role> --PrivilegeTable--> bool
//! ```
//!
//! - [`PrivilegeTable`] is a total function from (Role, Resource, Operation)
//!   to a boolean, built once from declarative allow-lists and immutable
//!   afterwards.
//! - [`RequestContext::resolve_role`] derives the caller's role from the
//!   selected project's membership list; every absence case yields `None`.
//! - [`AccessGate`] composes the two: a permission map for conditional UI
//!   rendering, and a fail-closed `authorize` for request enforcement that
//!   keeps unauthenticated and forbidden as distinct outcomes.
//!
//! Both deployment shapes must share one table so what the UI shows never
//! drifts from what the server allows.

pub mod gate;
pub mod resolver;
pub mod table;
pub mod types;

pub use gate::AccessGate;
pub use resolver::{Membership, ProjectContext, RequestContext};
pub use table::{PermissionMap, PrivilegeTable, PrivilegeTableBuilder};
pub use types::{Operation, Resource, Role};
