//! Role-based access control core for multi-tenant SaaS backends
//!
//! One privilege matrix, shared by the dashboard (to decide what to render)
//! and the API backend (to decide what to allow), so the two can never
//! drift apart.
//!
//! ## Model
//!
//! - A [`PrivilegeTable`] maps every (Role, Resource, Operation) triple to a
//!   boolean. It is built once from declarative allow-lists and never
//!   mutated; lookups are O(1) and lock-free.
//! - A [`RequestContext`] carries the optional authenticated user id and the
//!   optional selected project with its membership list; resolving it yields
//!   `Option<Role>` - absence of a role is a value, not an error.
//! - An [`AccessGate`] composes the two: [`AccessGate::permissions`] for
//!   conditional UI rendering, [`AccessGate::authorize`] as the fail-closed
//!   request gate that keeps unauthenticated (401) and forbidden (403)
//!   distinct.
//!
//! ## Example Configuration
//!
//! ```toml
//! [access_control.roles.OWNER]
//! PROJECTS = ["CREATE", "READ", "UPDATE", "DELETE"]
//! PROJECT_USERS = ["CREATE", "READ", "UPDATE", "DELETE"]
//! PROJECT_INVITATIONS = ["CREATE", "READ", "UPDATE", "DELETE"]
//!
//! [access_control.roles.ADMIN]
//! PROJECTS = ["CREATE", "READ", "UPDATE", "DELETE"]
//! PROJECT_USERS = ["CREATE", "READ", "UPDATE", "DELETE"]
//! PROJECT_INVITATIONS = ["CREATE", "READ", "UPDATE", "DELETE"]
//!
//! [access_control.roles.MEMBER]
//! PROJECTS = ["CREATE", "READ"]
//! PROJECT_USERS = ["READ"]
//! PROJECT_INVITATIONS = ["READ"]
//! ```
//!
//! Every role and resource must be stated; within a stated pair, unlisted
//! operations are denied. Incomplete grants fail at load time.
//!
//! ## Example
//!
//! ```
//! use tenantguard::{
//!     AccessGate, Membership, Operation, ProjectContext, RequestContext, Resource, Role,
//! };
//!
//! let gate = AccessGate::default();
//! let ctx = RequestContext::with_project(
//!     "u2",
//!     ProjectContext::new(vec![
//!         Membership::new("u1", Role::Owner),
//!         Membership::new("u2", Role::Member),
//!     ]),
//! );
//!
//! assert!(gate.authorize(&ctx, Resource::Projects, Operation::Read).is_ok());
//! assert!(gate.authorize(&ctx, Resource::Projects, Operation::Delete).is_err());
//! ```

pub mod access_control;
pub mod config;
pub mod error;

// Re-export main types
pub use access_control::{
    AccessGate, Membership, Operation, PermissionMap, PrivilegeTable, PrivilegeTableBuilder,
    ProjectContext, RequestContext, Resource, Role,
};
pub use config::{AccessControlConfig, AppConfig, load_config, load_config_from_str};
pub use error::{AccessError, AppError, ConfigError, Result};
