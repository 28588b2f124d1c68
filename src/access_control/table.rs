//! Privilege table
//!
//! A total function from (Role, Resource, Operation) to a boolean, stored as
//! a fixed-size array indexed by enum ordinal. The table is built exactly
//! once, from declarative allow-lists, and is immutable afterwards: lookups
//! are O(1), side-effect free, and safe to share across threads without
//! locking.

use crate::access_control::types::{Operation, Resource, Role};
use crate::config::AccessControlConfig;
use crate::error::ConfigError;
use serde::ser::{Serialize, SerializeMap, Serializer};

type Grants = [[[bool; Operation::COUNT]; Resource::COUNT]; Role::COUNT];

/// Immutable (Role, Resource, Operation) -> bool lookup table
///
/// Every triple has an explicit entry; operations not named in a grant are
/// expanded to `false` when the table is built, never interpreted per query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivilegeTable {
    grants: Grants,
}

impl PrivilegeTable {
    /// Start building a table from declarative grants
    pub fn builder() -> PrivilegeTableBuilder {
        PrivilegeTableBuilder::new()
    }

    /// Build a table from a declarative configuration
    ///
    /// Fails fast if the configuration names an unknown role, resource, or
    /// operation, or if any (role, resource) pair is left unstated. An empty
    /// operation list is a valid way to state "no access"; silence is not.
    pub fn from_config(config: &AccessControlConfig) -> Result<Self, ConfigError> {
        // Reject unknown names before checking completeness, so typos are
        // reported as typos rather than as missing grants.
        for (role_name, resources) in &config.roles {
            if Role::try_parse(role_name).is_none() {
                return Err(ConfigError::UnknownRole {
                    role: role_name.clone(),
                });
            }
            for (resource_name, operations) in resources {
                if Resource::try_parse(resource_name).is_none() {
                    return Err(ConfigError::UnknownResource {
                        resource: resource_name.clone(),
                    });
                }
                for op_name in operations {
                    if Operation::try_parse(op_name).is_none() {
                        return Err(ConfigError::UnknownOperation {
                            operation: op_name.clone(),
                        });
                    }
                }
            }
        }

        let mut builder = PrivilegeTableBuilder::new();
        for role in Role::all() {
            let resources =
                config
                    .roles
                    .get(role.as_str())
                    .ok_or_else(|| ConfigError::MissingGrant {
                        role: role.as_str().to_string(),
                        resource: None,
                    })?;
            for resource in Resource::all() {
                let operations = resources.get(resource.as_str()).ok_or_else(|| {
                    ConfigError::MissingGrant {
                        role: role.as_str().to_string(),
                        resource: Some(resource.as_str().to_string()),
                    }
                })?;
                // Names were validated above
                let ops: Vec<Operation> = operations
                    .iter()
                    .filter_map(|op| Operation::try_parse(op))
                    .collect();
                builder = builder.allow(*role, *resource, &ops);
            }
        }
        Ok(builder.build())
    }

    /// Check whether a role may perform an operation on a resource
    pub fn is_allowed(&self, role: Role, resource: Resource, operation: Operation) -> bool {
        self.grants[role.index()][resource.index()][operation.index()]
    }

    /// Get the full permission map for a role
    ///
    /// The map has an entry for every (resource, operation) pair. Callers
    /// holding no resolved role should use [`PermissionMap::DENY_ALL`]
    /// instead of indexing the table.
    pub fn permissions_for(&self, role: Role) -> PermissionMap {
        PermissionMap {
            grants: self.grants[role.index()],
        }
    }

    /// Check that permission sets are monotonic with privilege tier
    ///
    /// OWNER ⊇ ADMIN ⊇ MEMBER per (resource, operation). Not enforced at
    /// build time, since a deployment may deliberately carve exceptions,
    /// but the canonical matrix must satisfy it.
    pub fn is_monotonic(&self) -> bool {
        Resource::all().iter().all(|resource| {
            Operation::all().iter().all(|op| {
                let member = self.is_allowed(Role::Member, *resource, *op);
                let admin = self.is_allowed(Role::Admin, *resource, *op);
                let owner = self.is_allowed(Role::Owner, *resource, *op);
                (!member || admin) && (!admin || owner)
            })
        })
    }
}

impl Default for PrivilegeTable {
    /// The canonical product matrix: owners and admins hold full CRUD on
    /// every resource; members may create and read projects, and read
    /// project users and invitations.
    fn default() -> Self {
        use Operation::*;
        PrivilegeTable::builder()
            .allow(Role::Owner, Resource::Projects, &[Create, Read, Update, Delete])
            .allow(Role::Owner, Resource::ProjectUsers, &[Create, Read, Update, Delete])
            .allow(Role::Owner, Resource::ProjectInvitations, &[Create, Read, Update, Delete])
            .allow(Role::Admin, Resource::Projects, &[Create, Read, Update, Delete])
            .allow(Role::Admin, Resource::ProjectUsers, &[Create, Read, Update, Delete])
            .allow(Role::Admin, Resource::ProjectInvitations, &[Create, Read, Update, Delete])
            .allow(Role::Member, Resource::Projects, &[Create, Read])
            .allow(Role::Member, Resource::ProjectUsers, &[Read])
            .allow(Role::Member, Resource::ProjectInvitations, &[Read])
            .build()
    }
}

/// Builder collecting declarative grants of the form
/// "role R may perform [operations] on resource X"
///
/// Pairs never granted stay all-false. Repeated grants for the same
/// (role, resource) pair are merged.
#[derive(Debug, Clone)]
pub struct PrivilegeTableBuilder {
    grants: Grants,
}

impl PrivilegeTableBuilder {
    fn new() -> Self {
        Self {
            grants: [[[false; Operation::COUNT]; Resource::COUNT]; Role::COUNT],
        }
    }

    /// Allow the listed operations for a (role, resource) pair
    pub fn allow(mut self, role: Role, resource: Resource, operations: &[Operation]) -> Self {
        for op in operations {
            self.grants[role.index()][resource.index()][op.index()] = true;
        }
        self
    }

    /// Finish building; the expansion to a total table happened as grants
    /// were recorded, so this cannot fail
    pub fn build(self) -> PrivilegeTable {
        PrivilegeTable {
            grants: self.grants,
        }
    }
}

impl Default for PrivilegeTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-role view of the privilege table: one boolean per
/// (resource, operation) pair
///
/// Serializes to nested maps keyed by wire names, e.g.
/// `{"PROJECTS": {"CREATE": true, ...}, ...}`, which is the shape the
/// dashboard consumes to decide which affordances to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionMap {
    grants: [[bool; Operation::COUNT]; Resource::COUNT],
}

impl PermissionMap {
    /// The "no role" outcome: every operation on every resource is denied
    pub const DENY_ALL: PermissionMap = PermissionMap {
        grants: [[false; Operation::COUNT]; Resource::COUNT],
    };

    /// Check whether this map permits an operation on a resource
    pub fn allows(&self, resource: Resource, operation: Operation) -> bool {
        self.grants[resource.index()][operation.index()]
    }

    /// True if no operation is permitted on any resource
    pub fn is_deny_all(&self) -> bool {
        self.grants.iter().flatten().all(|granted| !granted)
    }
}

impl Serialize for PermissionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct OperationRow([bool; Operation::COUNT]);

        impl Serialize for OperationRow {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(Operation::COUNT))?;
                for op in Operation::all() {
                    map.serialize_entry(op.as_str(), &self.0[op.index()])?;
                }
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(Resource::COUNT))?;
        for resource in Resource::all() {
            map.serialize_entry(
                resource.as_str(),
                &OperationRow(self.grants[resource.index()]),
            )?;
        }
        map.end()
    }
}
