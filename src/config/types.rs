//! Configuration types for tenantguard
//!
//! Declarative privilege grants that can be loaded from TOML files and/or
//! environment variables. The grant tables are string-keyed here because
//! they cross the configuration boundary; they are parsed into the closed
//! enumerations, and checked for completeness, when the privilege table is
//! built.

use crate::access_control::types::{Operation, Resource, Role};
use serde::Deserialize;
use std::collections::HashMap;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Access control grants
    pub access_control: AccessControlConfig,
}

/// Declarative privilege grants: role name -> resource name -> allowed
/// operations
///
/// Every role and, under it, every resource must be stated explicitly; an
/// empty operation list means "no access". Operations not listed for a
/// stated (role, resource) pair default to denied when the table is built.
///
/// ```toml
/// [access_control.roles.OWNER]
/// PROJECTS = ["CREATE", "READ", "UPDATE", "DELETE"]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AccessControlConfig {
    pub roles: HashMap<String, HashMap<String, Vec<String>>>,
}

impl Default for AccessControlConfig {
    /// The canonical product matrix, mirroring
    /// [`PrivilegeTable::default`](crate::access_control::PrivilegeTable)
    fn default() -> Self {
        let full: Vec<String> = Operation::all()
            .iter()
            .map(|op| op.as_str().to_string())
            .collect();
        let ops = |ops: &[Operation]| -> Vec<String> {
            ops.iter().map(|op| op.as_str().to_string()).collect()
        };

        let mut roles = HashMap::new();
        for role in [Role::Owner, Role::Admin] {
            let grants: HashMap<String, Vec<String>> = Resource::all()
                .iter()
                .map(|resource| (resource.as_str().to_string(), full.clone()))
                .collect();
            roles.insert(role.as_str().to_string(), grants);
        }

        let member: HashMap<String, Vec<String>> = HashMap::from([
            (
                Resource::Projects.as_str().to_string(),
                ops(&[Operation::Create, Operation::Read]),
            ),
            (
                Resource::ProjectUsers.as_str().to_string(),
                ops(&[Operation::Read]),
            ),
            (
                Resource::ProjectInvitations.as_str().to_string(),
                ops(&[Operation::Read]),
            ),
        ]);
        roles.insert(Role::Member.as_str().to_string(), member);

        Self { roles }
    }
}
