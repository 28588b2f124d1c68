//! Access control types
//!
//! The three closed enumerations the privilege table is keyed by. New
//! resources are added as new enumerants, never inferred dynamically.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Access tier of a user within a project
///
/// Exactly one role per (user, project) membership, immutable for the
/// lifetime of a request. "No role" is represented as `Option<Role>` by the
/// resolver, never as a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Owner,
    Admin,
    Member,
}

impl Role {
    pub(crate) const COUNT: usize = 3;

    /// Get the role name as used on the wire and in configuration
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "OWNER",
            Role::Admin => "ADMIN",
            Role::Member => "MEMBER",
        }
    }

    /// Try to parse a role from its wire name
    pub fn try_parse(s: &str) -> Option<Self> {
        match s {
            "OWNER" => Some(Role::Owner),
            "ADMIN" => Some(Role::Admin),
            "MEMBER" => Some(Role::Member),
            _ => None,
        }
    }

    /// Get all roles
    pub const fn all() -> &'static [Role] {
        &[Role::Owner, Role::Admin, Role::Member]
    }

    pub(crate) const fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Protected entity class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Resource {
    Projects,
    ProjectUsers,
    ProjectInvitations,
}

impl Resource {
    pub(crate) const COUNT: usize = 3;

    /// Get the resource name as used on the wire and in configuration
    pub const fn as_str(&self) -> &'static str {
        match self {
            Resource::Projects => "PROJECTS",
            Resource::ProjectUsers => "PROJECT_USERS",
            Resource::ProjectInvitations => "PROJECT_INVITATIONS",
        }
    }

    /// Try to parse a resource from its wire name
    pub fn try_parse(s: &str) -> Option<Self> {
        match s {
            "PROJECTS" => Some(Resource::Projects),
            "PROJECT_USERS" => Some(Resource::ProjectUsers),
            "PROJECT_INVITATIONS" => Some(Resource::ProjectInvitations),
            _ => None,
        }
    }

    /// Get all resources
    pub const fn all() -> &'static [Resource] {
        &[
            Resource::Projects,
            Resource::ProjectUsers,
            Resource::ProjectInvitations,
        ]
    }

    pub(crate) const fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Action on a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

impl Operation {
    pub(crate) const COUNT: usize = 4;

    /// Check if this operation modifies data
    pub const fn is_mutating(&self) -> bool {
        !matches!(self, Operation::Read)
    }

    /// Get the operation name as used on the wire and in configuration
    pub const fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "CREATE",
            Operation::Read => "READ",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
        }
    }

    /// Try to parse an operation from its wire name
    pub fn try_parse(s: &str) -> Option<Self> {
        match s {
            "CREATE" => Some(Operation::Create),
            "READ" => Some(Operation::Read),
            "UPDATE" => Some(Operation::Update),
            "DELETE" => Some(Operation::Delete),
            _ => None,
        }
    }

    /// Get all operations
    pub const fn all() -> &'static [Operation] {
        &[
            Operation::Create,
            Operation::Read,
            Operation::Update,
            Operation::Delete,
        ]
    }

    pub(crate) const fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
