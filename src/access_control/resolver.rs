//! Role resolver
//!
//! Derives the effective role for a request from the authenticated user id
//! and the selected project's membership list. "No role" is a valid,
//! non-exceptional outcome: an unauthenticated request, a request with no
//! project selected, an empty membership list, and a user who is simply not
//! a member all resolve to `None`.
//!
//! The resolver performs no network or storage access. Memberships and the
//! user id are loaded by the authentication and project context providers
//! and handed in fully resident, so resolution is a pure function over its
//! inputs and safe for unbounded concurrent use.

use crate::access_control::types::Role;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Association of a user with a role inside one project
///
/// Owned by the project/user management layer; the resolver only reads it.
/// User ids are unique within one project's membership list; ordering is
/// irrelevant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    /// Stable unique identifier of the user
    pub user_id: String,
    /// The user's role within the project
    pub role: Role,
}

impl Membership {
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }
}

/// The currently selected project, carrying its membership list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectContext {
    /// Membership records for the project
    #[serde(default)]
    pub members: Vec<Membership>,
}

impl ProjectContext {
    pub fn new(members: Vec<Membership>) -> Self {
        Self { members }
    }
}

/// Transient per-request bundle of optional identity and project context
///
/// Both parts may be absent: an unauthenticated request has no user id, and
/// a request outside any project (or before one is selected) has no project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Authenticated user id, if any
    #[serde(default)]
    pub user_id: Option<String>,
    /// Selected project, if any
    #[serde(default)]
    pub project: Option<ProjectContext>,
}

impl RequestContext {
    /// Context for an unauthenticated request
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Context for an authenticated request with no project selected
    pub fn authenticated(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            project: None,
        }
    }

    /// Context for an authenticated request targeting a project
    pub fn with_project(user_id: impl Into<String>, project: ProjectContext) -> Self {
        Self {
            user_id: Some(user_id.into()),
            project: Some(project),
        }
    }

    /// Resolve the caller's role within the selected project
    ///
    /// Returns `None` when the user id is absent, no project is selected,
    /// the membership list is empty, or the user is not a member. Never
    /// panics and never defaults to a role.
    pub fn resolve_role(&self) -> Option<Role> {
        let user_id = self.user_id.as_deref()?;
        let project = self.project.as_ref()?;
        let role = project
            .members
            .iter()
            .find(|member| member.user_id == user_id)
            .map(|member| member.role);
        trace!(user = user_id, role = ?role, "Resolved role");
        role
    }
}
