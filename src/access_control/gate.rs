//! Composed authorization check
//!
//! Combines role resolution with the privilege table. Two consumers share
//! the same semantics:
//!
//! - the dashboard asks for the full [`PermissionMap`] of the resolved role
//!   to decide which affordances to render, recomputing it whenever the
//!   context changes (project switch, login, logout);
//! - request middleware calls [`AccessGate::authorize`] before the handler
//!   runs and rejects the request on `Err`, so enforcement is fail-closed.
//!
//! Unauthenticated (no identity at all) and forbidden (identity present but
//! the operation is denied, or no role resolves) are distinct outcomes and
//! map to distinct error variants.

use crate::access_control::resolver::RequestContext;
use crate::access_control::table::{PermissionMap, PrivilegeTable};
use crate::access_control::types::{Operation, Resource, Role};
use crate::error::AccessError;
use tracing::debug;

/// Authorization gate over an immutable privilege table
///
/// Built once at process start; holds no mutable state, so a single gate can
/// serve concurrent checks without coordination.
#[derive(Debug, Clone, Default)]
pub struct AccessGate {
    table: PrivilegeTable,
}

impl AccessGate {
    pub fn new(table: PrivilegeTable) -> Self {
        Self { table }
    }

    /// The underlying privilege table
    pub fn table(&self) -> &PrivilegeTable {
        &self.table
    }

    /// Full permission map for the context's resolved role
    ///
    /// Resolves the role on every call; the result must not be cached across
    /// role transitions. A context with no resolvable role gets
    /// [`PermissionMap::DENY_ALL`] - the table is never indexed without a
    /// role in hand.
    pub fn permissions(&self, ctx: &RequestContext) -> PermissionMap {
        match ctx.resolve_role() {
            Some(role) => self.table.permissions_for(role),
            None => PermissionMap::DENY_ALL,
        }
    }

    /// Check whether the context may perform an operation, fail-closed
    ///
    /// Returns the resolved role on success so handlers can reuse it.
    /// `Unauthenticated` is returned only when no user id is present;
    /// everything else that falls short is `Forbidden`, including a user
    /// with no role in the target project.
    pub fn authorize(
        &self,
        ctx: &RequestContext,
        resource: Resource,
        operation: Operation,
    ) -> Result<Role, AccessError> {
        if ctx.user_id.is_none() {
            debug!(resource = %resource, operation = %operation, "Denied: unauthenticated");
            return Err(AccessError::Unauthenticated);
        }

        let role = ctx.resolve_role();
        let allowed = role
            .map(|role| self.table.is_allowed(role, resource, operation))
            .unwrap_or(false);

        debug!(
            role = ?role,
            resource = %resource,
            operation = %operation,
            allowed,
            "Checked access"
        );

        match (role, allowed) {
            (Some(role), true) => Ok(role),
            _ => Err(AccessError::Forbidden {
                resource,
                operation,
                role,
            }),
        }
    }

    /// Boolean form of [`authorize`](Self::authorize)
    pub fn is_allowed(&self, ctx: &RequestContext, resource: Resource, operation: Operation) -> bool {
        self.authorize(ctx, resource, operation).is_ok()
    }
}
