//! Error types for tenantguard
//!
//! `thiserror` enums per concern, wired into a top-level `AppError`.
//! Absence of context (no user, no project, no membership) is never an
//! error here; the only errors are authorization rejections and invalid
//! configuration.

use crate::access_control::types::{Operation, Resource, Role};
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Access error: {0}")]
    Access(#[from] AccessError),
}

/// Authorization rejections
///
/// The two variants are deliberately distinct so enforcement middleware can
/// map them to different responses (401 vs 403) without string inspection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// No identity at all on the request
    #[error("Unauthenticated: no user identity on the request")]
    Unauthenticated,

    /// Identity present, but the operation is denied (or no role resolves)
    #[error("Forbidden: {operation} on {resource} denied for role {role:?}")]
    Forbidden {
        resource: Resource,
        operation: Operation,
        /// Resolved role at the time of the check; `None` if the caller has
        /// no role in the target project
        role: Option<Role>,
    },
}

impl AccessError {
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, AccessError::Unauthenticated)
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, AccessError::Forbidden { .. })
    }
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Unknown role: {role}")]
    UnknownRole { role: String },

    #[error("Unknown resource: {resource}")]
    UnknownResource { resource: String },

    #[error("Unknown operation: {operation}")]
    UnknownOperation { operation: String },

    #[error("Missing grant for role {role}{}", .resource.as_deref().map(|r| format!(" on resource {r}")).unwrap_or_default())]
    MissingGrant {
        role: String,
        /// `None` when the role section is missing entirely
        resource: Option<String>,
    },
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;
