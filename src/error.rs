//! Custom error types for the RBAC console
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for RBAC console operations
#[derive(Error, Debug)]
pub enum RbacError {
    /// Validation errors for records submitted through a form
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// I/O errors (terminal setup/teardown)
    #[error("I/O error: {0}")]
    Io(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl RbacError {
    /// Create a "not found" error for users
    pub fn user_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "User",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for roles
    pub fn role_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Role",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for RbacError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for RBAC console operations
pub type RbacResult<T> = Result<T, RbacError>;
