//! Role model
//!
//! Represents role definitions: a name, a description, and the set of
//! permissions the role grants. The permission vocabulary is fixed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::RoleId;

/// A single grantable permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Read,
    Write,
    Delete,
}

impl Permission {
    /// The full permission vocabulary, in display order
    pub const ALL: [Permission; 3] = [Self::Read, Self::Write, Self::Delete];

    /// Parse a permission from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "read" => Some(Self::Read),
            "write" => Some(Self::Write),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "Read"),
            Self::Write => write!(f, "Write"),
            Self::Delete => write!(f, "Delete"),
        }
    }
}

/// A role definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    /// Unique identifier, assigned at creation and never reused
    pub id: RoleId,

    /// Role name (e.g. "Editor")
    pub name: String,

    /// What the role is for
    pub description: String,

    /// Permissions this role grants (no duplicates)
    pub permissions: Vec<Permission>,

    /// When the role was created
    pub created_at: DateTime<Utc>,

    /// When the role was last modified
    pub updated_at: DateTime<Utc>,
}

impl Role {
    /// Create a new role record
    pub fn new(
        id: RoleId,
        name: impl Into<String>,
        description: impl Into<String>,
        permissions: Vec<Permission>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            description: description.into(),
            permissions: dedup_permissions(permissions),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether this role grants the given permission
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Flip membership of a permission: add if absent, remove if present.
    /// Returns true if the permission is granted after the toggle.
    pub fn toggle_permission(&mut self, permission: Permission) -> bool {
        let granted = if self.has_permission(permission) {
            self.permissions.retain(|p| *p != permission);
            false
        } else {
            self.permissions.push(permission);
            true
        };
        self.updated_at = Utc::now();
        granted
    }

    /// Replace the permission set wholesale, dropping duplicates
    pub fn set_permissions(&mut self, permissions: Vec<Permission>) {
        self.permissions = dedup_permissions(permissions);
        self.updated_at = Utc::now();
    }

    /// Validate the role record
    pub fn validate(&self) -> Result<(), RoleValidationError> {
        if self.name.trim().is_empty() {
            return Err(RoleValidationError::EmptyName);
        }
        if self.description.trim().is_empty() {
            return Err(RoleValidationError::EmptyDescription);
        }
        Ok(())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.description)
    }
}

/// Drop duplicate permissions while keeping first-occurrence order
fn dedup_permissions(permissions: Vec<Permission>) -> Vec<Permission> {
    let mut seen = Vec::with_capacity(permissions.len());
    for permission in permissions {
        if !seen.contains(&permission) {
            seen.push(permission);
        }
    }
    seen
}

/// Validation errors for roles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleValidationError {
    EmptyName,
    EmptyDescription,
}

impl fmt::Display for RoleValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Role name cannot be empty"),
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
        }
    }
}

impl std::error::Error for RoleValidationError {}
