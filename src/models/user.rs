//! User model
//!
//! Represents managed user accounts: who they are, which roles they hold,
//! and whether they are active.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// Whether a user account is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    /// Parse a status from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }

    /// Flip between Active and Inactive
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Inactive => write!(f, "Inactive"),
        }
    }
}

/// A managed user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned at creation and never reused
    pub id: UserId,

    /// Display name (e.g. "John Doe")
    pub name: String,

    /// Email address
    pub email: String,

    /// Names of the roles assigned to this user (no duplicates)
    pub roles: Vec<String>,

    /// Whether the account is active
    pub status: UserStatus,

    /// When the user was created
    pub created_at: DateTime<Utc>,

    /// When the user was last modified
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        roles: Vec<String>,
        status: UserStatus,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            email: email.into(),
            roles: dedup_roles(roles),
            status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this user holds the given role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Replace the role set wholesale, dropping duplicates
    pub fn set_roles(&mut self, roles: Vec<String>) {
        self.roles = dedup_roles(roles);
        self.updated_at = Utc::now();
    }

    /// Validate the user record
    pub fn validate(&self) -> Result<(), UserValidationError> {
        if self.name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if self.email.trim().is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if !is_valid_email(&self.email) {
            return Err(UserValidationError::InvalidEmail(self.email.clone()));
        }
        if self.roles.is_empty() {
            return Err(UserValidationError::NoRoles);
        }
        Ok(())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// Drop duplicate role names while keeping first-occurrence order
fn dedup_roles(roles: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(roles.len());
    for role in roles {
        if !seen.contains(&role) {
            seen.push(role);
        }
    }
    seen
}

/// Cheap shape check: one '@', non-empty local part, dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = match parts.next() {
        Some(d) => d,
        None => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Validation errors for users
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyName,
    EmptyEmail,
    InvalidEmail(String),
    NoRoles,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::EmptyEmail => write!(f, "Email cannot be empty"),
            Self::InvalidEmail(email) => write!(f, "Not a valid email address: {}", email),
            Self::NoRoles => write!(f, "At least one role must be selected"),
        }
    }
}

impl std::error::Error for UserValidationError {}
