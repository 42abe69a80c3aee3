//! Core data models for the RBAC console
//!
//! This module contains the data structures that represent the access-control
//! domain: users, roles, permissions, and the table filter criteria.

pub mod filter;
pub mod ids;
pub mod role;
pub mod user;

pub use filter::{filter_roles, filter_users, RoleFilter, UserFilter};
pub use ids::{IdSequence, RoleId, UserId};
pub use role::{Permission, Role, RoleValidationError};
pub use user::{User, UserStatus, UserValidationError};
