//! Business logic layer
//!
//! Services wrap the raw stores with validation and audit logging. Every
//! successful mutating operation appends exactly one entry to the shared
//! audit log; failed operations leave all state untouched.

pub mod roles;
pub mod users;

pub use roles::{NewRole, RoleService, RoleUpdate};
pub use users::{NewUser, UserService, UserUpdate};
