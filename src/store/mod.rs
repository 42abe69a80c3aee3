//! Session state: the two record stores and the shared audit log
//!
//! The [`Directory`] is the single controller object owning all mutable
//! state for a session. It is constructed at startup and dropped at exit;
//! there are no globals and nothing is persisted.

mod roles;
mod users;

pub use roles::RoleStore;
pub use users::UserStore;

use crate::audit::AuditLog;
use crate::models::{Permission, Role, User, UserStatus};

/// All session state: users, roles, and the audit trail they share
#[derive(Debug, Default)]
pub struct Directory {
    pub users: UserStore,
    pub roles: RoleStore,
    pub audit: AuditLog,
}

impl Directory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory seeded with the stock sample records.
    ///
    /// Seeding goes straight to the stores so the audit log starts empty,
    /// matching a fresh session.
    pub fn with_sample_data() -> Self {
        let mut dir = Self::new();

        let id = dir.roles.allocate_id();
        dir.roles.insert(Role::new(
            id,
            "Admin",
            "Full access to all resources",
            vec![Permission::Read, Permission::Write, Permission::Delete],
        ));
        let id = dir.roles.allocate_id();
        dir.roles.insert(Role::new(
            id,
            "Editor",
            "Can edit content but cannot delete",
            vec![Permission::Read, Permission::Write],
        ));
        let id = dir.roles.allocate_id();
        dir.roles.insert(Role::new(
            id,
            "Viewer",
            "Can only view content",
            vec![Permission::Read],
        ));

        let id = dir.users.allocate_id();
        dir.users.insert(User::new(
            id,
            "John Doe",
            "john@example.com",
            vec!["Admin".to_string()],
            UserStatus::Active,
        ));
        let id = dir.users.allocate_id();
        dir.users.insert(User::new(
            id,
            "Jane Smith",
            "jane@example.com",
            vec!["Editor".to_string(), "Viewer".to_string()],
            UserStatus::Inactive,
        ));

        dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_directory() {
        let dir = Directory::new();
        assert!(dir.users.is_empty());
        assert!(dir.roles.is_empty());
        assert!(dir.audit.is_empty());
    }

    #[test]
    fn test_sample_data_shape() {
        let dir = Directory::with_sample_data();

        assert_eq!(dir.users.len(), 2);
        assert_eq!(dir.roles.len(), 3);
        assert_eq!(dir.roles.names(), vec!["Admin", "Editor", "Viewer"]);

        let admin = &dir.roles.list()[0];
        assert_eq!(admin.permissions.len(), 3);
        let viewer = &dir.roles.list()[2];
        assert_eq!(viewer.permissions, vec![Permission::Read]);

        // Seeding is not an operator action, so nothing is audited.
        assert!(dir.audit.is_empty());
    }

    #[test]
    fn test_sample_ids_continue_after_seed() {
        let mut dir = Directory::with_sample_data();
        assert_eq!(dir.users.allocate_id().value(), 3);
        assert_eq!(dir.roles.allocate_id().value(), 4);
    }
}
