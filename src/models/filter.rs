//! Filter criteria for the user and role tables
//!
//! Filtering is a pure derivation over (collection, criteria): no caching,
//! no side effects. The views recompute it on every render.

use super::role::{Permission, Role};
use super::user::User;

/// Search/filter criteria for the users table
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    /// Case-insensitive substring matched against name OR email
    pub search: String,

    /// When set, only users holding this role pass
    pub role: Option<String>,
}

impl UserFilter {
    /// True when no criteria are set
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.role.is_none()
    }

    /// Does this user pass the current criteria? Both conditions are
    /// conjunctive.
    pub fn matches(&self, user: &User) -> bool {
        let term = self.search.to_lowercase();
        let text_match = term.is_empty()
            || user.name.to_lowercase().contains(&term)
            || user.email.to_lowercase().contains(&term);

        let role_match = match &self.role {
            Some(role) => user.has_role(role),
            None => true,
        };

        text_match && role_match
    }
}

/// Filter criteria for the roles table
#[derive(Debug, Clone, Default)]
pub struct RoleFilter {
    /// Selected permissions; a role passes only if it grants ALL of them
    pub permissions: Vec<Permission>,
}

impl RoleFilter {
    /// True when no criteria are set
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    /// Flip membership of a permission in the selection
    pub fn toggle(&mut self, permission: Permission) {
        if self.permissions.contains(&permission) {
            self.permissions.retain(|p| *p != permission);
        } else {
            self.permissions.push(permission);
        }
    }

    /// Does this role grant every selected permission?
    pub fn matches(&self, role: &Role) -> bool {
        self.permissions.iter().all(|p| role.has_permission(*p))
    }
}

/// Derive the visible subset of users, preserving collection order
pub fn filter_users<'a>(users: &'a [User], filter: &UserFilter) -> Vec<&'a User> {
    users.iter().filter(|u| filter.matches(u)).collect()
}

/// Derive the visible subset of roles, preserving collection order
pub fn filter_roles<'a>(roles: &'a [Role], filter: &RoleFilter) -> Vec<&'a Role> {
    roles.iter().filter(|r| filter.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ids::{RoleId, UserId};
    use crate::models::user::UserStatus;

    fn sample_users() -> Vec<User> {
        vec![
            User::new(
                UserId::new(1),
                "John Doe",
                "john@example.com",
                vec!["Admin".to_string()],
                UserStatus::Active,
            ),
            User::new(
                UserId::new(2),
                "Jane Smith",
                "jane@example.com",
                vec!["Editor".to_string(), "Viewer".to_string()],
                UserStatus::Inactive,
            ),
        ]
    }

    fn sample_roles() -> Vec<Role> {
        vec![
            Role::new(
                RoleId::new(1),
                "Admin",
                "Full access",
                vec![Permission::Read, Permission::Write, Permission::Delete],
            ),
            Role::new(
                RoleId::new(2),
                "Editor",
                "Can edit content",
                vec![Permission::Read, Permission::Write],
            ),
            Role::new(RoleId::new(3), "Viewer", "Read only", vec![Permission::Read]),
        ]
    }

    #[test]
    fn test_empty_criteria_returns_everything_in_order() {
        let users = sample_users();
        let view = filter_users(&users, &UserFilter::default());
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].id, UserId::new(1));
        assert_eq!(view[1].id, UserId::new(2));

        let roles = sample_roles();
        let view = filter_roles(&roles, &RoleFilter::default());
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn test_search_matches_name_or_email_case_insensitive() {
        let users = sample_users();

        let by_name = UserFilter {
            search: "jOhN".to_string(),
            role: None,
        };
        let view = filter_users(&users, &by_name);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "John Doe");

        let by_email = UserFilter {
            search: "JANE@".to_string(),
            role: None,
        };
        let view = filter_users(&users, &by_email);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Jane Smith");
    }

    #[test]
    fn test_role_filter_is_conjunctive_with_search() {
        let users = sample_users();
        let filter = UserFilter {
            search: "example.com".to_string(),
            role: Some("Viewer".to_string()),
        };
        let view = filter_users(&users, &filter);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Jane Smith");

        // Search hits but role does not: no match.
        let filter = UserFilter {
            search: "john".to_string(),
            role: Some("Viewer".to_string()),
        };
        assert!(filter_users(&users, &filter).is_empty());
    }

    #[test]
    fn test_role_filter_requires_all_selected_permissions() {
        let roles = sample_roles();
        let mut filter = RoleFilter::default();
        filter.toggle(Permission::Read);
        filter.toggle(Permission::Write);

        let view = filter_roles(&roles, &filter);
        assert_eq!(view.len(), 2); // Admin and Editor, not Viewer

        filter.toggle(Permission::Delete);
        let view = filter_roles(&roles, &filter);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Admin");
    }

    #[test]
    fn test_toggle_filter_selection() {
        let mut filter = RoleFilter::default();
        filter.toggle(Permission::Write);
        assert_eq!(filter.permissions, vec![Permission::Write]);
        filter.toggle(Permission::Write);
        assert!(filter.is_empty());
    }
}
