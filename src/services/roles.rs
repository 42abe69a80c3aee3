//! Role service
//!
//! Business logic for role management: validation, CRUD against the role
//! store, permission toggling, and audit entries for every mutation.

use crate::error::{RbacError, RbacResult};
use crate::models::{Permission, Role, RoleId};
use crate::store::Directory;

/// Fields for a new role
#[derive(Debug, Clone)]
pub struct NewRole {
    pub name: String,
    pub description: String,
    pub permissions: Vec<Permission>,
}

/// Partial update for an existing role; `None` fields keep their value
#[derive(Debug, Clone, Default)]
pub struct RoleUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub permissions: Option<Vec<Permission>>,
}

/// Service for role management
pub struct RoleService<'a> {
    dir: &'a mut Directory,
    actor: String,
}

impl<'a> RoleService<'a> {
    /// Create a new role service acting on behalf of `actor`
    pub fn new(dir: &'a mut Directory, actor: impl Into<String>) -> Self {
        Self {
            dir,
            actor: actor.into(),
        }
    }

    /// All roles in insertion order
    pub fn list(&self) -> &[Role] {
        self.dir.roles.list()
    }

    /// Look up a role by id
    pub fn get(&self, id: RoleId) -> RbacResult<&Role> {
        self.dir
            .roles
            .get(id)
            .ok_or_else(|| RbacError::role_not_found(id.to_string()))
    }

    /// Create a new role
    pub fn create(&mut self, new: NewRole) -> RbacResult<Role> {
        let id = self.dir.roles.allocate_id();
        let role = Role::new(
            id,
            new.name.trim(),
            new.description.trim(),
            new.permissions,
        );
        role.validate()
            .map_err(|e| RbacError::Validation(e.to_string()))?;

        self.dir.roles.insert(role.clone());
        self.dir
            .audit
            .record(&self.actor, format!("Created role: {}", role.name));

        Ok(role)
    }

    /// Update an existing role; fields left `None` are preserved
    pub fn update(&mut self, id: RoleId, changes: RoleUpdate) -> RbacResult<Role> {
        let current = self
            .dir
            .roles
            .get(id)
            .ok_or_else(|| RbacError::role_not_found(id.to_string()))?;

        let mut updated = current.clone();
        if let Some(name) = changes.name {
            updated.name = name.trim().to_string();
        }
        if let Some(description) = changes.description {
            updated.description = description.trim().to_string();
        }
        if let Some(permissions) = changes.permissions {
            updated.set_permissions(permissions);
        }
        updated.updated_at = chrono::Utc::now();

        updated
            .validate()
            .map_err(|e| RbacError::Validation(e.to_string()))?;

        // Lookup above guarantees the slot still exists.
        *self.dir.roles.get_mut(id).unwrap() = updated.clone();
        self.dir
            .audit
            .record(&self.actor, format!("Updated role: {}", updated.name));

        Ok(updated)
    }

    /// Delete a role, returning the removed record.
    ///
    /// The caller is responsible for gating this behind an explicit
    /// confirmation; the service deletes unconditionally.
    pub fn delete(&mut self, id: RoleId) -> RbacResult<Role> {
        let role = self
            .dir
            .roles
            .remove(id)
            .ok_or_else(|| RbacError::role_not_found(id.to_string()))?;

        self.dir
            .audit
            .record(&self.actor, format!("Deleted role: {}", role.name));

        Ok(role)
    }

    /// Flip membership of a permission in the role's permission set
    pub fn toggle_permission(&mut self, id: RoleId, permission: Permission) -> RbacResult<Role> {
        let role = self
            .dir
            .roles
            .get_mut(id)
            .ok_or_else(|| RbacError::role_not_found(id.to_string()))?;

        let granted = role.toggle_permission(permission);
        let role = role.clone();

        let verb = if granted { "Granted" } else { "Revoked" };
        self.dir.audit.record(
            &self.actor,
            format!("{} permission {} for role: {}", verb, permission, role.name),
        );

        Ok(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moderator() -> NewRole {
        NewRole {
            name: "Moderator".to_string(),
            description: "Can review content".to_string(),
            permissions: vec![Permission::Read, Permission::Write],
        }
    }

    #[test]
    fn test_create_role() {
        let mut dir = Directory::new();
        let mut service = RoleService::new(&mut dir, "Admin");

        let role = service.create(moderator()).unwrap();
        assert_eq!(role.id, RoleId::new(1));
        assert_eq!(service.list().len(), 1);
        assert_eq!(dir.audit.latest().unwrap().action, "Created role: Moderator");
    }

    #[test]
    fn test_create_requires_name_and_description() {
        let mut dir = Directory::new();
        let mut service = RoleService::new(&mut dir, "Admin");

        let mut bad = moderator();
        bad.description = String::new();
        let err = service.create(bad).unwrap_err();
        assert!(err.is_validation());
        assert!(dir.roles.is_empty());
        assert!(dir.audit.is_empty());
    }

    #[test]
    fn test_partial_update_preserves_omitted_fields() {
        let mut dir = Directory::with_sample_data();
        let mut service = RoleService::new(&mut dir, "Admin");

        let updated = service
            .update(
                RoleId::new(2),
                RoleUpdate {
                    description: Some("Edits everything".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Editor");
        assert_eq!(updated.description, "Edits everything");
        assert_eq!(
            updated.permissions,
            vec![Permission::Read, Permission::Write]
        );
    }

    #[test]
    fn test_toggle_removes_then_restores() {
        // Roles = [{id:1, name:"Admin", permissions:{Read,Write,Delete}}]
        let mut dir = Directory::with_sample_data();
        let mut service = RoleService::new(&mut dir, "Admin");

        let role = service
            .toggle_permission(RoleId::new(1), Permission::Write)
            .unwrap();
        assert_eq!(role.permissions, vec![Permission::Read, Permission::Delete]);

        let entry = dir.audit.latest().unwrap();
        assert_eq!(entry.actor, "Admin");
        assert!(entry.action.contains("Write"));
        assert!(entry.action.contains("Admin"));
        assert_eq!(dir.audit.len(), 1);

        // Toggling again restores membership.
        let mut service = RoleService::new(&mut dir, "Admin");
        let role = service
            .toggle_permission(RoleId::new(1), Permission::Write)
            .unwrap();
        assert!(role.has_permission(Permission::Write));
        assert!(dir.audit.latest().unwrap().action.starts_with("Granted"));
        assert_eq!(dir.audit.len(), 2);
    }

    #[test]
    fn test_toggle_missing_role() {
        let mut dir = Directory::new();
        let mut service = RoleService::new(&mut dir, "Admin");
        let err = service
            .toggle_permission(RoleId::new(5), Permission::Read)
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(dir.audit.is_empty());
    }

    #[test]
    fn test_delete_twice_fails_second_time_only() {
        let mut dir = Directory::with_sample_data();
        let mut service = RoleService::new(&mut dir, "Admin");

        let removed = service.delete(RoleId::new(3)).unwrap();
        assert_eq!(removed.name, "Viewer");
        assert_eq!(dir.audit.latest().unwrap().action, "Deleted role: Viewer");

        let mut service = RoleService::new(&mut dir, "Admin");
        let err = service.delete(RoleId::new(3)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(dir.roles.len(), 2);
    }

    #[test]
    fn test_every_mutation_audits_exactly_once() {
        let mut dir = Directory::new();
        let mut service = RoleService::new(&mut dir, "Admin");

        let role = service.create(moderator()).unwrap();
        assert_eq!(dir.audit.len(), 1);

        let mut service = RoleService::new(&mut dir, "Admin");
        service
            .update(role.id, RoleUpdate::default())
            .unwrap();
        assert_eq!(dir.audit.len(), 2);

        let mut service = RoleService::new(&mut dir, "Admin");
        service
            .toggle_permission(role.id, Permission::Delete)
            .unwrap();
        assert_eq!(dir.audit.len(), 3);

        let mut service = RoleService::new(&mut dir, "Admin");
        service.delete(role.id).unwrap();
        assert_eq!(dir.audit.len(), 4);

        // Newest entry first.
        assert_eq!(dir.audit.latest().unwrap().action, "Deleted role: Moderator");
    }
}
