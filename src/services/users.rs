//! User service
//!
//! Business logic for user management: validation, CRUD against the user
//! store, and one audit entry per successful mutating operation.

use crate::error::{RbacError, RbacResult};
use crate::models::{User, UserId, UserStatus};
use crate::store::Directory;

/// Fields for a new user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub roles: Vec<String>,
    pub status: UserStatus,
}

/// Partial update for an existing user; `None` fields keep their value
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub roles: Option<Vec<String>>,
    pub status: Option<UserStatus>,
}

/// Service for user management
pub struct UserService<'a> {
    dir: &'a mut Directory,
    actor: String,
}

impl<'a> UserService<'a> {
    /// Create a new user service acting on behalf of `actor`
    pub fn new(dir: &'a mut Directory, actor: impl Into<String>) -> Self {
        Self {
            dir,
            actor: actor.into(),
        }
    }

    /// All users in insertion order
    pub fn list(&self) -> &[User] {
        self.dir.users.list()
    }

    /// Look up a user by id
    pub fn get(&self, id: UserId) -> RbacResult<&User> {
        self.dir
            .users
            .get(id)
            .ok_or_else(|| RbacError::user_not_found(id.to_string()))
    }

    /// Create a new user
    pub fn create(&mut self, new: NewUser) -> RbacResult<User> {
        let id = self.dir.users.allocate_id();
        let user = User::new(id, new.name.trim(), new.email.trim(), new.roles, new.status);
        user.validate()
            .map_err(|e| RbacError::Validation(e.to_string()))?;

        self.dir.users.insert(user.clone());
        self.dir
            .audit
            .record(&self.actor, format!("Added new user: {}", user.name));

        Ok(user)
    }

    /// Update an existing user; fields left `None` are preserved
    pub fn update(&mut self, id: UserId, changes: UserUpdate) -> RbacResult<User> {
        let current = self
            .dir
            .users
            .get(id)
            .ok_or_else(|| RbacError::user_not_found(id.to_string()))?;

        let mut updated = current.clone();
        if let Some(name) = changes.name {
            updated.name = name.trim().to_string();
        }
        if let Some(email) = changes.email {
            updated.email = email.trim().to_string();
        }
        if let Some(roles) = changes.roles {
            updated.set_roles(roles);
        }
        if let Some(status) = changes.status {
            updated.status = status;
        }
        updated.updated_at = chrono::Utc::now();

        updated
            .validate()
            .map_err(|e| RbacError::Validation(e.to_string()))?;

        // Lookup above guarantees the slot still exists.
        *self.dir.users.get_mut(id).unwrap() = updated.clone();
        self.dir
            .audit
            .record(&self.actor, format!("Updated user: {}", updated.name));

        Ok(updated)
    }

    /// Delete a user, returning the removed record.
    ///
    /// The caller is responsible for gating this behind an explicit
    /// confirmation; the service deletes unconditionally.
    pub fn delete(&mut self, id: UserId) -> RbacResult<User> {
        let user = self
            .dir
            .users
            .remove(id)
            .ok_or_else(|| RbacError::user_not_found(id.to_string()))?;

        self.dir
            .audit
            .record(&self.actor, format!("Deleted user: {}", user.name));

        Ok(user)
    }

    /// Replace a user's role set wholesale (inline role editing)
    pub fn set_roles(&mut self, id: UserId, roles: Vec<String>) -> RbacResult<User> {
        let user = self
            .dir
            .users
            .get_mut(id)
            .ok_or_else(|| RbacError::user_not_found(id.to_string()))?;

        user.set_roles(roles);
        let user = user.clone();

        self.dir
            .audit
            .record(&self.actor, format!("Updated roles for user: {}", user.name));

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> NewUser {
        NewUser {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            roles: vec!["Viewer".to_string()],
            status: UserStatus::Active,
        }
    }

    #[test]
    fn test_create_first_user_gets_id_one() {
        let mut dir = Directory::new();
        let mut service = UserService::new(&mut dir, "Admin");

        let user = service.create(ann()).unwrap();
        assert_eq!(user.id, UserId::new(1));
        assert_eq!(service.list().len(), 1);
        assert_eq!(service.list()[0].id, UserId::new(1));
    }

    #[test]
    fn test_create_grows_collection_by_one_and_audits_once() {
        let mut dir = Directory::with_sample_data();
        let before = dir.users.len();
        let audit_before = dir.audit.len();

        let mut service = UserService::new(&mut dir, "Admin");
        let user = service.create(ann()).unwrap();

        assert_eq!(dir.users.len(), before + 1);
        assert_eq!(dir.audit.len(), audit_before + 1);
        let latest = dir.audit.latest().unwrap();
        assert_eq!(latest.actor, "Admin");
        assert_eq!(latest.action, format!("Added new user: {}", user.name));
    }

    #[test]
    fn test_create_validation_failure_leaves_state_untouched() {
        let mut dir = Directory::new();
        let mut service = UserService::new(&mut dir, "Admin");

        let mut bad = ann();
        bad.email = "not-an-email".to_string();
        let err = service.create(bad).unwrap_err();
        assert!(err.is_validation());

        assert!(dir.users.is_empty());
        assert!(dir.audit.is_empty());
    }

    #[test]
    fn test_ids_unique_across_deletions() {
        let mut dir = Directory::new();
        let mut service = UserService::new(&mut dir, "Admin");

        let first = service.create(ann()).unwrap();
        service.delete(first.id).unwrap();
        let second = service.create(ann()).unwrap();

        // length+1 would hand out id 1 again; the counter must not.
        assert_ne!(second.id, first.id);
        assert_eq!(second.id, UserId::new(2));
    }

    #[test]
    fn test_partial_update_preserves_omitted_fields() {
        let mut dir = Directory::new();
        let mut service = UserService::new(&mut dir, "Admin");
        let user = service.create(ann()).unwrap();

        let updated = service
            .update(
                user.id,
                UserUpdate {
                    name: Some("Anna".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Anna");
        assert_eq!(updated.email, "ann@x.com");
        assert_eq!(updated.roles, vec!["Viewer"]);
        assert_eq!(updated.status, UserStatus::Active);

        let listed = service.get(user.id).unwrap();
        assert_eq!(listed.name, "Anna");
    }

    #[test]
    fn test_update_missing_user() {
        let mut dir = Directory::new();
        let mut service = UserService::new(&mut dir, "Admin");

        let err = service
            .update(UserId::new(9), UserUpdate::default())
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_twice_fails_second_time_only() {
        let mut dir = Directory::with_sample_data();
        let mut service = UserService::new(&mut dir, "Admin");

        service.delete(UserId::new(1)).unwrap();
        let err = service.delete(UserId::new(1)).unwrap_err();
        assert!(err.is_not_found());

        // Only Jane remains and the failed call changed nothing.
        assert_eq!(dir.users.len(), 1);
        assert_eq!(dir.users.list()[0].id, UserId::new(2));
        assert_eq!(dir.audit.len(), 1);
    }

    #[test]
    fn test_delete_names_removed_record() {
        let mut dir = Directory::with_sample_data();
        let mut service = UserService::new(&mut dir, "Admin");

        let removed = service.delete(UserId::new(2)).unwrap();
        assert_eq!(removed.name, "Jane Smith");
        assert_eq!(
            dir.audit.latest().unwrap().action,
            "Deleted user: Jane Smith"
        );
    }

    #[test]
    fn test_set_roles_replaces_wholesale() {
        let mut dir = Directory::with_sample_data();
        let mut service = UserService::new(&mut dir, "Admin");

        let updated = service
            .set_roles(UserId::new(1), vec!["Viewer".to_string()])
            .unwrap();
        assert_eq!(updated.roles, vec!["Viewer"]);

        let err = service.set_roles(UserId::new(99), vec![]).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_custom_actor_in_audit() {
        let mut dir = Directory::new();
        let mut service = UserService::new(&mut dir, "Operator");
        service.create(ann()).unwrap();
        assert_eq!(dir.audit.latest().unwrap().actor, "Operator");
    }
}
