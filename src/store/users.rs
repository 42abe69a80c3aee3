//! Canonical user collection
//!
//! Dumb collection layer: insertion-ordered records plus the id allocator.
//! Validation and audit live in the service layer above.

use crate::models::{IdSequence, User, UserId};

/// Owns the canonical list of users for the session
#[derive(Debug, Default)]
pub struct UserStore {
    records: Vec<User>,
    ids: IdSequence,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// All users in insertion order
    pub fn list(&self) -> &[User] {
        &self.records
    }

    /// Look up a user by id
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.records.iter().find(|u| u.id == id)
    }

    /// Mutable lookup by id
    pub fn get_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.records.iter_mut().find(|u| u.id == id)
    }

    /// Hand out a fresh id; never reused within the session
    pub fn allocate_id(&mut self) -> UserId {
        UserId::new(self.ids.next())
    }

    /// Append a record. The id must have come from [`allocate_id`].
    ///
    /// [`allocate_id`]: Self::allocate_id
    pub fn insert(&mut self, user: User) {
        self.records.push(user);
    }

    /// Remove a record by id, returning it if present
    pub fn remove(&mut self, id: UserId) -> Option<User> {
        let index = self.records.iter().position(|u| u.id == id)?;
        Some(self.records.remove(index))
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserStatus;

    fn store_with(names: &[&str]) -> UserStore {
        let mut store = UserStore::new();
        for name in names {
            let id = store.allocate_id();
            store.insert(User::new(
                id,
                *name,
                format!("{}@example.com", name.to_lowercase()),
                vec!["Viewer".to_string()],
                UserStatus::Active,
            ));
        }
        store
    }

    #[test]
    fn test_insert_preserves_order() {
        let store = store_with(&["Ann", "Bob", "Cal"]);
        let names: Vec<&str> = store.list().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Bob", "Cal"]);
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut store = store_with(&["Ann", "Bob"]);
        store.remove(UserId::new(2)).unwrap();

        let fresh = store.allocate_id();
        assert_eq!(fresh, UserId::new(3));
        assert!(store.get(fresh).is_none());
    }

    #[test]
    fn test_remove_missing_is_none() {
        let mut store = store_with(&["Ann"]);
        assert!(store.remove(UserId::new(99)).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_mut() {
        let mut store = store_with(&["Ann"]);
        store.get_mut(UserId::new(1)).unwrap().name = "Anna".to_string();
        assert_eq!(store.get(UserId::new(1)).unwrap().name, "Anna");
    }
}
