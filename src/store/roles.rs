//! Canonical role collection
//!
//! Same shape as the user store: insertion-ordered records plus the id
//! allocator. Validation and audit live in the service layer.

use crate::models::{IdSequence, Role, RoleId};

/// Owns the canonical list of roles for the session
#[derive(Debug, Default)]
pub struct RoleStore {
    records: Vec<Role>,
    ids: IdSequence,
}

impl RoleStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// All roles in insertion order
    pub fn list(&self) -> &[Role] {
        &self.records
    }

    /// Look up a role by id
    pub fn get(&self, id: RoleId) -> Option<&Role> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Mutable lookup by id
    pub fn get_mut(&mut self, id: RoleId) -> Option<&mut Role> {
        self.records.iter_mut().find(|r| r.id == id)
    }

    /// Names of all roles, in insertion order (for role pickers)
    pub fn names(&self) -> Vec<String> {
        self.records.iter().map(|r| r.name.clone()).collect()
    }

    /// Hand out a fresh id; never reused within the session
    pub fn allocate_id(&mut self) -> RoleId {
        RoleId::new(self.ids.next())
    }

    /// Append a record. The id must have come from [`allocate_id`].
    ///
    /// [`allocate_id`]: Self::allocate_id
    pub fn insert(&mut self, role: Role) {
        self.records.push(role);
    }

    /// Remove a record by id, returning it if present
    pub fn remove(&mut self, id: RoleId) -> Option<Role> {
        let index = self.records.iter().position(|r| r.id == id)?;
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
