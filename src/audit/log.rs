//! In-memory audit log
//!
//! Append-only, newest-first. Both record stores share one log for the
//! lifetime of the session; nothing is ever mutated or removed.

use std::collections::VecDeque;

use super::entry::AuditEntry;

/// The shared audit sink
#[derive(Debug, Default)]
pub struct AuditLog {
    /// Entries with the newest at the front
    entries: VecDeque<AuditEntry>,
}

impl AuditLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry describing an operation, stamped now.
    /// New entries go to the front.
    pub fn record(&mut self, actor: impl Into<String>, action: impl Into<String>) {
        self.entries.push_front(AuditEntry::new(actor, action));
    }

    /// Iterate entries newest-first
    pub fn entries(&self) -> impl Iterator<Item = &AuditEntry> {
        self.entries.iter()
    }

    /// The most recent entry, if any
    pub fn latest(&self) -> Option<&AuditEntry> {
        self.entries.front()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
