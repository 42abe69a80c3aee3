//! Audit entry data structure
//!
//! A single line in the audit trail: when something happened, who did it,
//! and a human-readable description of what was done.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A single audit log entry
///
/// Entries are immutable once appended; the log owns ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (local time, captured at append)
    pub timestamp: DateTime<Local>,

    /// Who performed the operation ("Admin" in absence of real auth)
    pub actor: String,

    /// Free-text description of the operation
    pub action: String,
}

impl AuditEntry {
    /// Create a new entry stamped with the current time
    pub fn new(actor: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            actor: actor.into(),
            action: action.into(),
        }
    }

    /// Timestamp formatted for table display
    pub fn timestamp_display(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    /// Format the entry as a single human-readable line
    pub fn format_human_readable(&self) -> String {
        format!("[{}] {}: {}", self.timestamp_display(), self.actor, self.action)
    }
}
