//! Audit trail for the RBAC console
//!
//! Every mutating operation on the user and role stores appends one entry
//! to a shared, append-only, newest-first log. The log lives in memory for
//! the session; there is no persistence.

mod entry;
mod log;

pub use entry::AuditEntry;
pub use log::AuditLog;
