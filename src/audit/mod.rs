//! Audit logging
//!
//! Records every contact create, update and delete with before/after values
//! in an append-only audit log.
//!
//! - `AuditEntry`: one operation on one contact, with timestamp and optional
//!   before/after JSON.
//! - `AuditLogger`: appends entries to the log file as JSON lines and reads
//!   them back.
//! - `generate_diff`: summarizes what changed between two contact states.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
