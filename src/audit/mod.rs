//! Audit logging for bankdesk
//!
//! Every mutation the local gateway performs (new users, attached accounts,
//! services, ATMs, service payments) is appended to a line-delimited JSON
//! log next to the data directory.
//!
//! - `AuditEntry`: one operation with timestamp, entity and optional
//!   before/after values.
//! - `AuditLogger`: appends entries (JSONL) and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
