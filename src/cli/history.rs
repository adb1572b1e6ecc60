//! CLI command for browsing the audit log

use crate::audit::AuditEntry;
use crate::error::AddressBookResult;
use crate::storage::Storage;

/// Print the most recent `limit` changes, oldest first
pub fn handle_history_command(storage: &Storage, limit: usize) -> AddressBookResult<()> {
    let entries = storage.audit().read_recent(limit)?;
    println!("{}", format_history(&entries));
    Ok(())
}

fn format_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No changes recorded.".to_string();
    }

    entries
        .iter()
        .map(AuditEntry::format_human_readable)
        .collect::<Vec<_>>()
        .join("\n")
}
