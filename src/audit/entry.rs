//! One line of the contact change history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What happened to a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Operation::Create => "CREATE",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
        };
        f.write_str(label)
    }
}

/// A contact change as stored in `audit.log`
///
/// `before` is absent for a new contact and `after` is absent for a deleted
/// one; an update carries both plus a short summary of what differs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    /// Name of the contact the change applies to
    pub contact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

fn snapshot<T: Serialize>(record: &T) -> Option<Value> {
    serde_json::to_value(record).ok()
}

impl AuditEntry {
    fn now(operation: Operation, contact: String, before: Option<Value>, after: Option<Value>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            contact,
            before,
            after,
            diff_summary: None,
        }
    }

    pub fn create<T: Serialize>(contact: impl Into<String>, record: &T) -> Self {
        Self::now(Operation::Create, contact.into(), None, snapshot(record))
    }

    pub fn update<T: Serialize>(
        contact: impl Into<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Self {
        Self {
            diff_summary,
            ..Self::now(
                Operation::Update,
                contact.into(),
                snapshot(before),
                snapshot(after),
            )
        }
    }

    pub fn delete<T: Serialize>(contact: impl Into<String>, record: &T) -> Self {
        Self::now(Operation::Delete, contact.into(), snapshot(record), None)
    }

    /// One `history` line: `[time] OP name`, plus the changed fields on the
    /// next line for updates
    pub fn format_human_readable(&self) -> String {
        let stamp = self.timestamp.format("%Y-%m-%d %H:%M:%S UTC");
        match &self.diff_summary {
            Some(diff) => format!(
                "[{}] {} {}\n  Changes: {}",
                stamp, self.operation, self.contact, diff
            ),
            None => format!("[{}] {} {}", stamp, self.operation, self.contact),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_create_entry() {
        let data = json!({"name": "John", "phones": ["1234567890"]});
        let entry = AuditEntry::create("John", &data);

        assert_eq!(entry.operation, Operation::Create);
        assert!(entry.before.is_none());
        assert_eq!(entry.after, Some(data));
    }

    #[test]
    fn test_update_entry() {
        let before = json!({"phones": ["1111111111"]});
        let after = json!({"phones": ["2222222222"]});
        let entry = AuditEntry::update("John", &before, &after, Some("phones changed".into()));

        assert_eq!(entry.operation, Operation::Update);
        assert!(entry.before.is_some());
        assert!(entry.after.is_some());
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete("John", &json!({"name": "John"}));
        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_human_readable() {
        let entry = AuditEntry::update(
            "John",
            &json!({}),
            &json!({}),
            Some("birthday: (added) -> \"01-01-1990\"".into()),
        );
        let text = entry.format_human_readable();
        assert!(text.contains("UPDATE John"));
        assert!(text.contains("Changes: birthday"));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::create("John", &json!({"name": "John"}));
        let line = serde_json::to_string(&entry).unwrap();
        assert!(line.contains("\"operation\":\"create\""));
        assert!(!line.contains("before"));
        assert!(!line.contains("diff_summary"));
    }
}
