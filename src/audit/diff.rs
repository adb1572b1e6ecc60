//! Diff generation for audit logging
//!
//! Generates human-readable diffs between before and after values
//! for audit log entries.

use serde_json::Value;

/// Generate a human-readable diff between two JSON values
///
/// Only top-level field changes are reported. Returns `None` when nothing
/// changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if before_val != after_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        key,
                        format_value(before_val)
                    )),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ if before != after => Some(format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )),
        _ => None,
    }
}

/// Format a JSON value for human-readable display
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("\"{}\"", s),
        // phone lists are short, show them whole
        Value::Array(arr) if arr.len() <= 5 => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_changes() {
        let value = json!({"name": "John", "phones": ["1111111111"]});
        assert_eq!(generate_diff(&value, &value), None);
    }

    #[test]
    fn test_changed_phone_list() {
        let before = json!({"name": "John", "phones": ["1111111111"]});
        let after = json!({"name": "John", "phones": ["1111111111", "2222222222"]});
        assert_eq!(
            generate_diff(&before, &after).unwrap(),
            r#"phones: ["1111111111"] -> ["1111111111", "2222222222"]"#
        );
    }

    #[test]
    fn test_added_and_removed_fields() {
        let before = json!({"name": "John"});
        let after = json!({"name": "John", "birthday": "01-01-1990"});
        assert_eq!(
            generate_diff(&before, &after).unwrap(),
            r#"birthday: (added) -> "01-01-1990""#
        );
        assert_eq!(
            generate_diff(&after, &before).unwrap(),
            r#"birthday: "01-01-1990" -> (removed)"#
        );
    }

    #[test]
    fn test_long_arrays_summarized() {
        let before = json!({"phones": []});
        let after = json!({"phones": [1, 2, 3, 4, 5, 6]});
        assert_eq!(
            generate_diff(&before, &after).unwrap(),
            "phones: [] -> [6 items]"
        );
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(generate_diff(&json!(1), &json!(2)).unwrap(), "1 -> 2");
        assert_eq!(generate_diff(&json!(1), &json!(1)), None);
    }
}
