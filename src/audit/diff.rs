//! Diff generation for audit entries
//!
//! Summarizes what changed between two JSON snapshots of an entity. Nested
//! objects are walked so a raise shows up as
//! `job.compensation.hourly: 20.0 -> 22.0` rather than an opaque object.

use serde_json::Value;

/// Generate a human-readable diff between two JSON values
///
/// Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let mut changes = Vec::new();
    collect_changes(before, after, "", &mut changes);

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn collect_changes(before: &Value, after: &Value, prefix: &str, changes: &mut Vec<String>) {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            for (key, before_val) in before_obj {
                let path = join_path(prefix, key);
                match after_obj.get(key) {
                    Some(after_val) if before_val != after_val => {
                        collect_changes(before_val, after_val, &path, changes)
                    }
                    Some(_) => {}
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        path,
                        format_value(before_val)
                    )),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!(
                        "{}: (added) -> {}",
                        join_path(prefix, key),
                        format_value(after_val)
                    ));
                }
            }
        }
        _ if before != after => {
            let label = if prefix.is_empty() { "value" } else { prefix };
            changes.push(format!(
                "{}: {} -> {}",
                label,
                format_value(before),
                format_value(after)
            ));
        }
        _ => {}
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Format a JSON value for human-readable display
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            if s.chars().count() > 50 {
                let truncated: String = s.chars().take(47).collect();
                format!("\"{}...\"", truncated)
            } else {
                format!("\"{}\"", s)
            }
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
    fn test_simple_field_change() {
        let before = json!({"title": "Cook", "age": 30});
        let after = json!({"title": "Chef", "age": 30});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "title: \"Cook\" -> \"Chef\"");
    }

    #[test]
    fn test_nested_change() {
        let before = json!({"job": {"title": "Cook", "compensation": {"hourly": 20.0}}});
        let after = json!({"job": {"title": "Cook", "compensation": {"hourly": 22.0}}});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "job.compensation.hourly: 20.0 -> 22.0");
    }

    #[test]
    fn test_variant_change() {
        let before = json!({"compensation": {"hourly": 20.0}});
        let after = json!({"compensation": {"salaried": 40000}});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("compensation.hourly: 20.0 -> (removed)"));
        assert!(diff.contains("compensation.salaried: (added) -> 40000"));
    }

    #[test]
    fn test_field_added() {
        let before = json!({"first_name": "Ann"});
        let after = json!({"first_name": "Ann", "job": {"title": "Cook"}});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "job: (added) -> {1 fields}");
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"name": "Test", "value": 100});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_scalar_change() {
        let diff = generate_diff(&json!(1000), &json!(1100)).unwrap();
        assert_eq!(diff, "value: 1000 -> 1100");
    }

    #[test]
    fn test_long_string_truncated() {
        let before = json!({"title": "a".repeat(60)});
        let after = json!({"title": "b"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("..."));
    }
}
