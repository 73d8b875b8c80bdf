use faith_client::ClientError;
use serde_json::Value;

use super::format;

pub fn render_error(error: &ClientError) -> String {
    let mut entries = vec![
        ("Error:", error.code.clone()),
        ("Details:", error.message.clone()),
    ];
    if let Some(field) = error
        .data
        .as_ref()
        .and_then(|data| data.get("field"))
        .and_then(Value::as_str)
    {
        entries.push(("Field:", field.to_string()));
    }

    let mut lines = vec!["The command could not finish.".to_string(), String::new()];
    lines.extend(format::key_value_rows(&entries, 2));
    lines.push(String::new());
    lines.push("What to do next:".to_string());

    if error.recovery_steps.is_empty() {
        lines.push("  1. Retry the command.".to_string());
    } else {
        for (index, step) in error.recovery_steps.iter().enumerate() {
            lines.push(format!("  {}. {step}", index + 1));
        }
    }

    lines.join("\n")
}
