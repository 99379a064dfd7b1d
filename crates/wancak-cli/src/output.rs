//! JSON rendering for stdout.

use serde_json::{json, Value};

pub fn render(value: &Value, compact: bool) -> String {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    // Serializing a `Value` cannot fail.
    rendered.unwrap_or_default()
}

/// Machine-readable failure report.
pub fn error_json(err: &anyhow::Error) -> Value {
    let not_found = err
        .downcast_ref::<wancak::WancakError>()
        .is_some_and(|e| e.is_not_found());
    json!({
        "error": true,
        "not_found": not_found,
        "message": format!("{err:#}"),
    })
}
