//! Full-detail rendering: every field of a structured record, with
//! multi-line values expanded onto indented lines instead of inline escapes.

use serde_json::{Map, Value};

use super::lookup_scalar_entry;

/// Header label when a record carries no usable level field.
const NO_LEVEL_LABEL: &str = "LOG";

/// Render a decoded field map in full. Layout:
///
/// ```text
/// ERROR: poll failed
///   error: connection refused
///   attempt: 3
///   stacktrace:
///     go.temporal.io/sdk/internal.(*baseWorker).runPoller
///     	/go/internal/worker.go:486
/// ```
///
/// The header consumes the level and message fields; `error` follows the
/// header, `stacktrace` goes last, everything else keeps input order. Always
/// produces at least the header line.
pub(crate) fn render_full(fields: &Map<String, Value>) -> Vec<String> {
    let mut consumed: Vec<&str> = Vec::new();

    let label = match lookup_scalar_entry(fields, &["level", "lvl"]) {
        Some((key, text)) => {
            consumed.push(key);
            text.to_ascii_uppercase()
        }
        None => NO_LEVEL_LABEL.to_string(),
    };

    let header = match lookup_scalar_entry(fields, &["msg", "message"]) {
        Some((key, text)) => {
            consumed.push(key);
            format!("{label}: {text}")
        }
        None => format!("{label}:"),
    };

    let mut lines = vec![header];
    let mut rest = Vec::new();
    let mut trailer = Vec::new();

    for (key, value) in fields {
        if consumed.contains(&key.as_str()) {
            continue;
        }
        if key.eq_ignore_ascii_case("error") {
            push_field(&mut lines, key, value);
        } else if key.eq_ignore_ascii_case("stacktrace") {
            push_field(&mut trailer, key, value);
        } else {
            push_field(&mut rest, key, value);
        }
    }

    lines.extend(rest);
    lines.extend(trailer);
    lines
}

/// Emit one field as `  key: value`. Strings with embedded newlines are
/// expanded one source line per output line; nested objects and arrays are
/// serialized as compact JSON so nothing is lost.
fn push_field(lines: &mut Vec<String>, key: &str, value: &Value) {
    match value {
        Value::String(text) if text.contains('\n') => {
            lines.push(format!("  {key}:"));
            for part in text.lines() {
                lines.push(format!("    {part}"));
            }
        }
        Value::String(text) => lines.push(format!("  {key}: {text}")),
        // Display on a JSON value is its compact serialization.
        other => lines.push(format!("  {key}: {other}")),
    }
}
