//! Record rendering: condensed one-liners for quiet severities, full detail
//! for anything that needs context. Rendering never fails and never returns
//! an empty set of lines for a structured record.

pub mod detail;

use serde_json::{Map, Value};

use crate::parser::ParsedRecord;

/// Marker prepended to JSON-looking lines that failed to decode, so they
/// stand out without losing a byte of the original text.
pub const RAW_MARKER: &str = "[raw]";

/// Severity buckets derived from a record's level field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// `info` and `debug`: condensed to one line when a message is present.
    Info,
    /// `warn` / `warning`: full detail.
    Warn,
    /// `error` with no matching ignore pattern: full detail.
    Error,
    /// `error` whose error text matches a configured ignore pattern:
    /// condensed like Info.
    IgnoredError,
    /// Absent or unrecognized level: full detail, never condensed.
    Unknown,
}

/// Derive the severity bucket for a decoded field map. `level` is tried
/// before `lvl`, case-insensitively; an error-level record is demoted to
/// `IgnoredError` when its `error` text contains any configured pattern.
pub fn severity_of(fields: &Map<String, Value>, ignore_patterns: &[String]) -> Severity {
    let level = lookup_str(fields, &["level", "lvl"]).map(|l| l.to_ascii_lowercase());
    let severity = match level.as_deref() {
        Some("info") | Some("debug") => Severity::Info,
        Some("warn") | Some("warning") => Severity::Warn,
        Some("error") => Severity::Error,
        _ => Severity::Unknown,
    };

    if severity == Severity::Error {
        if let Some(error_text) = lookup_str(fields, &["error"]) {
            let ignored = ignore_patterns
                .iter()
                .any(|p| !p.is_empty() && error_text.contains(p.as_str()));
            if ignored {
                return Severity::IgnoredError;
            }
        }
    }

    severity
}

/// Render one classified record to zero-or-more output lines. Infallible:
/// unstructured records come back verbatim, structured records fall back to
/// full detail whenever condensation is not possible.
pub fn render(record: &ParsedRecord, ignore_patterns: &[String]) -> Vec<String> {
    match record {
        ParsedRecord::Plain { text } | ParsedRecord::StackFrame { text } => vec![text.clone()],
        ParsedRecord::Malformed { text } => vec![format!("{RAW_MARKER} {text}")],
        ParsedRecord::Json { prefix, fields } => {
            render_structured(prefix, fields, ignore_patterns)
        }
        ParsedRecord::Zap {
            timestamp,
            level,
            caller,
            message,
            fields,
        } => {
            // Funnel zap records through the same severity branch as JSON
            // records by rebuilding the equivalent field map.
            let mut map = Map::new();
            map.insert("ts".to_string(), Value::String(timestamp.clone()));
            map.insert("level".to_string(), Value::String(level.clone()));
            map.insert("caller".to_string(), Value::String(caller.clone()));
            map.insert("msg".to_string(), Value::String(message.clone()));
            for (key, value) in fields {
                map.entry(key.clone()).or_insert_with(|| value.clone());
            }
            render_structured("", &map, ignore_patterns)
        }
    }
}

fn render_structured(
    prefix: &str,
    fields: &Map<String, Value>,
    ignore_patterns: &[String],
) -> Vec<String> {
    let severity = severity_of(fields, ignore_patterns);
    let message = lookup_str(fields, &["msg", "message"]);

    let mut lines = match (severity, message) {
        (Severity::Info, Some(msg)) => vec![format!("INFO: {msg}")],
        (Severity::IgnoredError, Some(msg)) => vec![format!("IGNORED_ERROR: {msg}")],
        // Warn, Error, Unknown — and condensable records with no message.
        _ => detail::render_full(fields),
    };

    if !prefix.trim().is_empty() {
        if let Some(first) = lines.first_mut() {
            *first = format!("{prefix}{first}");
        }
    }

    lines
}

/// Ordered, case-insensitive field lookup returning the matched key and its
/// value rendered as text. Earlier names win; keys whose values have no
/// scalar rendering are passed over so a nested `msg` object does not mask a
/// usable `message` string.
pub(crate) fn lookup_scalar_entry<'a>(
    fields: &'a Map<String, Value>,
    names: &[&str],
) -> Option<(&'a str, String)> {
    for name in names {
        for (key, value) in fields {
            if key.eq_ignore_ascii_case(name) {
                if let Some(text) = scalar_text(value) {
                    return Some((key.as_str(), text));
                }
            }
        }
    }
    None
}

/// As [`lookup_scalar_entry`], discarding the key.
pub(crate) fn lookup_str(fields: &Map<String, Value>, names: &[&str]) -> Option<String> {
    lookup_scalar_entry(fields, names).map(|(_, text)| text)
}

/// Text rendering for scalar JSON values; `None` for objects, arrays, null.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Object(_) | Value::Array(_) => None,
    }
}
