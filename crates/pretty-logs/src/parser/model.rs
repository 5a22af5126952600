//! Model — classified record variants.

use serde_json::{Map, Value};

/// One classified input line.
///
/// Every variant carries enough of the original line to reproduce it in the
/// output: `Plain`, `StackFrame` and `Malformed` keep the full text, `Json`
/// keeps any prefix that sat before the first `{`, and `Zap` keeps all five
/// columns of the console encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedRecord {
    /// Passthrough text with no structure detected.
    Plain { text: String },

    /// A successfully decoded single-line JSON object. `prefix` is whatever
    /// non-JSON text preceded the first `{` (often empty, sometimes a
    /// container name or pipe marker) and must survive into the output.
    Json {
        prefix: String,
        fields: Map<String, Value>,
    },

    /// A line matching the zap console encoding: timestamp, level token,
    /// caller (`file:line`), message, optional trailing JSON object.
    Zap {
        timestamp: String,
        level: String,
        caller: String,
        message: String,
        fields: Map<String, Value>,
    },

    /// A Go-style panic/stack-trace line: either a bare
    /// `package/path.(*Type).Method` identifier or the indented
    /// `/path/file.go:N` line that follows it. Preserved verbatim.
    StackFrame { text: String },

    /// Text that superficially resembles JSON (contains `{`) but failed to
    /// decode to an object.
    Malformed { text: String },
}

impl ParsedRecord {
    /// Passthrough constructor used for anything with no detected structure.
    pub fn plain(text: &str) -> Self {
        Self::Plain {
            text: text.to_string(),
        }
    }
}
