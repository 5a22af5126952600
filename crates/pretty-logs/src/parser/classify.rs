//! Classify — the per-line classifier and its continuation flag.

use serde_json::{Map, Value};

use super::model::ParsedRecord;
use super::pattern;

/// Classifies one line at a time. The only cross-line state is whether the
/// previous line belonged to a stack trace, which gates the indented
/// `path:line` continuation rule. The driver owns one `Classifier` per run.
#[derive(Debug, Default)]
pub struct Classifier {
    prev_was_stack_frame: bool,
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a single line. First match wins:
    ///
    /// 1. empty or whitespace-only line
    /// 2. stack-trace function identifier (sets the continuation flag)
    /// 3. indented `path:line`, only while the continuation flag is set
    /// 4. zap console record
    /// 5. JSON-object decode from the first `{` (failure → `Malformed`)
    /// 6. plain text
    pub fn classify(&mut self, line: &str) -> ParsedRecord {
        // Blank lines carry no signal either way and leave the
        // continuation flag untouched.
        if line.trim().is_empty() {
            return ParsedRecord::plain(line);
        }

        if pattern::is_stack_function_line(line) {
            self.prev_was_stack_frame = true;
            return ParsedRecord::StackFrame {
                text: line.to_string(),
            };
        }

        if self.prev_was_stack_frame && pattern::is_stack_file_line(line) {
            return ParsedRecord::StackFrame {
                text: line.to_string(),
            };
        }

        self.prev_was_stack_frame = false;

        if let Some(zap) = pattern::match_zap_line(line) {
            let fields = match zap.fields {
                None => Map::new(),
                Some(raw) => match serde_json::from_str::<Value>(raw) {
                    Ok(Value::Object(map)) => map,
                    // The trailing column looked like JSON but is not an
                    // object; treating the whole line as malformed keeps
                    // every byte of it in the output.
                    _ => {
                        tracing::trace!(text = line, "zap trailing fields did not decode");
                        return ParsedRecord::Malformed {
                            text: line.to_string(),
                        };
                    }
                },
            };
            return ParsedRecord::Zap {
                timestamp: zap.timestamp.to_string(),
                level: zap.level.to_string(),
                caller: zap.caller.to_string(),
                message: zap.message.to_string(),
                fields,
            };
        }

        if let Some(brace) = line.find('{') {
            return match serde_json::from_str::<Value>(&line[brace..]) {
                Ok(Value::Object(fields)) => ParsedRecord::Json {
                    prefix: line[..brace].to_string(),
                    fields,
                },
                Ok(_) | Err(_) => {
                    tracing::trace!(text = line, "line resembles JSON but did not decode");
                    ParsedRecord::Malformed {
                        text: line.to_string(),
                    }
                }
            };
        }

        ParsedRecord::plain(line)
    }
}
