//! Model — PrettyConfig.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrettyConfig {
    /// Plain substrings, not regexes. An error-level record whose `error`
    /// field contains any of these is demoted to a condensed
    /// `IGNORED_ERROR` line instead of full detail.
    pub ignore_errors: Vec<String>,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self {
            // Worker-shutdown noise seen on every local run.
            ignore_errors: vec!["container not found".to_string()],
        }
    }
}

impl PrettyConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.ignore_errors.iter().any(|p| p.trim().is_empty()) {
            return Err("ignore_errors must not contain empty patterns".to_string());
        }
        Ok(())
    }
}
