//! Target file resolution for the hook
//!
//! The edited file path arrives via the `CLAUDE_FILE_PATH` environment
//! variable. When the variable is unset, the PostToolUse hook JSON on stdin
//! is consulted for `tool_input.file_path`.

use serde::Deserialize;
use std::env;

/// Environment variable carrying the edited file path
pub const TARGET_ENV: &str = "CLAUDE_FILE_PATH";

/// Environment variable that disables the hook entirely
pub const DISABLED_ENV: &str = "PATTERN_AUDIT_DISABLED";

/// PostToolUse hook input from Claude Code
#[derive(Debug, Deserialize)]
pub struct HookInput {
    /// Name of the tool that ran (e.g., "Edit", "Write")
    #[serde(default)]
    pub tool_name: Option<String>,

    /// Tool-specific parameters
    #[serde(default)]
    pub tool_input: Option<ToolInput>,

    #[serde(default)]
    pub hook_event_name: Option<String>,

    #[serde(default)]
    pub session_id: Option<String>,
}

/// The subset of tool parameters the auditor cares about
#[derive(Debug, Deserialize)]
pub struct ToolInput {
    #[serde(default)]
    pub file_path: Option<String>,
}

impl HookInput {
    /// Parse hook input from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The edited file path, if the tool had one
    pub fn file_path(&self) -> Option<&str> {
        self.tool_input.as_ref()?.file_path.as_deref()
    }
}

/// Target path from the environment, if set and non-empty
pub fn target_from_env() -> Option<String> {
    env::var(TARGET_ENV).ok().filter(|s| !s.trim().is_empty())
}

/// Target path from hook JSON. Malformed JSON resolves to no target; the
/// hook is advisory and never surfaces parse errors.
pub fn target_from_hook_json(json: &str) -> Option<String> {
    if json.trim().is_empty() {
        return None;
    }
    HookInput::from_json(json)
        .ok()
        .and_then(|input| input.file_path().map(String::from))
}

/// Check whether the hook is disabled via environment
pub fn is_disabled() -> bool {
    env::var(DISABLED_ENV).is_ok()
}
