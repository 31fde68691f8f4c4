//! Configuration loading for claude-pattern-audit
//!
//! Supports TOML configuration with embedded defaults.

use serde::Deserialize;
use std::path::PathBuf;

/// General configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Master switch; when false the hook exits without scanning
    pub enabled: bool,

    /// Enable JSONL run logging
    pub run_log: bool,

    /// Path to the run log file
    pub run_log_path: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            run_log: false,
            run_log_path: Some("~/.claude/pattern-audit/runs.jsonl".to_string()),
        }
    }
}

/// Audit configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// File extensions eligible for auditing (with leading dot)
    pub extensions: Vec<String>,

    /// Maximum characters of matched text kept per issue
    pub max_match_len: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            extensions: vec![
                ".ts".to_string(),
                ".tsx".to_string(),
                ".js".to_string(),
                ".jsx".to_string(),
                ".css".to_string(),
                ".md".to_string(),
            ],
            max_match_len: 50,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub audit: AuditConfig,
}

impl Config {
    /// Load configuration from the standard location or use defaults
    pub fn load() -> Self {
        let path = dirs::home_dir().map(|p| p.join(".claude/pattern-audit/config.toml"));

        if let Some(path) = path {
            if path.exists() {
                if let Ok(content) = std::fs::read_to_string(&path) {
                    match toml::from_str(&content) {
                        Ok(config) => return config,
                        Err(e) => {
                            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        Config::default()
    }

    /// Load from a specific path
    pub fn load_from(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Check whether a file extension (without the dot) is eligible
    pub fn extension_allowed(&self, extension: &str) -> bool {
        self.audit
            .extensions
            .iter()
            .any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(extension))
    }

    /// Expand ~ in path strings
    pub fn expand_path(path: &str) -> PathBuf {
        if path.starts_with("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(&path[2..]);
            }
        }
        PathBuf::from(path)
    }

    /// Get the run log path (expanded), if logging is enabled
    pub fn run_log_path(&self) -> Option<PathBuf> {
        if !self.general.run_log {
            return None;
        }
        self.general
            .run_log_path
            .as_ref()
            .map(|p| Self::expand_path(p))
    }
}

/// Embedded default configuration
pub const DEFAULT_CONFIG_TOML: &str = r#"
[general]
enabled = true
run_log = false
run_log_path = "~/.claude/pattern-audit/runs.jsonl"

[audit]
extensions = [".ts", ".tsx", ".js", ".jsx", ".css", ".md"]
max_match_len = 50
"#;
