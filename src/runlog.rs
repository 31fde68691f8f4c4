//! JSONL run logging for claude-pattern-audit
//!
//! Records one entry per audited file for later analysis. Logging failures
//! degrade to a warning; the hook result is unaffected.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::auditor::AuditResult;
use crate::rules::Severity;

/// One run log entry
#[derive(Debug, Serialize)]
pub struct RunEntry {
    /// Timestamp of the run
    pub timestamp: DateTime<Utc>,

    /// File that was audited
    pub file: String,

    /// Whether the audit passed (no critical findings)
    pub passed: bool,

    /// Issue counts per severity
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl RunEntry {
    /// Create an entry from an audit result
    pub fn new(file: &str, result: &AuditResult) -> Self {
        Self {
            timestamp: Utc::now(),
            file: file.to_string(),
            passed: result.passed,
            critical: result.count(Severity::Critical),
            high: result.count(Severity::High),
            medium: result.count(Severity::Medium),
            low: result.count(Severity::Low),
        }
    }
}

/// Run logger appending JSONL entries
pub struct RunLogger {
    writer: Option<BufWriter<File>>,
}

impl RunLogger {
    /// Create a new logger; `None` path disables logging
    pub fn new(path: Option<&Path>) -> Self {
        let writer = path.and_then(|p| {
            if let Some(parent) = p.parent() {
                let _ = std::fs::create_dir_all(parent);
            }

            OpenOptions::new()
                .create(true)
                .append(true)
                .open(p)
                .ok()
                .map(BufWriter::new)
        });

        Self { writer }
    }

    /// Log one audit run
    pub fn log_run(&mut self, file: &str, result: &AuditResult) -> Result<(), std::io::Error> {
        if let Some(ref mut writer) = self.writer {
            let entry = RunEntry::new(file, result);
            let json = serde_json::to_string(&entry)?;
            writeln!(writer, "{}", json)?;
            writer.flush()?;
        }
        Ok(())
    }

    /// Check if logging is enabled
    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }
}

impl Default for RunLogger {
    fn default() -> Self {
        Self { writer: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auditor::Issue;
    use tempfile::NamedTempFile;

    fn failing_result() -> AuditResult {
        AuditResult {
            passed: false,
            issues: vec![Issue {
                rule_id: "hardcoded-password",
                severity: Severity::Critical,
                message: "Hard-coded password in source",
                line: 3,
                matched: r#"password: "abc123""#.to_string(),
            }],
        }
    }

    #[test]
    fn test_run_entry_counts() {
        let entry = RunEntry::new("auth.ts", &failing_result());
        assert!(!entry.passed);
        assert_eq!(entry.critical, 1);
        assert_eq!(entry.high, 0);
    }

    #[test]
    fn test_logger_writes_jsonl() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path();

        let mut logger = RunLogger::new(Some(path));
        assert!(logger.is_enabled());
        logger.log_run("auth.ts", &failing_result()).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("auth.ts"));
        assert!(content.contains("\"passed\":false"));
        assert!(content.contains("\"critical\":1"));
    }

    #[test]
    fn test_logger_disabled() {
        let mut logger = RunLogger::default();
        assert!(!logger.is_enabled());
        // No error when disabled
        logger.log_run("x.ts", &AuditResult::pass()).unwrap();
    }
}
