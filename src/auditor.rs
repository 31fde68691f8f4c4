//! The pattern auditor
//!
//! Compiles the rule tables once, then scans a single file and produces a
//! severity-tagged issue list. The auditor is advisory: a critical finding
//! fails the result but never blocks the caller.

use std::path::Path;

use regex::{Regex, RegexBuilder};

use crate::config::Config;
use crate::rules::{self, Rule, Severity};

/// One concrete match of a rule against file content
#[derive(Debug, Clone)]
pub struct Issue {
    /// Rule that produced this issue
    pub rule_id: &'static str,

    /// Severity inherited from the rule
    pub severity: Severity,

    /// Message inherited from the rule
    pub message: &'static str,

    /// 1-based line number of the match
    pub line: usize,

    /// Matched text, truncated for reporting
    pub matched: String,
}

/// Result of auditing one file
#[derive(Debug, Clone)]
pub struct AuditResult {
    /// False iff any issue is critical
    pub passed: bool,

    /// Issues in discovery order: category order, then match order
    pub issues: Vec<Issue>,
}

impl AuditResult {
    /// A clean result: nothing found, or nothing scanned
    pub fn pass() -> Self {
        Self {
            passed: true,
            issues: Vec::new(),
        }
    }

    fn from_issues(issues: Vec<Issue>) -> Self {
        let passed = !issues.iter().any(|i| i.severity == Severity::Critical);
        Self { passed, issues }
    }

    /// Count issues at a given severity
    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

/// A rule with its compiled regex
struct CompiledRule {
    rule: &'static Rule,
    regex: Regex,
}

/// The pattern auditor
pub struct PatternAuditor {
    config: Config,
    rules: Vec<CompiledRule>,
}

impl PatternAuditor {
    /// Create an auditor with all rule tables compiled, in category order.
    /// A pattern that fails to compile is an authoring bug; it is skipped
    /// rather than panicking in the hook path (a test asserts none do).
    pub fn new(config: Config) -> Self {
        let rules = rules::all_rules()
            .filter_map(|rule| {
                RegexBuilder::new(rule.pattern)
                    .case_insensitive(true)
                    .build()
                    .ok()
                    .map(|regex| CompiledRule { rule, regex })
            })
            .collect();

        Self { config, rules }
    }

    /// Audit a file on disk.
    ///
    /// Files outside the extension allow-list and unreadable files both
    /// produce a vacuous pass with zero issues.
    pub fn audit_file(&self, path: &Path) -> AuditResult {
        let extension = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => ext.to_ascii_lowercase(),
            None => return AuditResult::pass(),
        };

        if !self.config.extension_allowed(&extension) {
            return AuditResult::pass();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => self.audit_content(&extension, &content),
            Err(_) => AuditResult::pass(),
        }
    }

    /// Audit already-loaded content for a given extension (without the dot)
    pub fn audit_content(&self, extension: &str, content: &str) -> AuditResult {
        let max_len = self.config.audit.max_match_len;
        let mut issues = Vec::new();

        for compiled in &self.rules {
            if !compiled.rule.applies_to(extension) {
                continue;
            }

            for m in compiled.regex.find_iter(content) {
                issues.push(Issue {
                    rule_id: compiled.rule.id,
                    severity: compiled.rule.severity,
                    message: compiled.rule.message,
                    line: line_number(content, m.start()),
                    matched: truncate_match(m.as_str(), max_len),
                });
            }
        }

        AuditResult::from_issues(issues)
    }

    /// Number of rules that compiled successfully
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

/// 1-based line number of a byte offset, counting preceding newlines
fn line_number(content: &str, offset: usize) -> usize {
    content[..offset].bytes().filter(|&b| b == b'\n').count() + 1
}

/// Truncate matched text to at most `max_len` characters, on a char boundary
fn truncate_match(matched: &str, max_len: usize) -> String {
    match matched.char_indices().nth(max_len) {
        Some((idx, _)) => matched[..idx].to_string(),
        None => matched.to_string(),
    }
}
