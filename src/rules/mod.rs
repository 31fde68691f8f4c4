//! Audit rules for claude-pattern-audit
//!
//! Defines the four rule categories: code quality, design-system conventions,
//! legal-compliance phrasing, and security anti-patterns.

pub mod design;
pub mod legal;
pub mod quality;
pub mod security;

use serde::Serialize;

/// Severity of a finding, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Uppercase label for report headings
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Report order: most severe first
    pub const REPORT_ORDER: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];
}

/// An audit rule definition
#[derive(Debug, Clone)]
pub struct Rule {
    /// Unique identifier for this rule
    pub id: &'static str,

    /// Severity assigned to every match
    pub severity: Severity,

    /// Regex pattern, applied case-insensitively to file content
    pub pattern: &'static str,

    /// Human-readable message for the report
    pub message: &'static str,

    /// File extensions (without the dot) this rule applies to
    pub extensions: &'static [&'static str],
}

impl Rule {
    /// Create a new rule
    pub const fn new(
        id: &'static str,
        severity: Severity,
        pattern: &'static str,
        message: &'static str,
        extensions: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            severity,
            pattern,
            message,
            extensions,
        }
    }

    /// Check whether this rule applies to a file extension
    pub fn applies_to(&self, extension: &str) -> bool {
        self.extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(extension))
    }
}

/// Script and component sources
pub const CODE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

/// Component and stylesheet sources
pub const UI_EXTENSIONS: &[&str] = &["tsx", "jsx", "css"];

/// Sources plus prose, where compliance phrasing can appear
pub const PROSE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "md"];

/// All rule tables in discovery order
pub fn category_tables() -> [&'static [Rule]; 4] {
    [
        quality::QUALITY_RULES,
        design::DESIGN_RULES,
        legal::LEGAL_RULES,
        security::SECURITY_RULES,
    ]
}

/// Flat view of every rule, preserving category order
pub fn all_rules() -> impl Iterator<Item = &'static Rule> {
    category_tables().into_iter().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::RegexBuilder;

    #[test]
    fn test_all_patterns_compile() {
        for rule in all_rules() {
            let result = RegexBuilder::new(rule.pattern)
                .case_insensitive(true)
                .build();
            assert!(
                result.is_ok(),
                "Rule {} has invalid pattern: {}",
                rule.id,
                rule.pattern
            );
        }
    }

    #[test]
    fn test_rule_ids_unique() {
        let mut seen = std::collections::HashSet::new();
        for rule in all_rules() {
            assert!(seen.insert(rule.id), "Duplicate rule id: {}", rule.id);
        }
    }

    #[test]
    fn test_every_rule_has_extensions() {
        for rule in all_rules() {
            assert!(
                !rule.extensions.is_empty(),
                "Rule {} applies to no extensions",
                rule.id
            );
        }
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn test_applies_to() {
        let rule = Rule::new("x", Severity::Low, r"x", "x", CODE_EXTENSIONS);
        assert!(rule.applies_to("ts"));
        assert!(rule.applies_to("TSX"));
        assert!(!rule.applies_to("css"));
    }
}
