//! claude-pattern-audit - Post-edit pattern auditor for Claude Code
//!
//! This library scans a single edited file against fixed regex rule tables
//! and produces a severity-categorized report. The check is advisory-only:
//! critical findings fail the result but never block the edit.
//!
//! # Features
//!
//! - **Four rule categories**: code quality, design-system conventions,
//!   legal-compliance phrasing, security anti-patterns
//! - **Severity grouping**: low / medium / high / critical
//! - **Extension gating**: only `.ts .tsx .js .jsx .css .md` files are scanned
//! - **Run logging**: optional JSONL log of audit outcomes
//!
//! # Example
//!
//! ```
//! use claude_pattern_audit::{Config, PatternAuditor};
//!
//! let auditor = PatternAuditor::new(Config::default());
//! let result = auditor.audit_content("ts", r#"const password = "abc123";"#);
//!
//! assert!(!result.passed);
//! ```

pub mod auditor;
pub mod config;
pub mod input;
pub mod report;
pub mod rules;
pub mod runlog;

// Re-exports for convenience
pub use auditor::{AuditResult, Issue, PatternAuditor};
pub use config::Config;
pub use input::HookInput;
pub use rules::Severity;
