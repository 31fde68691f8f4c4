//! Report formatting for audit results
//!
//! Produces the human-readable stderr report: header, issues bucketed by
//! severity (most severe first), and per-severity totals.

use crate::auditor::Issue;
use crate::rules::Severity;

/// Format the full report for a file's issues.
///
/// An empty issue list produces a single "no issues" line.
pub fn format_report(path: &str, issues: &[Issue]) -> String {
    if issues.is_empty() {
        return format!("[pattern-audit] {}: no issues found", path);
    }

    let mut out = String::new();
    out.push_str(&format!(
        "[pattern-audit] {}: {} issue{}\n",
        path,
        issues.len(),
        if issues.len() == 1 { "" } else { "s" }
    ));

    for severity in Severity::REPORT_ORDER {
        let bucket: Vec<&Issue> = issues.iter().filter(|i| i.severity == severity).collect();
        if bucket.is_empty() {
            continue;
        }

        out.push_str(&format!("  {}:\n", severity.label()));
        for issue in bucket {
            out.push_str(&format!(
                "    Line {}: {} ({})\n",
                issue.line, issue.message, issue.matched
            ));
        }
    }

    out.push_str(&format!(
        "  totals: {} critical, {} high, {} medium, {} low",
        count(issues, Severity::Critical),
        count(issues, Severity::High),
        count(issues, Severity::Medium),
        count(issues, Severity::Low),
    ));

    out
}

/// Advisory line appended when a result did not pass
pub fn advisory_line() -> &'static str {
    "[pattern-audit] critical patterns found; advisory only, the edit was not blocked"
}

fn count(issues: &[Issue], severity: Severity) -> usize {
    issues.iter().filter(|i| i.severity == severity).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(rule_id: &'static str, severity: Severity, line: usize) -> Issue {
        Issue {
            rule_id,
            severity,
            message: "test message",
            line,
            matched: "matched".to_string(),
        }
    }

    #[test]
    fn test_empty_report() {
        let report = format_report("src/app.ts", &[]);
        assert_eq!(report, "[pattern-audit] src/app.ts: no issues found");
    }

    #[test]
    fn test_single_issue_report() {
        let issues = vec![issue("console-log", Severity::Low, 3)];
        let report = format_report("src/app.ts", &issues);
        assert!(report.contains("1 issue\n"));
        assert!(report.contains("LOW:"));
        assert!(report.contains("Line 3: test message"));
        assert!(report.contains("totals: 0 critical, 0 high, 0 medium, 1 low"));
    }

    #[test]
    fn test_severity_bucket_order() {
        let issues = vec![
            issue("console-log", Severity::Low, 1),
            issue("hardcoded-password", Severity::Critical, 2),
            issue("eval-call", Severity::High, 3),
        ];
        let report = format_report("src/app.ts", &issues);

        let critical = report.find("CRITICAL:").unwrap();
        let high = report.find("HIGH:").unwrap();
        let low = report.find("LOW:").unwrap();
        assert!(critical < high);
        assert!(high < low);
        assert!(!report.contains("MEDIUM:"));
    }

    #[test]
    fn test_totals_line() {
        let issues = vec![
            issue("a", Severity::Critical, 1),
            issue("b", Severity::Medium, 2),
            issue("c", Severity::Medium, 3),
        ];
        let report = format_report("x.ts", &issues);
        assert!(report.ends_with("totals: 1 critical, 0 high, 2 medium, 0 low"));
    }

    #[test]
    fn test_matched_text_shown() {
        let mut i = issue("hardcoded-password", Severity::Critical, 7);
        i.matched = r#"password: "abc123""#.to_string();
        let report = format_report("auth.ts", &[i]);
        assert!(report.contains(r#"(password: "abc123")"#));
    }
}
