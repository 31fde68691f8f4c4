//! Code quality rules
//!
//! Patterns for debugging leftovers and type-safety escapes in TypeScript
//! and JavaScript sources.

use crate::rules::{Rule, Severity, CODE_EXTENSIONS};

pub const QUALITY_RULES: &[Rule] = &[
    Rule::new(
        "console-log",
        Severity::Low,
        r"console\.(log|debug|info)\s*\(",
        "Leftover console logging",
        CODE_EXTENSIONS,
    ),
    Rule::new(
        "debugger-statement",
        Severity::Medium,
        r"\bdebugger\b",
        "Debugger statement left in code",
        CODE_EXTENSIONS,
    ),
    Rule::new(
        "explicit-any",
        Severity::Low,
        r":\s*any\b",
        "Explicit any defeats type checking",
        &["ts", "tsx"],
    ),
    Rule::new(
        "ts-suppression",
        Severity::Medium,
        r"@ts-(ignore|nocheck|expect-error)",
        "TypeScript error suppression",
        &["ts", "tsx"],
    ),
    Rule::new(
        "alert-call",
        Severity::Medium,
        r"\balert\s*\(",
        "Blocking alert() call",
        CODE_EXTENSIONS,
    ),
    Rule::new(
        "todo-marker",
        Severity::Low,
        r"//\s*(TODO|FIXME|HACK)\b",
        "Unresolved TODO/FIXME marker",
        CODE_EXTENSIONS,
    ),
];
