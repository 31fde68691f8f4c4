//! Design-system convention rules
//!
//! Patterns for styling that bypasses the design tokens in components and
//! stylesheets.

use crate::rules::{Rule, Severity, UI_EXTENSIONS};

pub const DESIGN_RULES: &[Rule] = &[
    Rule::new(
        "hardcoded-color",
        Severity::Low,
        r"#[0-9a-f]{3,8}\b",
        "Hard-coded color, use a design token",
        UI_EXTENSIONS,
    ),
    Rule::new(
        "inline-style",
        Severity::Low,
        r"style=\{\{",
        "Inline style object, use a class or styled component",
        &["tsx", "jsx"],
    ),
    Rule::new(
        "important-override",
        Severity::Medium,
        r"!important\b",
        "!important overrides the cascade",
        &["css"],
    ),
    Rule::new(
        "px-font-size",
        Severity::Low,
        r"font-size:\s*\d+px",
        "Raw pixel font size, use the type scale",
        &["css"],
    ),
];
